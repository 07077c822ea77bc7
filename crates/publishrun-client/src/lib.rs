//! Client library for the remote publishing backend.
//!
//! Provides the [`PublishBackend`] trait the publisher depends on, and
//! [`BackendClient`], its HTTP implementation.

pub mod backend;
pub mod envelope;
pub mod error;
pub mod http;
pub mod wire;

pub use backend::{PublishBackend, RemoteResult};
pub use envelope::Envelope;
pub use error::ClientError;
pub use http::{BackendClient, DEFAULT_BASE_URL, SK_KEY_HEADER};
