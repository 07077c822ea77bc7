//! PublishRun Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - HTTP clients or the remote publishing backend
//! - The MCP transport
//! - Runtime specifics
//!
//! Payload validation and result rendering also live here; both are pure.

pub mod account;
pub mod error;
pub mod ids;
pub mod operation;
pub mod outcome;
pub mod payload;
pub mod report;
pub mod status;
pub mod validation;

// Re-export commonly used types
pub use account::Account;
pub use error::{ErrorKind, ValidationError};
pub use ids::{CorrelationId, OperationScope};
pub use operation::PublishOperation;
pub use outcome::{AccountOutcome, BatchResult, BatchSummary};
pub use payload::{ContentKind, ContentPayload};
pub use status::{TaskState, TaskStatus};
pub use validation::validate;
