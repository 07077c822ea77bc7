//! PublishRun MCP server library.
//!
//! The binary in `main.rs` wires these pieces to a stdio transport.

pub mod config;
pub mod mcp;
pub mod publisher;
pub mod registry;

#[cfg(test)]
mod testing;

pub use config::{Args, Config};
pub use mcp::PublishMcpServer;
pub use publisher::{PublishError, Publisher, SinglePublish};
pub use registry::{RegistryError, ToolName, ToolRegistry};
