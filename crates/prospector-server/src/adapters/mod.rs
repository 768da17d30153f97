//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod anthropic;

// Re-exports
pub use anthropic::{AnthropicConfig, AnthropicGateway};
