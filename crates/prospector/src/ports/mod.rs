//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the orchestration layer
//! interacts with external systems.
//!
//! Implementations of these traits live in the server crate.

pub mod services;

// Re-exports
pub use services::*;
