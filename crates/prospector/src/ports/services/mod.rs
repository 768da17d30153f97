//! Service Ports
//!
//! Abstract interfaces for external services.

mod llm_gateway;

pub use llm_gateway::*;
