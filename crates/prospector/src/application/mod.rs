//! Application Layer
//!
//! The four account intelligence operations and the pieces they compose:
//! validation, prompt building, the gateway call and response reduction.

pub mod budgets;
pub mod intelligence_service;
pub mod prompts;
pub mod reducer;
pub mod validation;

pub use budgets::TokenBudgets;
pub use intelligence_service::IntelligenceService;
pub use reducer::Reduction;
