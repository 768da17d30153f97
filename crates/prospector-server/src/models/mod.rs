//! Prospector API Models
//!
//! Request/response DTOs for the routing layer.
//! - Crm: account and contact payloads
//! - Research, Outreach, Meeting, Plan: operation requests and results
//! - Error: the error envelope

mod crm;
mod error;
mod meeting;
mod outreach;
mod plan;
mod research;

pub use crm::*;
pub use error::*;
pub use meeting::*;
pub use outreach::*;
pub use plan::*;
pub use research::*;
