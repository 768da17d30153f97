//! Value Objects
//!
//! Immutable value types used across the domain.

mod contact_stage;
mod message_type;
mod operation;

pub use contact_stage::*;
pub use message_type::*;
pub use operation::*;
