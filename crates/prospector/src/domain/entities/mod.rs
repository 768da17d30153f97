//! Domain Entities
//!
//! Plain value records passed into and out of the orchestration layer.
//! - Account: a business account under research
//! - Contact: a person at an account
//! - AccountResearchOutput: analysis of an account
//! - OutreachMessage: drafted outreach copy
//! - MeetingInsight: summary of a meeting transcript
//! - AccountPlan: markdown strategy document

mod account;
mod contact;
mod meeting;
mod outreach;
mod plan;
mod research;

pub use account::*;
pub use contact::*;
pub use meeting::*;
pub use outreach::*;
pub use plan::*;
pub use research::*;
