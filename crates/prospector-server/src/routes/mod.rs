//! Prospector API Routes
//!
//! - /api/research - Account research (analysis)
//! - /api/prospecting - Outreach message drafting
//! - /api/meetings - Meeting transcript processing
//! - /api/plans - Account strategy plans
//! - /api/accounts, /api/contacts - CRM stand-ins (no storage yet)

pub mod accounts;
pub mod contacts;
pub mod error;
pub mod meetings;
pub mod plans;
pub mod prospecting;
pub mod research;
pub mod swagger;

use axum::Router;

use crate::AppState;

pub use error::ApiError;

/// All `/api` routes except health
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(research::router())
        .merge(prospecting::router())
        .merge(meetings::router())
        .merge(plans::router())
        .merge(accounts::router())
        .merge(contacts::router())
}
