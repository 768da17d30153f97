//! Prospector Domain Library
//!
//! Account intelligence orchestration for sales teams: turns accounts,
//! contacts and meeting transcripts into prompts for a language model and
//! reduces the model's answers back into typed results.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities
//!   - `entities/`: Account, Contact, research, outreach, meeting and plan results
//!   - `value_objects/`: MessageType, ContactStage, Operation
//!   - `errors/`: Validation, gateway and enriched operation errors
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: The LLM gateway
//!
//! - **Application** (`application/`): Validators, prompt builders,
//!   response reducers and the [`IntelligenceService`] operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use prospector::{Account, IntelligenceService};
//!
//! let service = IntelligenceService::new(Arc::new(gateway));
//! let research = service.analyze_account(Some(&account), &contacts).await?;
//! ```

pub mod application;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use application::{IntelligenceService, Reduction, TokenBudgets};
pub use domain::{
    Account, AccountPlan, AccountResearchOutput, Contact, ContactStage, ErrorKind, GatewayError,
    MeetingInsight, MessageType, Operation, OperationError, OutreachMessage, ValidationError,
};
pub use ports::{
    ChatMessage, CompletionResponse, ContentBlock, LlmGateway, MessageRole, TokenUsage,
};
