//! Input validation
//!
//! Guard clauses run before any gateway call. They are synchronous and free
//! of side effects; a failure here never spends tokens.

use crate::domain::entities::{Account, Contact};
use crate::domain::errors::ValidationError;
use crate::domain::value_objects::MessageType;

/// Account must be present with a non-empty company name
pub fn validate_account(account: Option<&Account>) -> Result<&Account, ValidationError> {
    let account = account.ok_or(ValidationError::MissingAccount)?;
    if !account.has_company_name() {
        return Err(ValidationError::MissingCompanyName);
    }
    Ok(account)
}

/// Contact must be present with both first and last name
pub fn validate_contact(contact: Option<&Contact>) -> Result<&Contact, ValidationError> {
    let contact = contact.ok_or(ValidationError::MissingContact)?;
    if !contact.is_addressable() {
        return Err(ValidationError::MissingContactName);
    }
    Ok(contact)
}

pub fn validate_message_type(raw: Option<&str>) -> Result<MessageType, ValidationError> {
    let raw = raw
        .filter(|value| !value.trim().is_empty())
        .ok_or(ValidationError::MissingMessageType)?;
    raw.parse()
        .map_err(|_| ValidationError::UnsupportedMessageType(raw.to_string()))
}

pub fn validate_transcript(transcript: Option<&str>) -> Result<&str, ValidationError> {
    transcript
        .filter(|text| !text.trim().is_empty())
        .ok_or(ValidationError::EmptyTranscript)
}

pub fn validate_objectives(objectives: Option<&str>) -> Result<&str, ValidationError> {
    objectives
        .filter(|text| !text.trim().is_empty())
        .ok_or(ValidationError::MissingObjectives)
}
