//! Account Intelligence Service (Use Case)
//!
//! Composes validation, prompt building, one gateway call and response
//! reduction for each of the four operations. Any failure is enriched once,
//! here, into an [`OperationError`].

use std::sync::Arc;

use crate::application::budgets::TokenBudgets;
use crate::application::{prompts, reducer, validation};
use crate::domain::entities::{
    Account, AccountPlan, AccountResearchOutput, Contact, MeetingInsight, OutreachMessage,
};
use crate::domain::errors::{GatewayError, OperationError, ValidationError};
use crate::domain::value_objects::Operation;
use crate::ports::LlmGateway;

/// Failure raised inside an operation, before enrichment
enum Failure {
    Validation(ValidationError),
    Gateway(GatewayError),
}

impl From<ValidationError> for Failure {
    fn from(err: ValidationError) -> Self {
        Failure::Validation(err)
    }
}

impl From<GatewayError> for Failure {
    fn from(err: GatewayError) -> Self {
        Failure::Gateway(err)
    }
}

/// Application service for account intelligence operations.
///
/// Stateless apart from its injected gateway and budgets; calls are
/// independent and may run concurrently.
pub struct IntelligenceService<G: LlmGateway + ?Sized> {
    gateway: Arc<G>,
    budgets: TokenBudgets,
}

impl<G: LlmGateway + ?Sized> IntelligenceService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            budgets: TokenBudgets::default(),
        }
    }

    pub fn with_budgets(mut self, budgets: TokenBudgets) -> Self {
        self.budgets = budgets;
        self
    }

    /// Research an account and its key personnel
    pub async fn analyze_account(
        &self,
        account: Option<&Account>,
        contacts: &[Contact],
    ) -> Result<AccountResearchOutput, OperationError> {
        let operation = Operation::AnalyzeAccount;
        let subject = account_subject(account);

        let result = async {
            let account = validation::validate_account(account)?;
            let prompt = prompts::account_research(account, contacts);
            let text = self.call(operation, &prompt).await?;
            let reduction = reducer::research_output(&account.id, &text);
            self.note_reduction(operation, &subject, reduction.is_degraded());
            Ok::<_, Failure>(reduction.into_inner())
        }
        .await;

        result.map_err(|failure| enrich(operation, &subject, failure))
    }

    /// Draft outreach copy for a contact on the given channel.
    ///
    /// `message_type` is the raw channel name as received; anything other
    /// than email, phone or linkedin is rejected before the gateway call.
    pub async fn generate_outreach_message(
        &self,
        contact: Option<&Contact>,
        account: Option<&Account>,
        context: Option<&str>,
        message_type: Option<&str>,
    ) -> Result<OutreachMessage, OperationError> {
        let operation = Operation::GenerateOutreachMessage;
        let subject = contact_subject(contact);

        let result = async {
            let contact = validation::validate_contact(contact)?;
            let account = validation::validate_account(account)?;
            let message_type = validation::validate_message_type(message_type)?;

            let prompt = prompts::outreach(message_type, contact, account, context);
            let content = self.call(operation, &prompt).await?;
            tracing::info!(
                "Drafted {} message for {} ({} chars)",
                message_type,
                subject,
                content.len()
            );
            Ok::<_, Failure>(OutreachMessage::new(contact.id.clone(), message_type, content))
        }
        .await;

        result.map_err(|failure| enrich(operation, &subject, failure))
    }

    /// Summarize a meeting transcript against its account context
    pub async fn process_meeting_transcript(
        &self,
        transcript: Option<&str>,
        account_id: Option<&str>,
        account_context: Option<&str>,
    ) -> Result<MeetingInsight, OperationError> {
        let operation = Operation::ProcessMeetingTranscript;
        let subject = match account_id.filter(|id| !id.trim().is_empty()) {
            Some(id) => id.to_string(),
            None => format!(
                "meeting transcript ({} chars)",
                transcript.map(str::len).unwrap_or(0)
            ),
        };

        let result = async {
            let transcript = validation::validate_transcript(transcript)?;
            let prompt = prompts::meeting_analysis(transcript, account_context);
            let text = self.call(operation, &prompt).await?;
            let reduction = reducer::meeting_insight(account_id, &text);
            self.note_reduction(operation, &subject, reduction.is_degraded());
            Ok::<_, Failure>(reduction.into_inner())
        }
        .await;

        result.map_err(|failure| enrich(operation, &subject, failure))
    }

    /// Write a markdown strategy plan for an account
    pub async fn create_account_plan(
        &self,
        account: Option<&Account>,
        contacts: &[Contact],
        objectives: Option<&str>,
    ) -> Result<AccountPlan, OperationError> {
        let operation = Operation::CreateAccountPlan;
        let subject = account_subject(account);

        let result = async {
            let account = validation::validate_account(account)?;
            let objectives = validation::validate_objectives(objectives)?;
            let prompt = prompts::account_plan(account, contacts, objectives);
            let content = self.call(operation, &prompt).await?;
            tracing::info!("Created account plan for {} ({} chars)", subject, content.len());
            Ok::<_, Failure>(AccountPlan::new(content))
        }
        .await;

        result.map_err(|failure| enrich(operation, &subject, failure))
    }

    /// The single suspension point of every operation
    async fn call(&self, operation: Operation, prompt: &str) -> Result<String, GatewayError> {
        let max_tokens = self.budgets.for_operation(operation);
        tracing::debug!(
            "{} via {} ({}), max_tokens={}",
            operation,
            self.gateway.provider_name(),
            self.gateway.model_id(),
            max_tokens
        );
        self.gateway.complete_text(prompt, max_tokens).await
    }

    fn note_reduction(&self, operation: Operation, subject: &str, degraded: bool) {
        if degraded {
            tracing::warn!(
                degraded = true,
                "{} for {}: response was not structured JSON, using raw text",
                operation,
                subject
            );
        } else {
            tracing::info!("{} for {}: structured response parsed", operation, subject);
        }
    }
}

fn enrich(operation: Operation, subject: &str, failure: Failure) -> OperationError {
    let error = match failure {
        Failure::Validation(err) => OperationError::invalid_input(operation, subject, &err),
        Failure::Gateway(err) => OperationError::gateway(operation, subject, &err),
    };
    tracing::error!(
        kind = ?error.kind,
        error_type = %error.error_type,
        "{}",
        error
    );
    error
}

fn account_subject(account: Option<&Account>) -> String {
    match account {
        Some(account) if !account.id.trim().is_empty() => account.id.clone(),
        Some(account) if account.has_company_name() => format!("\"{}\"", account.company_name),
        _ => "unknown account".to_string(),
    }
}

fn contact_subject(contact: Option<&Contact>) -> String {
    match contact {
        Some(contact) if !contact.id.trim().is_empty() => contact.id.clone(),
        Some(contact) if contact.is_addressable() => contact.full_name(),
        _ => "unknown contact".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_subject_prefers_id() {
        let account = Account::new("acct_1", "Acme");
        assert_eq!(account_subject(Some(&account)), "acct_1");

        let unsaved = Account::new("", "Acme");
        assert_eq!(account_subject(Some(&unsaved)), "\"Acme\"");

        assert_eq!(account_subject(None), "unknown account");
    }

    #[test]
    fn test_contact_subject() {
        let unsaved = Contact::new("", "Ada", "Lovelace", "CTO");
        assert_eq!(contact_subject(Some(&unsaved)), "Ada Lovelace");
        assert_eq!(contact_subject(None), "unknown contact");
    }
}
