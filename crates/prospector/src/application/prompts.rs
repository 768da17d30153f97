//! Prompt builders
//!
//! Pure functions from domain input to the instruction sent to the gateway.
//! Context is rendered as labeled lines rather than a machine format, and each
//! prompt names the exact output keys the reducer looks for.

use crate::domain::entities::{Account, Contact};
use crate::domain::value_objects::MessageType;

const NO_CONTEXT: &str = "No additional context provided.";

/// Labeled account facts, also used as meeting context
pub fn account_facts(account: &Account) -> String {
    let mut facts = format!(
        "Account Information:\n- Company: {}\n- Industry: {}\n- Size: {}\n- Location: {}\n- Website: {}\n",
        account.company_name,
        account.industry,
        account.company_size,
        account.location,
        account.website.as_deref().unwrap_or("N/A"),
    );
    if let Some(revenue) = account.annual_revenue.as_deref() {
        facts.push_str(&format!("- Annual Revenue: {}\n", revenue));
    }
    facts.push_str(&format!("- Description: {}", account.description));
    facts
}

/// One line per contact: `- First Last (Title)`
pub fn contact_roster(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "- No key contacts on file".to_string();
    }
    contacts
        .iter()
        .map(|c| format!("- {} {} ({})", c.first_name, c.last_name, c.title))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Research prompt for `analyze_account`
pub fn account_research(account: &Account, contacts: &[Contact]) -> String {
    let notes = account
        .research_notes
        .as_deref()
        .filter(|notes| !notes.trim().is_empty())
        .unwrap_or("No previous notes");

    format!(
        r#"You are an expert B2B sales analyst. Analyze this enterprise account and provide:
1. Executive Summary (2-3 sentences)
2. Key Insights (3-5 bullet points about the company's business, market position, tech stack)
3. Potential Pain Points (3-5 areas where they might need solutions)
4. Buying Indicators (signs they are actively looking for solutions)
5. Recommended Sales Approach (personalized strategy for this specific account)
6. Next Steps (3-4 concrete actions to take)

{facts}

Key Personnel:
{roster}

Previous Notes:
{notes}

Format your response as structured JSON with keys: summary, keyInsights, painPoints, buyingIndicators, recommendedApproach, nextSteps
Use strings for summary and recommendedApproach, and arrays of strings for the other keys. Respond with the JSON object only."#,
        facts = account_facts(account),
        roster = contact_roster(contacts),
        notes = notes,
    )
}

/// Outreach prompt for the given channel
pub fn outreach(
    message_type: MessageType,
    contact: &Contact,
    account: &Account,
    context: Option<&str>,
) -> String {
    let context = context
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(NO_CONTEXT);

    match message_type {
        MessageType::Email => email(contact, account, context),
        MessageType::Phone => phone(contact, account, context),
        MessageType::Linkedin => linkedin(contact, account, context),
    }
}

fn recipient(contact: &Contact, account: &Account) -> String {
    format!(
        "{} {}, {} at {}",
        contact.first_name, contact.last_name, contact.title, account.company_name
    )
}

fn email(contact: &Contact, account: &Account, context: &str) -> String {
    format!(
        r#"You are an expert B2B sales copywriter. Draft a personalized, professional email to {recipient}.

Context about the account and previous interactions:
{context}

Requirements:
- Subject line that stands out
- Personalized opening that references something specific about them/their company
- Clear value proposition
- Single, specific call-to-action
- Professional but conversational tone
- 150-200 words for body

Format as:
Subject: [subject]
Body: [email body]"#,
        recipient = recipient(contact, account),
        context = context,
    )
}

fn phone(contact: &Contact, account: &Account, context: &str) -> String {
    format!(
        r#"You are an expert B2B sales copywriter. Draft a concise phone script (60-90 seconds) to call {recipient}.

Context:
{context}

Include:
- Opening hook (who you are, why you're calling)
- 1-2 sentence value proposition
- Questions to understand their situation
- Soft close asking for a brief meeting
- Handle potential objections

Format as a conversational script with stage directions."#,
        recipient = recipient(contact, account),
        context = context,
    )
}

fn linkedin(contact: &Contact, account: &Account, context: &str) -> String {
    format!(
        r#"You are an expert B2B sales copywriter. Draft a LinkedIn connection request message and follow-up to {recipient}.

Context:
{context}

Requirements:
- Connection request note (150 characters max)
- First message after connection (150-200 words)
- References to shared connections or mutual interests
- Value-first approach
- Call-to-action for brief conversation"#,
        recipient = recipient(contact, account),
        context = context,
    )
}

/// Meeting analysis prompt for `process_meeting_transcript`
pub fn meeting_analysis(transcript: &str, account_context: Option<&str>) -> String {
    let account_context = account_context
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(NO_CONTEXT);

    format!(
        r#"You are an expert B2B sales analyst. Analyze this meeting transcript and provide:
1. A brief summary (2-3 sentences) of what was discussed
2. Key action items (what needs to be done and by whom)
3. Next steps in the sales process
4. Overall sentiment/tone of the meeting

Account Context:
{account_context}

Transcript:
{transcript}

Format as JSON with keys: summary, actionItems, nextSteps, sentiment
Use strings for summary and sentiment, and arrays of strings for actionItems and nextSteps. Respond with the JSON object only."#,
        account_context = account_context,
        transcript = transcript,
    )
}

/// Strategy plan prompt for `create_account_plan`
pub fn account_plan(account: &Account, contacts: &[Contact], objectives: &str) -> String {
    format!(
        r#"You are an expert B2B sales strategist. Create a comprehensive enterprise account plan for {company}.

Account Details:
- Industry: {industry}
- Size: {size}
- Location: {location}

Key Contacts:
{roster}

Business Objectives:
{objectives}

Please provide:
1. Executive Summary
2. Account Overview & Opportunity Assessment
3. Stakeholder Analysis (decision makers, influencers, users)
4. Value Proposition & Differentiation
5. Sales Strategy (phases, tactics, timeline)
6. Key Messages for Different Personas
7. Risk Mitigation
8. Success Metrics & KPIs
9. 90-Day Action Plan

Format as a detailed markdown document suitable for a sales team."#,
        company = account.company_name,
        industry = account.industry,
        size = account.company_size,
        location = account.location,
        roster = contact_roster(contacts),
        objectives = objectives.trim(),
    )
}
