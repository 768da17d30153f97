//! Response reduction
//!
//! Turns raw gateway text into typed results. Every reducer goes through
//! [`parse_or_fallback`]: try to read the text as the expected JSON shape,
//! otherwise build a minimal result from the raw text. Neither path fails.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::entities::{AccountResearchOutput, MeetingInsight, DEFAULT_MEETING_SENTIMENT};

/// Outcome of a reduction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduction<T> {
    /// Structured output was parsed
    Parsed(T),
    /// Raw text was wrapped into a minimal result
    Degraded(T),
}

impl<T> Reduction<T> {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Reduction::Degraded(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Reduction::Parsed(value) | Reduction::Degraded(value) => value,
        }
    }
}

/// Parse `text` as `P` and map it, or build the fallback from the raw text
pub fn parse_or_fallback<P, T>(
    text: &str,
    from_parsed: impl FnOnce(P) -> T,
    fallback: impl FnOnce(&str) -> T,
) -> Reduction<T>
where
    P: DeserializeOwned,
{
    match parse_structured::<P>(text) {
        Some(payload) => Reduction::Parsed(from_parsed(payload)),
        None => Reduction::Degraded(fallback(text)),
    }
}

/// Whole text first, then the first JSON block found inside it
/// (models like to wrap JSON in prose or code fences). Only objects count:
/// derived struct deserializers would otherwise accept arrays positionally.
fn parse_structured<P: DeserializeOwned>(text: &str) -> Option<P> {
    let object = json_object(text.trim()).or_else(|| {
        llm_toolkit::extract_json(text)
            .ok()
            .and_then(|json| json_object(&json))
    })?;
    serde_json::from_value(object).ok()
}

fn json_object(text: &str) -> Option<Value> {
    serde_json::from_str::<Value>(text)
        .ok()
        .filter(Value::is_object)
}

// ============================================
// Expected payload shapes
// ============================================

/// `summary` is required; an object without it is not research output.
/// Identity keys such as `accountId` are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResearchPayload {
    #[serde(deserialize_with = "lenient_text")]
    summary: String,
    #[serde(default, deserialize_with = "lenient_list")]
    key_insights: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pain_points: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    buying_indicators: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    recommended_approach: String,
    #[serde(default, deserialize_with = "lenient_list")]
    next_steps: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MeetingPayload {
    #[serde(deserialize_with = "lenient_text")]
    summary: String,
    #[serde(default, deserialize_with = "lenient_list")]
    action_items: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    next_steps: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    sentiment: String,
}

/// Reduce analysis text; `account_id` always comes from the caller
pub fn research_output(account_id: &str, text: &str) -> Reduction<AccountResearchOutput> {
    parse_or_fallback(
        text,
        |payload: ResearchPayload| AccountResearchOutput {
            account_id: account_id.to_string(),
            summary: payload.summary,
            key_insights: payload.key_insights,
            pain_points: payload.pain_points,
            buying_indicators: payload.buying_indicators,
            recommended_approach: payload.recommended_approach,
            next_steps: payload.next_steps,
        },
        |raw| AccountResearchOutput::from_raw_text(account_id, raw),
    )
}

/// Reduce meeting analysis text; `account_id` always comes from the caller
pub fn meeting_insight(account_id: Option<&str>, text: &str) -> Reduction<MeetingInsight> {
    let account_id = account_id.map(str::to_string);
    parse_or_fallback(
        text,
        |payload: MeetingPayload| MeetingInsight {
            account_id: account_id.clone(),
            summary: payload.summary,
            action_items: payload.action_items,
            next_steps: payload.next_steps,
            sentiment: if payload.sentiment.trim().is_empty() {
                DEFAULT_MEETING_SENTIMENT.to_string()
            } else {
                payload.sentiment
            },
        },
        |raw| MeetingInsight::from_raw_text(account_id.clone(), raw),
    )
}

// ============================================
// Lenient field readers
// ============================================

/// Accepts a string, or renders any other JSON value as text
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::Array(items) => items
            .iter()
            .map(render_item)
            .collect::<Vec<_>>()
            .join("\n"),
        other => render_item(&other),
    })
}

/// Accepts an array (items rendered as text), a single string, or null.
/// Strings are kept as given; only a lone blank string reads as no items.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .iter()
            .map(render_item)
            .collect(),
        Value::String(item) if item.trim().is_empty() => Vec::new(),
        other => vec![render_item(&other)],
    })
}

/// `{"task": "Send deck", "owner": "Ada"}` becomes `task: Send deck; owner: Ada`
fn render_item(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        Value::Object(fields) => fields
            .iter()
            .map(|(key, field)| format!("{}: {}", key, render_item(field)))
            .collect::<Vec<_>>()
            .join("; "),
        Value::Array(items) => items
            .iter()
            .map(render_item)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESEARCH_JSON: &str = r#"{
        "accountId": "hallucinated",
        "summary": "Acme is scaling.",
        "keyInsights": ["Series C", "Hiring SREs"],
        "painPoints": ["Manual deploys"],
        "buyingIndicators": ["RFP published"],
        "recommendedApproach": "Lead with reliability.",
        "nextSteps": ["Book discovery call"]
    }"#;

    #[test]
    fn test_research_parsed_and_identity_forced() {
        let reduction = research_output("acct_1", RESEARCH_JSON);
        assert!(!reduction.is_degraded());

        let output = reduction.into_inner();
        assert_eq!(output.account_id, "acct_1");
        assert_eq!(output.summary, "Acme is scaling.");
        assert_eq!(output.key_insights, vec!["Series C", "Hiring SREs"]);
        assert_eq!(output.pain_points, vec!["Manual deploys"]);
        assert_eq!(output.buying_indicators, vec!["RFP published"]);
        assert_eq!(output.recommended_approach, "Lead with reliability.");
        assert_eq!(output.next_steps, vec!["Book discovery call"]);
    }

    #[test]
    fn test_research_keeps_values_verbatim() {
        let text = r#"{
            "summary": "  Acme is scaling.\n",
            "keyInsights": ["", "  Series C  "],
            "painPoints": "   ",
            "recommendedApproach": "x"
        }"#;
        let output = research_output("acct_1", text).into_inner();

        assert_eq!(output.summary, "  Acme is scaling.\n");
        assert_eq!(output.key_insights, vec!["", "  Series C  "]);
        assert!(output.pain_points.is_empty());
        assert_eq!(output.recommended_approach, "x");
    }

    #[test]
    fn test_research_in_code_fence() {
        let text = format!("Here is the analysis:\n```json\n{}\n```", RESEARCH_JSON);
        let reduction = research_output("acct_1", &text);
        assert!(!reduction.is_degraded());
        assert_eq!(reduction.into_inner().summary, "Acme is scaling.");
    }

    #[test]
    fn test_research_fallback_on_plain_text() {
        let reduction = research_output("acct_1", "Not JSON");
        assert!(reduction.is_degraded());
        assert_eq!(
            reduction.into_inner(),
            AccountResearchOutput {
                account_id: "acct_1".to_string(),
                summary: "Not JSON".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_research_fallback_without_summary_key() {
        let reduction = research_output("acct_1", r#"{"insights": []}"#);
        assert!(reduction.is_degraded());
        assert_eq!(reduction.into_inner().summary, r#"{"insights": []}"#);
    }

    #[test]
    fn test_research_fallback_on_json_array() {
        let reduction = research_output("acct_1", r#"["a", "b"]"#);
        assert!(reduction.is_degraded());
    }

    #[test]
    fn test_meeting_parsed_with_object_items() {
        let text = r#"{
            "accountId": "other",
            "summary": "Pilot agreed.",
            "actionItems": [{"task": "Send SOW"}, "Schedule demo"],
            "nextSteps": "Legal review",
            "sentiment": "positive"
        }"#;
        let insight = meeting_insight(Some("acct_9"), text).into_inner();

        assert_eq!(insight.account_id.as_deref(), Some("acct_9"));
        assert_eq!(insight.summary, "Pilot agreed.");
        assert_eq!(
            insight.action_items,
            vec!["task: Send SOW", "Schedule demo"]
        );
        assert_eq!(insight.next_steps, vec!["Legal review"]);
        assert_eq!(insight.sentiment, "positive");
    }

    #[test]
    fn test_meeting_missing_sentiment_defaults_neutral() {
        let insight = meeting_insight(None, r#"{"summary": "Short call."}"#).into_inner();
        assert_eq!(insight.sentiment, DEFAULT_MEETING_SENTIMENT);
        assert!(insight.action_items.is_empty());
        assert!(insight.account_id.is_none());
    }

    #[test]
    fn test_meeting_fallback() {
        let reduction = meeting_insight(Some("acct_9"), "The call went fine.");
        assert!(reduction.is_degraded());

        let insight = reduction.into_inner();
        assert_eq!(insight.summary, "The call went fine.");
        assert!(insight.action_items.is_empty());
        assert!(insight.next_steps.is_empty());
        assert_eq!(insight.sentiment, "neutral");
        assert_eq!(insight.account_id.as_deref(), Some("acct_9"));
    }
}
