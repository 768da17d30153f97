//! Server configuration
//!
//! Read from the deployment secret store at startup. Parsing works over a
//! plain key lookup so it can be exercised without the store.

use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use prospector::TokenBudgets;

use crate::adapters::anthropic::{AnthropicConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub anthropic: AnthropicConfig,
    pub budgets: TokenBudgets,
}

impl AppConfig {
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Result<Self> {
        Self::from_lookup(|key| secrets.get(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = get("ANTHROPIC_API_KEY")
            .ok_or_else(|| anyhow!("ANTHROPIC_API_KEY is not set"))?;
        let timeout_secs = parse_or(&get, "LLM_REQUEST_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        let anthropic = AnthropicConfig::new(api_key)
            .with_model(get("ANTHROPIC_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()))
            .with_base_url(
                get("ANTHROPIC_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            )
            .with_request_timeout(Duration::from_secs(timeout_secs));

        let defaults = TokenBudgets::default();
        let budgets = TokenBudgets {
            analyze_account: parse_or(&get, "ANALYZE_MAX_TOKENS", defaults.analyze_account)?,
            outreach_message: parse_or(&get, "OUTREACH_MAX_TOKENS", defaults.outreach_message)?,
            meeting_transcript: parse_or(&get, "MEETING_MAX_TOKENS", defaults.meeting_transcript)?,
            account_plan: parse_or(&get, "PLAN_MAX_TOKENS", defaults.account_plan)?,
        };

        Ok(Self { anthropic, budgets })
    }
}

/// Unsigned integer setting; zero is rejected along with unparseable values
fn parse_or<T, F>(get: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr + Default + PartialEq,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = get(key) else {
        return Ok(default);
    };
    let value: T = raw
        .trim()
        .parse()
        .with_context(|| format!("{} must be a positive integer, got {:?}", key, raw))?;
    if value == T::default() {
        bail!("{} must be a positive integer, got {:?}", key, raw);
    }
    Ok(value)
}
