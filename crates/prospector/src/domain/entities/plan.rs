//! AccountPlan - Markdown strategy document

use serde::{Deserialize, Serialize};

/// A single markdown document; no structure is parsed out of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountPlan(String);

impl AccountPlan {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self(markdown.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for AccountPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
