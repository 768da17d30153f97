//! Account - A business account under research
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account - company level facts used as prompt subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub industry: String,
    /// Size class, e.g. "1000-5000"
    #[serde(default)]
    pub company_size: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_revenue: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_notes: Option<String>,
    /// Ordered contact ids of key personnel
    #[serde(default)]
    pub key_personnel: Vec<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with the given id and company name
    pub fn new(id: impl Into<String>, company_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            company_name: company_name.into(),
            industry: String::new(),
            company_size: String::new(),
            location: String::new(),
            website: None,
            linkedin_url: None,
            annual_revenue: None,
            description: String::new(),
            research_notes: None,
            key_personnel: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = industry.into();
        self
    }

    pub fn with_company_size(mut self, size: impl Into<String>) -> Self {
        self.company_size = size.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_research_notes(mut self, notes: impl Into<String>) -> Self {
        self.research_notes = Some(notes.into());
        self
    }

    /// Whether the account can be used as a prompt subject
    pub fn has_company_name(&self) -> bool {
        !self.company_name.trim().is_empty()
    }
}
