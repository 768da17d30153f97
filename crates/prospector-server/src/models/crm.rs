//! Account and contact payloads

use chrono::{DateTime, Utc};
use prospector::{Account, Contact, ContactStage};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account as exchanged with clients
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub industry: String,
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
    #[serde(default)]
    pub key_personnel: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<AccountDto> for Account {
    fn from(dto: AccountDto) -> Self {
        let now = Utc::now();
        Account {
            id: dto.id,
            company_name: dto.company_name,
            industry: dto.industry,
            company_size: dto.company_size,
            location: dto.location,
            website: dto.website,
            linkedin_url: dto.linkedin_url,
            annual_revenue: dto.annual_revenue,
            description: dto.description,
            research_notes: dto.research_notes,
            key_personnel: dto.key_personnel,
            created_at: dto.created_at.unwrap_or(now),
            updated_at: dto.updated_at.unwrap_or(now),
        }
    }
}

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        AccountDto {
            id: account.id,
            company_name: account.company_name,
            industry: account.industry,
            company_size: account.company_size,
            location: account.location,
            website: account.website,
            linkedin_url: account.linkedin_url,
            annual_revenue: account.annual_revenue,
            description: account.description,
            research_notes: account.research_notes,
            key_personnel: account.key_personnel,
            created_at: Some(account.created_at),
            updated_at: Some(account.updated_at),
        }
    }
}

/// Contact as exchanged with clients
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub account_id: String,
    /// prospect | engaged | qualified | opportunity
    #[serde(default)]
    #[schema(value_type = String, example = "prospect")]
    pub stage: ContactStage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_interaction: Option<DateTime<Utc>>,
}

impl From<ContactDto> for Contact {
    fn from(dto: ContactDto) -> Self {
        Contact {
            id: dto.id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            title: dto.title,
            email: dto.email,
            phone: dto.phone,
            linkedin_url: dto.linkedin_url,
            account_id: dto.account_id,
            stage: dto.stage,
            last_interaction: dto.last_interaction,
        }
    }
}

impl From<Contact> for ContactDto {
    fn from(contact: Contact) -> Self {
        ContactDto {
            id: contact.id,
            first_name: contact.first_name,
            last_name: contact.last_name,
            title: contact.title,
            email: contact.email,
            phone: contact.phone,
            linkedin_url: contact.linkedin_url,
            account_id: contact.account_id,
            stage: contact.stage,
            last_interaction: contact.last_interaction,
        }
    }
}

/// Convert an optional list of contact DTOs
pub fn contacts_from(dtos: Option<Vec<ContactDto>>) -> Vec<Contact> {
    dtos.unwrap_or_default()
        .into_iter()
        .map(Contact::from)
        .collect()
}

// ============================================
// Request/Response DTOs
// ============================================

/// Create account request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub company_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub company_size: String,
    #[serde(default)]
    pub location: String,
    pub website: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Account list
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountListResponse {
    pub accounts: Vec<AccountDto>,
    pub total: usize,
}

/// Account lookup (storage is not wired yet)
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDetailResponse {
    pub id: String,
    pub message: String,
}

/// Create contact request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub title: String,
    pub email: Option<String>,
    #[serde(default)]
    pub account_id: String,
}

/// Contact list
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactListResponse {
    pub contacts: Vec<ContactDto>,
}
