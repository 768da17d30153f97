//! Account Routes - CRM stand-ins until storage is wired

use axum::{extract::Path, routing::get, Json, Router};
use prospector::Account;
use uuid::Uuid;

use crate::models::{AccountDetailResponse, AccountDto, AccountListResponse, CreateAccountRequest};
use crate::AppState;

/// List accounts
#[utoipa::path(
    get,
    path = "/api/accounts",
    responses(
        (status = 200, description = "Accounts", body = AccountListResponse)
    ),
    tag = "Accounts"
)]
pub async fn list_accounts() -> Json<AccountListResponse> {
    Json(AccountListResponse {
        accounts: vec![],
        total: 0,
    })
}

/// Create an account (not persisted)
#[utoipa::path(
    post,
    path = "/api/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 200, description = "Account with generated id", body = AccountDto)
    ),
    tag = "Accounts"
)]
pub async fn create_account(Json(payload): Json<CreateAccountRequest>) -> Json<AccountDto> {
    let id = format!("acct_{}", Uuid::new_v4().simple());
    let mut account = Account::new(id, payload.company_name)
        .with_industry(payload.industry)
        .with_company_size(payload.company_size)
        .with_location(payload.location)
        .with_description(payload.description);
    account.website = payload.website;

    tracing::info!("Account drafted: {} ({})", account.id, account.company_name);
    Json(account.into())
}

/// Get account details
#[utoipa::path(
    get,
    path = "/api/accounts/{id}",
    params(
        ("id" = String, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account placeholder", body = AccountDetailResponse)
    ),
    tag = "Accounts"
)]
pub async fn get_account(Path(id): Path<String>) -> Json<AccountDetailResponse> {
    Json(AccountDetailResponse {
        id,
        message: "Account details".to_string(),
    })
}

/// Update an account (not persisted); the path id wins over any id in the body
#[utoipa::path(
    put,
    path = "/api/accounts/{id}",
    params(
        ("id" = String, Path, description = "Account ID")
    ),
    request_body = AccountDto,
    responses(
        (status = 200, description = "Updated account as received", body = AccountDto)
    ),
    tag = "Accounts"
)]
pub async fn update_account(
    Path(id): Path<String>,
    Json(mut payload): Json<AccountDto>,
) -> Json<AccountDto> {
    payload.id = id;
    tracing::info!("Account update drafted: {}", payload.id);
    Json(payload)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/accounts", get(list_accounts).post(create_account))
        .route("/api/accounts/:id", get(get_account).put(update_account))
}
