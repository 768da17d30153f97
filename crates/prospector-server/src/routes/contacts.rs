//! Contact Routes - CRM stand-ins until storage is wired

use axum::{routing::get, Json, Router};
use prospector::Contact;
use uuid::Uuid;

use crate::models::{ContactDto, ContactListResponse, CreateContactRequest};
use crate::AppState;

/// List contacts
#[utoipa::path(
    get,
    path = "/api/contacts",
    responses(
        (status = 200, description = "Contacts", body = ContactListResponse)
    ),
    tag = "Contacts"
)]
pub async fn list_contacts() -> Json<ContactListResponse> {
    Json(ContactListResponse { contacts: vec![] })
}

/// Create a contact (not persisted); new contacts start as prospects
#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = CreateContactRequest,
    responses(
        (status = 200, description = "Contact with generated id", body = ContactDto)
    ),
    tag = "Contacts"
)]
pub async fn create_contact(Json(payload): Json<CreateContactRequest>) -> Json<ContactDto> {
    let mut contact = Contact::new(
        format!("contact_{}", Uuid::new_v4().simple()),
        payload.first_name,
        payload.last_name,
        payload.title,
    )
    .with_account_id(payload.account_id);
    contact.email = payload.email;

    tracing::info!("Contact drafted: {} ({})", contact.id, contact.full_name());
    Json(contact.into())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/contacts", get(list_contacts).post(create_contact))
}
