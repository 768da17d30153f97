//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    // CRM models
    AccountDetailResponse,
    AccountDto,
    AccountListResponse,
    // Plan models
    AccountPlanResponse,
    // Research models
    AnalyzeAccountRequest,
    ContactDto,
    ContactListResponse,
    CreateAccountRequest,
    CreateContactRequest,
    CreatePlanRequest,
    ErrorBody,
    ErrorDetails,
    // Error models
    ErrorResponse,
    // Outreach models
    GenerateMessageRequest,
    // Meeting models
    MeetingInsightResponse,
    MeetingNotesResponse,
    OutreachMessageResponse,
    ProcessMeetingRequest,
    ResearchResponse,
    StoredResearchResponse,
    TemplateDto,
    TemplatesRequest,
    TemplatesResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Research endpoints
        super::research::analyze_account,
        super::research::get_research,
        // Prospecting endpoints
        super::prospecting::generate_message,
        super::prospecting::list_templates,
        // Meeting endpoints
        super::meetings::process_transcript,
        super::meetings::list_notes,
        // Plan endpoints
        super::plans::create_plan,
        // CRM endpoints
        super::accounts::list_accounts,
        super::accounts::create_account,
        super::accounts::get_account,
        super::accounts::update_account,
        super::contacts::list_contacts,
        super::contacts::create_contact,
    ),
    info(
        title = "Prospector API",
        version = "0.1.0",
        description = "Account intelligence for sales teams\n\nResearch accounts, draft outreach, digest meetings and plan strategy with a language model.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Research", description = "Research - Account analysis"),
        (name = "Prospecting", description = "Prospecting - Outreach message drafting"),
        (name = "Meetings", description = "Meetings - Transcript insights"),
        (name = "Plans", description = "Plans - Account strategy documents"),
        (name = "Accounts", description = "Accounts - CRM stand-in"),
        (name = "Contacts", description = "Contacts - CRM stand-in"),
    ),
    components(
        schemas(
            // CRM
            AccountDto,
            ContactDto,
            CreateAccountRequest,
            AccountListResponse,
            AccountDetailResponse,
            CreateContactRequest,
            ContactListResponse,
            // Research
            AnalyzeAccountRequest,
            ResearchResponse,
            StoredResearchResponse,
            // Outreach
            GenerateMessageRequest,
            OutreachMessageResponse,
            TemplatesRequest,
            TemplateDto,
            TemplatesResponse,
            // Meeting
            ProcessMeetingRequest,
            MeetingInsightResponse,
            MeetingNotesResponse,
            // Plan
            CreatePlanRequest,
            AccountPlanResponse,
            // Error
            ErrorResponse,
            ErrorBody,
            ErrorDetails,
        )
    ),
)]
pub struct ApiDoc;
