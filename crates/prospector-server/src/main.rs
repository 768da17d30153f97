use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod config;
mod models;
mod routes;

use adapters::AnthropicGateway;
use config::AppConfig;
use prospector::{IntelligenceService, LlmGateway};

/// Intelligence service over whichever gateway the server was started with
pub type AppIntelligenceService = IntelligenceService<dyn LlmGateway>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub intelligence: Arc<AppIntelligenceService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Prospector API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Full application router with shared state
fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/api/health", get(health_check))
        .merge(routes::api_router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("Prospector API initializing...");

    let config = AppConfig::from_secrets(&secrets)?;

    let gateway = AnthropicGateway::new(config.anthropic)
        .map_err(|e| anyhow::anyhow!("Failed to build Anthropic client: {}", e))?;
    tracing::info!(
        "LLM gateway: {} ({})",
        gateway.provider_name(),
        gateway.model_id()
    );
    tracing::info!("Token budgets: {:?}", config.budgets);

    let gateway: Arc<dyn LlmGateway> = Arc::new(gateway);
    let intelligence = Arc::new(IntelligenceService::new(gateway).with_budgets(config.budgets));

    let router = app(AppState { intelligence });

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Prospector API ready");

    Ok(router.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use prospector::{ChatMessage, CompletionResponse, GatewayError};
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    struct ScriptedGateway {
        reply: Result<CompletionResponse, GatewayError>,
        calls: AtomicUsize,
    }

    impl ScriptedGateway {
        fn text(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(CompletionResponse::from_text(text)),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(error: GatewayError) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(error),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        async fn complete(
            &self,
            _messages: &[ChatMessage],
            _max_tokens: u32,
        ) -> Result<CompletionResponse, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }

        fn provider_name(&self) -> &str {
            "scripted"
        }

        fn model_id(&self) -> &str {
            "scripted-1"
        }
    }

    fn app_with(gateway: Arc<ScriptedGateway>) -> Router {
        let gateway: Arc<dyn LlmGateway> = gateway;
        app(AppState {
            intelligence: Arc::new(IntelligenceService::new(gateway)),
        })
    }

    async fn send(
        app: Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let request = match body {
            Some(body) => request.body(Body::from(body.to_string())).unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn account() -> Value {
        json!({
            "id": "acct_1",
            "companyName": "Acme Corp",
            "industry": "Manufacturing",
            "companySize": "500-1000",
            "location": "Ohio",
            "description": "Industrial widgets"
        })
    }

    fn contact() -> Value {
        json!({
            "id": "contact_1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "title": "CTO",
            "accountId": "acct_1"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let app = app_with(ScriptedGateway::text("unused"));
        let (status, body) = send(app, "GET", "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_analyze_degrades_plain_text() {
        let gateway = ScriptedGateway::text("Not JSON");
        let (status, body) = send(
            app_with(gateway.clone()),
            "POST",
            "/api/research/analyze",
            Some(json!({ "account": account(), "contacts": [contact()] })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["accountId"], "acct_1");
        assert_eq!(body["summary"], "Not JSON");
        assert_eq!(body["keyInsights"], json!([]));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_analyze_without_company_name_is_bad_request() {
        let gateway = ScriptedGateway::text("unused");
        let (status, body) = send(
            app_with(gateway.clone()),
            "POST",
            "/api/research/analyze",
            Some(json!({ "account": { "id": "acct_1" } })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
        assert_eq!(body["error"]["details"]["type"], "InvalidInput");
        assert_eq!(body["error"]["details"]["subject"], "acct_1");
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_generate_email_message() {
        let (status, body) = send(
            app_with(ScriptedGateway::text("Subject: Hi\nBody: Hello")),
            "POST",
            "/api/prospecting/generate-message",
            Some(json!({
                "contact": contact(),
                "account": account(),
                "context": "Met at trade show",
                "messageType": "email"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["content"], "Subject: Hi\nBody: Hello");
        assert_eq!(body["contactId"], "contact_1");
        assert_eq!(body["messageType"], "email");
        assert_eq!(body["sentiment"], "professional");
        assert_eq!(body["customized"], true);
        assert!(body["id"].as_str().unwrap().starts_with("msg_"));
    }

    #[tokio::test]
    async fn test_unsupported_message_type() {
        let gateway = ScriptedGateway::text("unused");
        let (status, body) = send(
            app_with(gateway.clone()),
            "POST",
            "/api/prospecting/generate-message",
            Some(json!({
                "contact": contact(),
                "account": account(),
                "messageType": "carrier-pigeon"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["details"]["message"]
            .as_str()
            .unwrap()
            .contains("carrier-pigeon"));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_meeting_uses_account_id_from_request() {
        let reply = json!({
            "summary": "Pilot agreed.",
            "actionItems": ["Send SOW"],
            "nextSteps": [],
            "sentiment": "positive"
        })
        .to_string();
        let (status, body) = send(
            app_with(ScriptedGateway::text(&reply)),
            "POST",
            "/api/meetings/process",
            Some(json!({ "transcript": "We agreed to a pilot.", "account": account() })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["accountId"], "acct_1");
        assert_eq!(body["summary"], "Pilot agreed.");
        assert_eq!(body["actionItems"], json!(["Send SOW"]));
        assert_eq!(body["sentiment"], "positive");
    }

    #[tokio::test]
    async fn test_empty_transcript_is_bad_request() {
        let (status, body) = send(
            app_with(ScriptedGateway::text("unused")),
            "POST",
            "/api/meetings/process",
            Some(json!({ "transcript": "   " })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_plan_empty_response_is_bad_gateway() {
        let (status, body) = send(
            app_with(ScriptedGateway::text("")),
            "POST",
            "/api/plans",
            Some(json!({ "account": account(), "contacts": [], "objectives": "Expand" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "EMPTY_RESPONSE");
        assert_eq!(body["error"]["details"]["type"], "EmptyResponse");
        assert_eq!(body["error"]["details"]["operation"], "create account plan");
    }

    #[tokio::test]
    async fn test_plan_returns_markdown() {
        let (status, body) = send(
            app_with(ScriptedGateway::text("# Plan\n\n1. Expand")),
            "POST",
            "/api/plans",
            Some(json!({ "account": account(), "objectives": "Expand" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["accountId"], "acct_1");
        assert_eq!(body["content"], "# Plan\n\n1. Expand");
    }

    #[tokio::test]
    async fn test_provider_error_is_bad_gateway() {
        let gateway =
            ScriptedGateway::failing(GatewayError::provider("rate_limit_error", "Slow down"));
        let (status, body) = send(
            app_with(gateway),
            "POST",
            "/api/research/analyze",
            Some(json!({ "account": account() })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "GATEWAY_ERROR");
        assert_eq!(body["error"]["details"]["type"], "rate_limit_error");
        assert_eq!(
            body["error"]["message"],
            "Failed to analyze account for acct_1: rate_limit_error - Slow down"
        );
    }

    #[tokio::test]
    async fn test_crm_stand_ins() {
        let app = app_with(ScriptedGateway::text("unused"));

        let (status, body) = send(app.clone(), "GET", "/api/accounts", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "accounts": [], "total": 0 }));

        let (_, body) = send(
            app.clone(),
            "POST",
            "/api/accounts",
            Some(json!({ "companyName": "Globex" })),
        )
        .await;
        assert!(body["id"].as_str().unwrap().starts_with("acct_"));
        assert_eq!(body["companyName"], "Globex");

        let (_, body) = send(
            app.clone(),
            "POST",
            "/api/contacts",
            Some(json!({ "firstName": "Grace", "lastName": "Hopper" })),
        )
        .await;
        assert!(body["id"].as_str().unwrap().starts_with("contact_"));
        assert_eq!(body["stage"], "prospect");

        let (_, body) = send(app, "GET", "/api/meetings/acct_7", None).await;
        assert_eq!(body, json!({ "accountId": "acct_7", "notes": [] }));
    }

    #[tokio::test]
    async fn test_account_lookup_and_update_echo_path_id() {
        let app = app_with(ScriptedGateway::text("unused"));

        let (status, body) = send(app.clone(), "GET", "/api/accounts/acct_9", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": "acct_9", "message": "Account details" }));

        let (status, body) = send(
            app,
            "PUT",
            "/api/accounts/acct_9",
            Some(json!({ "id": "other", "companyName": "Initech", "industry": "Software" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "acct_9");
        assert_eq!(body["companyName"], "Initech");
        assert_eq!(body["industry"], "Software");
    }

    #[tokio::test]
    async fn test_meeting_blank_account_id_falls_back_to_account() {
        let app = app_with(ScriptedGateway::text("The call went fine."));

        let (status, body) = send(
            app.clone(),
            "POST",
            "/api/meetings/process",
            Some(json!({ "transcript": "Hello", "accountId": "  ", "account": account() })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["accountId"], "acct_1");

        let (_, body) = send(
            app,
            "POST",
            "/api/meetings/process",
            Some(json!({ "transcript": "Hello", "accountId": "" })),
        )
        .await;
        assert!(body.get("accountId").is_none());
        assert_eq!(body["sentiment"], "neutral");
    }
}
