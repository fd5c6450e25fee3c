use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use axum_test::TestServer;
use chrono::DateTime;
use serde_json::Value;

use crate::core::app::build_router;
use crate::core::config::{AppConfig, Config, EventConfig, SwaggerConfig, WebhookConfig};
use crate::shared::constants::DEFAULT_EVENT_START_AT;

/// One request received by a [`FakeWebhook`]
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub body: Value,
    pub accept: Option<String>,
}

/// Local stand-in for a Zapier catch hook, answering with a fixed response
pub struct FakeWebhook {
    pub url: String,
    received: Arc<Mutex<Vec<RecordedCall>>>,
}

impl FakeWebhook {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.received.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct HookState {
    received: Arc<Mutex<Vec<RecordedCall>>>,
    status: StatusCode,
    body: &'static str,
}

async fn record_call(
    State(state): State<HookState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, &'static str) {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state
        .received
        .lock()
        .unwrap()
        .push(RecordedCall { body, accept });
    (state.status, state.body)
}

pub async fn spawn_webhook(status: StatusCode, body: &'static str) -> FakeWebhook {
    let received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/hooks/catch", post(record_call))
        .with_state(HookState {
            received: Arc::clone(&received),
            status,
            body,
        });

    let url = serve(app).await;
    FakeWebhook {
        url: format!("{}/hooks/catch", url),
        received,
    }
}

pub fn test_config(webhooks: WebhookConfig) -> Config {
    Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_allowed_origins: vec!["*".to_string()],
            max_request_body_size: 64 * 1024,
        },
        swagger: SwaggerConfig {
            username: None,
            password: None,
            title: "TCGFest API".to_string(),
            version: "0.1.0".to_string(),
            description: "test".to_string(),
        },
        webhooks,
        event: EventConfig {
            start_at: DateTime::parse_from_rfc3339(DEFAULT_EVENT_START_AT).unwrap(),
        },
    }
}

/// In-process server over the full application router
pub fn test_server(webhooks: WebhookConfig) -> TestServer {
    TestServer::new(build_router(&test_config(webhooks))).unwrap()
}

/// Serve the full application on an ephemeral port; returns its base URL
pub async fn spawn_app(config: Config) -> String {
    serve(build_router(&config)).await
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{}", addr)
}
