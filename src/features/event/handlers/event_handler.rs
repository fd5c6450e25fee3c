use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;

use crate::features::event::dtos::{CountdownResponseDto, FaqItemDto};
use crate::features::event::services::EventService;

/// List frequently asked questions
#[utoipa::path(
    get,
    path = "/api/faq",
    responses(
        (status = 200, description = "FAQ in display order", body = Vec<FaqItemDto>)
    ),
    tag = "event"
)]
pub async fn list_faq(State(service): State<Arc<EventService>>) -> Json<Vec<FaqItemDto>> {
    Json(service.faq())
}

/// Time remaining until the event opens
#[utoipa::path(
    get,
    path = "/api/event/countdown",
    responses(
        (status = 200, description = "Countdown to the event start", body = CountdownResponseDto)
    ),
    tag = "event"
)]
pub async fn get_countdown(
    State(service): State<Arc<EventService>>,
) -> Json<CountdownResponseDto> {
    Json(service.countdown(Utc::now()))
}

#[cfg(test)]
mod tests {
    use crate::core::config::WebhookConfig;
    use crate::shared::test_helpers::test_server;
    use axum::http::StatusCode;
    use serde_json::Value;

    #[tokio::test]
    async fn test_faq_route() {
        let server = test_server(WebhookConfig::default());

        let response = server.get("/api/faq").await;

        response.assert_status(StatusCode::OK);
        let body = response.json::<Value>();
        assert!(body.as_array().is_some_and(|items| !items.is_empty()));
        assert!(body[0]["q"].is_string());
        assert!(body[0]["a"].is_string());
    }

    #[tokio::test]
    async fn test_countdown_route_shape() {
        let server = test_server(WebhookConfig::default());

        let response = server.get("/api/event/countdown").await;

        response.assert_status(StatusCode::OK);
        let body = response.json::<Value>();
        assert_eq!(body["startAt"], "2026-01-31T09:00:00-06:00");
        for key in ["days", "hours", "minutes", "seconds"] {
            assert!(body[key].as_i64().is_some_and(|v| v >= 0));
        }
        assert!(body["isOver"].is_boolean());
    }
}
