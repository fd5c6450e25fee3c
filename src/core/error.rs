use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::features::applications::models::ApplicationType;
use crate::shared::constants::UNEXPECTED_ERROR_MESSAGE;
use crate::shared::types::ErrorResponse;
use crate::shared::validation::ValidationIssues;

#[derive(Debug, Error)]
pub enum AppError {
    /// The submitted payload does not match the application schema
    #[error("Validation failed")]
    Validation(ValidationIssues),

    /// No webhook URL is configured for the submitted type
    #[error("Missing Zapier webhook for type \"{0}\". Check your .env.")]
    MissingWebhook(ApplicationType),

    /// The webhook answered with a non-success status
    #[error("Zapier request failed")]
    Upstream { details: String },

    #[error("{0}")]
    Internal(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let label = self.to_string();

        let (status, body) = match self {
            AppError::Validation(issues) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_issues(label, issues),
            ),
            AppError::MissingWebhook(kind) => {
                tracing::error!("No Zapier webhook configured for type {}", kind);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(label))
            }
            AppError::Upstream { details } => {
                tracing::error!("Zapier request failed: {}", details);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse::with_details(label, details),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                let message = if msg.trim().is_empty() {
                    UNEXPECTED_ERROR_MESSAGE.to_string()
                } else {
                    msg
                };
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(message))
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_webhook_names_the_type() {
        let response = AppError::MissingWebhook(ApplicationType::Sponsor).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Missing Zapier webhook for type \"sponsor\". Check your .env." })
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let response = AppError::Upstream {
            details: "Service Unavailable".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Zapier request failed", "details": "Service Unavailable" })
        );
    }

    #[tokio::test]
    async fn test_internal_without_message_falls_back() {
        let response = AppError::Internal(String::new()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": UNEXPECTED_ERROR_MESSAGE })
        );
    }
}
