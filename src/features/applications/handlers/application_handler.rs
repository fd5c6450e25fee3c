use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};
use serde_json::Value;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::applications::dtos::ApplyResponseDto;
use crate::features::applications::models::Application;
use crate::features::applications::services::ApplicationService;
use crate::shared::request_meta::RequestMeta;
use crate::shared::types::ErrorResponse;

/// Submit a sponsor, vendor or press application
///
/// The payload is validated, stamped with `submittedAt`, `userAgent` and
/// `ip`, then forwarded to the Zapier webhook configured for its `type`.
#[utoipa::path(
    post,
    path = "/api/apply",
    request_body = Application,
    responses(
        (status = 200, description = "Application forwarded", body = ApplyResponseDto),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Missing webhook configuration or unexpected error", body = ErrorResponse),
        (status = 502, description = "Webhook rejected the submission", body = ErrorResponse)
    ),
    tag = "applications"
)]
pub async fn submit_application(
    State(service): State<Arc<ApplicationService>>,
    headers: HeaderMap,
    AppJson(payload): AppJson<Value>,
) -> Result<Json<ApplyResponseDto>> {
    service
        .submit(&payload, RequestMeta::from_headers(&headers))
        .await?;

    Ok(Json(ApplyResponseDto::accepted()))
}
