use axum::{
    body::{Body, Bytes},
    extract::{rejection::BytesRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;
use crate::shared::types::ErrorResponse;

/// JSON body extractor that does not insist on a JSON content type.
///
/// Browser form code posts JSON with whatever headers it has at hand, so the
/// body is parsed as-is. Malformed JSON is an unexpected error (500), not a
/// validation failure.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(AppJsonRejection::Body)?;

        serde_json::from_slice(&bytes)
            .map(AppJson)
            .map_err(AppJsonRejection::Syntax)
    }
}

pub enum AppJsonRejection {
    Body(BytesRejection),
    Syntax(serde_json::Error),
}

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        match self {
            // Keeps the status axum picked (e.g. 413 for oversized bodies)
            AppJsonRejection::Body(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                (
                    rejection.status(),
                    Json(ErrorResponse::new(rejection.body_text())),
                )
                    .into_response()
            }
            AppJsonRejection::Syntax(err) => {
                tracing::warn!("Rejected request body: {}", err);
                AppError::Internal(err.to_string()).into_response()
            }
        }
    }
}
