use thiserror::Error;

use crate::features::applications::dtos::ApplyResponseDto;
use crate::features::applications::models::Application;
use crate::shared::types::ErrorResponse;

const SUBMISSION_FAILED: &str = "Submission failed";

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The API answered with an error; the message is ready to show to a user
    #[error("{0}")]
    Rejected(String),

    #[error("Submission failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for `POST /api/apply`, used by form front-ends.
///
/// Performs no validation of its own and never retries.
pub struct ApplyClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl ApplyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn submit(&self, application: &Application) -> Result<ApplyResponseDto, SubmitError> {
        let url = format!("{}/api/apply", self.base_url.trim_end_matches('/'));

        let response = self
            .http_client
            .post(&url)
            .json(application)
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.json::<ErrorResponse>().await.ok();
            return Err(SubmitError::Rejected(rejection_message(body.as_ref())));
        }

        Ok(response.json::<ApplyResponseDto>().await?)
    }
}

/// One-line message for a failed submission.
///
/// With validation issues: `"<error>: <path> – <message>"` for the first issue.
/// Otherwise the error label, or a generic message when there is no body.
pub fn rejection_message(body: Option<&ErrorResponse>) -> String {
    let Some(body) = body.filter(|b| !b.error.is_empty()) else {
        return SUBMISSION_FAILED.to_string();
    };

    match body.issues.as_ref().and_then(|issues| issues.first()) {
        Some((path, message)) => format!("{}: {} – {}", body.error, path, message),
        None => body.error.clone(),
    }
}
