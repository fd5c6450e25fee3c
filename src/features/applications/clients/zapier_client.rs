use reqwest::header::ACCEPT;

use crate::core::error::{AppError, Result};
use crate::features::applications::dtos::EnrichedSubmission;

/// Posts enriched submissions to Zapier catch hooks.
///
/// The hook URL carries its own secret, so no auth header is sent. One
/// attempt per call; nothing is retried or queued.
#[derive(Clone, Default)]
pub struct ZapierClient {
    http_client: reqwest::Client,
}

impl ZapierClient {
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn forward(&self, url: &str, submission: &EnrichedSubmission) -> Result<()> {
        tracing::debug!(
            "Forwarding {} application to Zapier",
            submission.application.kind()
        );

        let response = self
            .http_client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(submission)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach Zapier webhook: {}", e);
                AppError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let details = if body.is_empty() {
                status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| status.as_str().to_string())
            } else {
                body
            };
            tracing::error!("Zapier webhook returned HTTP {}", status);
            return Err(AppError::Upstream { details });
        }

        Ok(())
    }
}
