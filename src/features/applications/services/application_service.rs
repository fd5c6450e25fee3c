use chrono::Utc;
use serde_json::Value;

use crate::core::config::WebhookConfig;
use crate::core::error::{AppError, Result};
use crate::features::applications::clients::ZapierClient;
use crate::features::applications::dtos::EnrichedSubmission;
use crate::features::applications::models::ApplicationType;
use crate::features::applications::validation::parse_application;
use crate::shared::request_meta::RequestMeta;

/// Validates applications and relays them to the per-type webhook
pub struct ApplicationService {
    webhooks: WebhookConfig,
    zapier: ZapierClient,
}

impl ApplicationService {
    pub fn new(webhooks: WebhookConfig, zapier: ZapierClient) -> Self {
        Self { webhooks, zapier }
    }

    /// Validate, enrich and forward one submission.
    ///
    /// Invalid payloads never reach the webhook. Delivery is a single
    /// synchronous attempt.
    pub async fn submit(&self, payload: &Value, meta: RequestMeta) -> Result<ApplicationType> {
        let application = parse_application(payload).map_err(|issues| {
            tracing::warn!(
                "Application rejected: {} field issue(s), {} form issue(s)",
                issues.field_errors.len(),
                issues.form_errors.len()
            );
            AppError::Validation(issues)
        })?;

        let kind = application.kind();
        let submission = EnrichedSubmission::new(application, meta, Utc::now());

        let url = self
            .webhooks
            .url_for(kind)
            .ok_or(AppError::MissingWebhook(kind))?;

        self.zapier.forward(url, &submission).await?;

        tracing::info!(
            "Application forwarded: type={}, submitted_at={}",
            kind,
            submission.submitted_at
        );

        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::spawn_webhook;
    use axum::http::StatusCode;
    use chrono::DateTime;
    use serde_json::json;

    fn sponsor_payload() -> Value {
        json!({
            "type": "sponsor",
            "name": "Jo Lee",
            "email": "jo@x.com",
            "brand": "Card Kingdom",
            "budgetRange": "$5k–$10k"
        })
    }

    #[tokio::test]
    async fn test_submit_routes_by_type() {
        let sponsor_hook = spawn_webhook(StatusCode::OK, "{}").await;
        let press_hook = spawn_webhook(StatusCode::OK, "{}").await;
        let service = ApplicationService::new(
            WebhookConfig {
                sponsor: Some(sponsor_hook.url.clone()),
                vendor: None,
                press: Some(press_hook.url.clone()),
            },
            ZapierClient::new(),
        );

        let kind = service
            .submit(&sponsor_payload(), RequestMeta::default())
            .await
            .unwrap();

        assert_eq!(kind, ApplicationType::Sponsor);
        assert_eq!(sponsor_hook.calls().len(), 1);
        assert!(press_hook.calls().is_empty());

        let body = &sponsor_hook.calls()[0].body;
        assert_eq!(body["budgetRange"], "$5k–$10k");
        let submitted_at = body["submittedAt"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(submitted_at).is_ok());
        assert!(body.get("ip").is_none());
        assert!(body.get("userAgent").is_none());
    }

    #[tokio::test]
    async fn test_invalid_payload_never_reaches_webhook() {
        let hook = spawn_webhook(StatusCode::OK, "{}").await;
        let service = ApplicationService::new(
            WebhookConfig {
                sponsor: Some(hook.url.clone()),
                ..Default::default()
            },
            ZapierClient::new(),
        );

        let err = service
            .submit(
                &json!({ "type": "sponsor", "name": "Jo Lee", "email": "jo@x.com" }),
                RequestMeta::default(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(ref issues) if issues.field_errors.contains_key("brand")));
        assert!(hook.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_webhook_is_a_configuration_error() {
        let service = ApplicationService::new(WebhookConfig::default(), ZapierClient::new());

        let err = service
            .submit(&sponsor_payload(), RequestMeta::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::MissingWebhook(ApplicationType::Sponsor)));
    }
}
