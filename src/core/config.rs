use std::env;

use chrono::{DateTime, FixedOffset};

use crate::features::applications::models::ApplicationType;
use crate::shared::constants::DEFAULT_EVENT_START_AT;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    pub webhooks: WebhookConfig,
    pub event: EventConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Zapier webhook URLs, one per application type.
///
/// A missing URL disables submissions of that type only.
#[derive(Debug, Clone, Default)]
pub struct WebhookConfig {
    pub sponsor: Option<String>,
    pub vendor: Option<String>,
    pub press: Option<String>,
}

/// Convention schedule used by the public event endpoints
#[derive(Debug, Clone)]
pub struct EventConfig {
    pub start_at: DateTime<FixedOffset>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            webhooks: WebhookConfig::from_env(),
            event: EventConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "TCGFest API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Sponsor, vendor and press applications for TCGFest".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl WebhookConfig {
    pub fn from_env() -> Self {
        Self {
            sponsor: non_blank_var("ZAPIER_WEBHOOK_SPONSOR"),
            vendor: non_blank_var("ZAPIER_WEBHOOK_VENDOR"),
            press: non_blank_var("ZAPIER_WEBHOOK_PRESS"),
        }
    }

    /// Webhook URL configured for the given application type, if any
    pub fn url_for(&self, kind: ApplicationType) -> Option<&str> {
        let url = match kind {
            ApplicationType::Sponsor => self.sponsor.as_deref(),
            ApplicationType::Vendor => self.vendor.as_deref(),
            ApplicationType::Press => self.press.as_deref(),
        };
        url.filter(|u| !u.trim().is_empty())
    }

    /// Application types that currently have no webhook configured
    pub fn missing(&self) -> Vec<ApplicationType> {
        ApplicationType::ALL
            .into_iter()
            .filter(|kind| self.url_for(*kind).is_none())
            .collect()
    }
}

impl EventConfig {
    pub fn from_env() -> Result<Self, String> {
        let raw = env::var("EVENT_START_AT").unwrap_or_else(|_| DEFAULT_EVENT_START_AT.to_string());
        let start_at = DateTime::parse_from_rfc3339(raw.trim())
            .map_err(|e| format!("EVENT_START_AT must be an RFC 3339 timestamp: {}", e))?;

        Ok(Self { start_at })
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
