use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::validation::ValidationIssues;

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<ValidationIssues>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            issues: None,
            details: None,
        }
    }

    pub fn with_issues(error: impl Into<String>, issues: ValidationIssues) -> Self {
        Self {
            issues: Some(issues),
            ..Self::new(error)
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(error)
        }
    }
}
