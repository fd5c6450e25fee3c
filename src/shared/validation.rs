use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Flattened validation result: payload-level messages plus messages keyed
/// by the camelCase path of the failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssues {
    #[serde(default)]
    pub form_errors: Vec<String>,
    #[serde(default)]
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl ValidationIssues {
    /// Single issue attached to a field
    pub fn field(path: impl Into<String>, message: impl Into<String>) -> Self {
        let mut issues = Self::default();
        issues.push_field(path, message);
        issues
    }

    /// Single issue about the payload as a whole
    pub fn form(message: impl Into<String>) -> Self {
        Self {
            form_errors: vec![message.into()],
            ..Self::default()
        }
    }

    pub fn push_field(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.field_errors
            .entry(path.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.form_errors.is_empty() && self.field_errors.values().all(Vec::is_empty)
    }

    /// First issue as `(path, message)`; field issues win over form issues,
    /// which report an empty path.
    pub fn first(&self) -> Option<(&str, &str)> {
        self.field_errors
            .iter()
            .find_map(|(path, messages)| {
                messages
                    .first()
                    .map(|message| (path.as_str(), message.as_str()))
            })
            .or_else(|| self.form_errors.first().map(|m| ("", m.as_str())))
    }

    fn collect(&mut self, errors: &ValidationErrors) {
        for (field, kind) in errors.errors() {
            match kind {
                ValidationErrorsKind::Field(list) => {
                    let path = to_camel_case(&field.to_string());
                    for error in list {
                        self.push_field(path.clone(), message_of(error));
                    }
                }
                // Nested shapes here are serde-flattened, so their fields
                // report at the top level.
                ValidationErrorsKind::Struct(nested) => self.collect(nested),
                ValidationErrorsKind::List(items) => {
                    for nested in items.values() {
                        self.collect(nested);
                    }
                }
            }
        }
    }
}

impl From<&ValidationErrors> for ValidationIssues {
    fn from(errors: &ValidationErrors) -> Self {
        let mut issues = Self::default();
        issues.collect(errors);
        issues
    }
}

fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("Invalid value ({})", error.code))
}

/// `number_of_booths` -> `numberOfBooths`; already camelCase input is returned unchanged
pub fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("number_of_booths"), "numberOfBooths");
        assert_eq!(to_camel_case("budget_range"), "budgetRange");
        assert_eq!(to_camel_case("email"), "email");
        assert_eq!(to_camel_case("mediaType"), "mediaType");
    }

    #[test]
    fn test_first_prefers_field_issues() {
        let mut issues = ValidationIssues::form("Expected object, received array");
        assert_eq!(issues.first(), Some(("", "Expected object, received array")));

        issues.push_field("name", "Name required");
        issues.push_field("email", "Valid email required");
        assert_eq!(issues.first(), Some(("email", "Valid email required")));
    }

    #[test]
    fn test_serializes_as_flattened_map() {
        let issues = ValidationIssues::field("numberOfBooths", "At least 1 booth");

        assert_eq!(
            serde_json::to_value(&issues).unwrap(),
            json!({
                "formErrors": [],
                "fieldErrors": { "numberOfBooths": ["At least 1 booth"] }
            })
        );
        assert!(!issues.is_empty());
        assert!(ValidationIssues::default().is_empty());
    }
}
