//! Application schema: discriminated union on `type`.

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::features::applications::dtos::{PressForm, SponsorForm, TextFields, VendorForm};
use crate::features::applications::models::{Application, ApplicationType};
use crate::shared::validation::ValidationIssues;

/// Validate an untyped payload against the application schema.
///
/// The discriminator is checked first; when it is missing or unknown no other
/// field is inspected. Pure: the same payload always yields the same verdict.
pub fn parse_application(payload: &Value) -> Result<Application, ValidationIssues> {
    if !payload.is_object() {
        return Err(ValidationIssues::form(format!(
            "Expected object, received {}",
            json_kind(payload)
        )));
    }

    let kind = payload
        .get("type")
        .and_then(Value::as_str)
        .and_then(ApplicationType::parse)
        .ok_or_else(|| {
            ValidationIssues::field(
                "type",
                "Invalid discriminator value. Expected 'sponsor' | 'vendor' | 'press'",
            )
        })?;

    match kind {
        ApplicationType::Sponsor => read_form::<SponsorForm>(payload).map(Application::from),
        ApplicationType::Vendor => read_form::<VendorForm>(payload).map(Application::from),
        ApplicationType::Press => read_form::<PressForm>(payload).map(Application::from),
    }
}

fn read_form<F>(payload: &Value) -> Result<F, ValidationIssues>
where
    F: DeserializeOwned + Validate + TextFields,
{
    let mut fields = payload.as_object().cloned().unwrap_or_default();
    let mut issues = ValidationIssues::default();

    // Wrongly typed text fields are reported by path and left out of the
    // form, so the remaining fields still get checked.
    for &key in F::TEXT_FIELDS {
        if let Some(value) = fields.get(key).filter(|v| !v.is_string()) {
            issues.push_field(key, format!("Expected string, received {}", json_kind(value)));
            fields.remove(key);
        }
    }

    let form = F::deserialize(Value::Object(fields))
        .map_err(|e| ValidationIssues::form(e.to_string()))?;

    if let Err(errors) = form.validate() {
        merge_issues(&mut issues, ValidationIssues::from(&errors));
    }

    if issues.is_empty() {
        Ok(form)
    } else {
        Err(issues)
    }
}

/// Adds rule violations, except on paths that already failed the type check
fn merge_issues(issues: &mut ValidationIssues, rules: ValidationIssues) {
    issues.form_errors.extend(rules.form_errors);
    for (path, messages) in rules.field_errors {
        if issues.field_errors.contains_key(&path) {
            continue;
        }
        for message in messages {
            issues.push_field(path.clone(), message);
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
