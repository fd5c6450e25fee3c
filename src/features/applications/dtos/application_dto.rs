use std::borrow::Cow;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::features::applications::models::{
    ApplicantDetails, Application, BudgetRange, PressApplication, SponsorApplication,
    VendorApplication,
};
use crate::shared::request_meta::RequestMeta;

// =============================================================================
// INBOUND FORMS
// =============================================================================
//
// Raw shapes of the three forms as they arrive from the browser. Required
// fields are `Option` so that an absent field becomes a field-level issue
// instead of a deserialization failure.

/// Keys of a form whose values must be JSON strings when present
pub trait TextFields {
    const TEXT_FIELDS: &'static [&'static str];
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantForm {
    #[validate(
        required(message = "Required"),
        length(min = 2, message = "Name required")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Required"),
        email(message = "Valid email required")
    )]
    pub email: Option<String>,

    pub phone: Option<String>,
    pub city: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SponsorForm {
    #[serde(flatten)]
    #[validate(nested)]
    pub applicant: ApplicantForm,

    #[validate(
        required(message = "Required"),
        length(min = 2, message = "Brand required")
    )]
    pub brand: Option<String>,

    #[validate(url(message = "Invalid url"))]
    pub website: Option<String>,

    pub goals: Option<String>,

    #[validate(custom(function = "validate_budget_range"))]
    pub budget_range: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VendorForm {
    #[serde(flatten)]
    #[validate(nested)]
    pub applicant: ApplicantForm,

    #[validate(
        required(message = "Required"),
        length(min = 2, message = "Brand required")
    )]
    pub brand: Option<String>,

    /// Arrives as a string from form inputs; coerced like JavaScript `Number()`.
    /// An explicit `null` is kept so it coerces to zero.
    #[serde(default, deserialize_with = "present_value")]
    #[validate(
        required(message = "Expected number, received nan"),
        custom(function = "validate_booth_count")
    )]
    pub number_of_booths: Option<Value>,

    pub what_they_sell: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PressForm {
    #[serde(flatten)]
    #[validate(nested)]
    pub applicant: ApplicantForm,

    #[validate(
        required(message = "Required"),
        length(min = 2, message = "Media type required")
    )]
    pub media_type: Option<String>,

    pub primary_platform: Option<String>,
    pub approx_followers: Option<String>,
}

impl TextFields for SponsorForm {
    const TEXT_FIELDS: &'static [&'static str] = &[
        "name",
        "email",
        "phone",
        "city",
        "notes",
        "brand",
        "website",
        "goals",
        "budgetRange",
    ];
}

impl TextFields for VendorForm {
    const TEXT_FIELDS: &'static [&'static str] = &[
        "name",
        "email",
        "phone",
        "city",
        "notes",
        "brand",
        "whatTheySell",
    ];
}

impl TextFields for PressForm {
    const TEXT_FIELDS: &'static [&'static str] = &[
        "name",
        "email",
        "phone",
        "city",
        "notes",
        "mediaType",
        "primaryPlatform",
        "approxFollowers",
    ];
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn validate_budget_range(value: &str) -> Result<(), ValidationError> {
    if BudgetRange::from_label(value).is_some() {
        return Ok(());
    }

    let expected = BudgetRange::ALL
        .iter()
        .map(|range| format!("'{}'", range.label()))
        .collect::<Vec<_>>()
        .join(" | ");

    Err(ValidationError::new("invalid_enum_value").with_message(Cow::Owned(format!(
        "Invalid enum value. Expected {}, received '{}'",
        expected, value
    ))))
}

fn validate_booth_count(value: &Value) -> Result<(), ValidationError> {
    let number = coerce_number(value);

    if number.is_nan() {
        return Err(ValidationError::new("invalid_type")
            .with_message(Cow::Borrowed("Expected number, received nan")));
    }
    if number.fract() != 0.0 {
        return Err(ValidationError::new("invalid_type")
            .with_message(Cow::Borrowed("Expected integer, received float")));
    }
    if number < 1.0 {
        return Err(
            ValidationError::new("too_small").with_message(Cow::Borrowed("At least 1 booth"))
        );
    }
    if number > u32::MAX as f64 {
        return Err(ValidationError::new("too_big")
            .with_message(Cow::Borrowed("Number of booths is too large")));
    }

    Ok(())
}

/// Numeric coercion with JavaScript `Number()` semantics.
///
/// Strings are trimmed and an empty string is zero; anything that is not a
/// number, numeric string, boolean or null is NaN.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

// Conversions below run only after `validate()` succeeded, so required
// fields are present and well-formed.

impl From<ApplicantForm> for ApplicantDetails {
    fn from(form: ApplicantForm) -> Self {
        Self {
            name: form.name.unwrap_or_default(),
            email: form.email.unwrap_or_default(),
            phone: form.phone,
            city: form.city,
            notes: form.notes,
        }
    }
}

impl From<SponsorForm> for Application {
    fn from(form: SponsorForm) -> Self {
        Application::Sponsor(SponsorApplication {
            applicant: form.applicant.into(),
            brand: form.brand.unwrap_or_default(),
            website: form.website,
            goals: form.goals,
            budget_range: form.budget_range.as_deref().and_then(BudgetRange::from_label),
        })
    }
}

impl From<VendorForm> for Application {
    fn from(form: VendorForm) -> Self {
        let number_of_booths = form
            .number_of_booths
            .as_ref()
            .map(coerce_number)
            .unwrap_or_default() as u32;

        Application::Vendor(VendorApplication {
            applicant: form.applicant.into(),
            brand: form.brand.unwrap_or_default(),
            number_of_booths,
            what_they_sell: form.what_they_sell,
        })
    }
}

impl From<PressForm> for Application {
    fn from(form: PressForm) -> Self {
        Application::Press(PressApplication {
            applicant: form.applicant.into(),
            media_type: form.media_type.unwrap_or_default(),
            primary_platform: form.primary_platform,
            approx_followers: form.approx_followers,
        })
    }
}

// =============================================================================
// OUTBOUND
// =============================================================================

/// A validated application plus what the server observed when receiving it.
///
/// This is the body posted to the webhook; absent metadata is omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedSubmission {
    #[serde(flatten)]
    pub application: Application,
    /// ISO-8601 UTC with milliseconds, e.g. `2026-01-31T15:00:00.000Z`
    pub submitted_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

impl EnrichedSubmission {
    pub fn new(application: Application, meta: RequestMeta, received_at: DateTime<Utc>) -> Self {
        Self {
            application,
            submitted_at: received_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            user_agent: meta.user_agent,
            ip: meta.ip,
        }
    }
}

/// Acknowledgment returned once the webhook accepted the submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApplyResponseDto {
    pub ok: bool,
}

impl ApplyResponseDto {
    pub fn accepted() -> Self {
        Self { ok: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_coerce_number_follows_js_rules() {
        assert_eq!(coerce_number(&json!(3)), 3.0);
        assert_eq!(coerce_number(&json!("3")), 3.0);
        assert_eq!(coerce_number(&json!(" 4 ")), 4.0);
        assert_eq!(coerce_number(&json!("")), 0.0);
        assert_eq!(coerce_number(&json!(true)), 1.0);
        assert_eq!(coerce_number(&Value::Null), 0.0);
        assert!(coerce_number(&json!("abc")).is_nan());
        assert!(coerce_number(&json!([1])).is_nan());
    }

    #[test]
    fn test_booth_count_rules() {
        assert!(validate_booth_count(&json!("2")).is_ok());
        assert!(validate_booth_count(&json!(0)).is_err());
        assert!(validate_booth_count(&json!(1.5)).is_err());

        let err = validate_booth_count(&json!("abc")).unwrap_err();
        assert_eq!(
            err.message.as_deref(),
            Some("Expected number, received nan")
        );
    }

    #[test]
    fn test_budget_range_message_lists_buckets() {
        let err = validate_budget_range("$50k+").unwrap_err();
        assert_eq!(
            err.message.as_deref(),
            Some("Invalid enum value. Expected '<$2k' | '$2k–$5k' | '$5k–$10k' | '$10k+', received '$50k+'")
        );
    }

    #[test]
    fn test_enriched_submission_shape() {
        let application: Application = PressForm {
            applicant: ApplicantForm {
                name: Some("Jo Lee".to_string()),
                email: Some("jo@x.com".to_string()),
                ..Default::default()
            },
            media_type: Some("Podcast".to_string()),
            ..Default::default()
        }
        .into();
        let received_at = Utc.with_ymd_and_hms(2026, 1, 31, 15, 0, 0).unwrap();

        let submission = EnrichedSubmission::new(
            application,
            RequestMeta {
                user_agent: Some("curl/8.5.0".to_string()),
                ip: None,
            },
            received_at,
        );

        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            json!({
                "type": "press",
                "name": "Jo Lee",
                "email": "jo@x.com",
                "mediaType": "Podcast",
                "submittedAt": "2026-01-31T15:00:00.000Z",
                "userAgent": "curl/8.5.0"
            })
        );
    }
}
