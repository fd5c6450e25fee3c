use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Discriminator of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationType {
    Sponsor,
    Vendor,
    Press,
}

impl ApplicationType {
    pub const ALL: [ApplicationType; 3] = [Self::Sponsor, Self::Vendor, Self::Press];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sponsor => "sponsor",
            Self::Vendor => "vendor",
            Self::Press => "press",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sponsorship budget buckets offered on the sponsor form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum BudgetRange {
    #[serde(rename = "<$2k")]
    Under2k,
    #[serde(rename = "$2k–$5k")]
    From2kTo5k,
    #[serde(rename = "$5k–$10k")]
    From5kTo10k,
    #[serde(rename = "$10k+")]
    Over10k,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 4] = [
        Self::Under2k,
        Self::From2kTo5k,
        Self::From5kTo10k,
        Self::Over10k,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Under2k => "<$2k",
            Self::From2kTo5k => "$2k–$5k",
            Self::From5kTo10k => "$5k–$10k",
            Self::Over10k => "$10k+",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.label() == label)
    }
}

/// Fields shared by every application type
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantDetails {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SponsorApplication {
    #[serde(flatten)]
    pub applicant: ApplicantDetails,
    pub brand: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<BudgetRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VendorApplication {
    #[serde(flatten)]
    pub applicant: ApplicantDetails,
    pub brand: String,
    pub number_of_booths: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what_they_sell: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PressApplication {
    #[serde(flatten)]
    pub applicant: ApplicantDetails,
    pub media_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approx_followers: Option<String>,
}

/// A validated application.
///
/// Only produced by [`parse_application`](crate::features::applications::validation::parse_application),
/// so holding one means the payload passed the schema.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Application {
    Sponsor(SponsorApplication),
    Vendor(VendorApplication),
    Press(PressApplication),
}

impl Application {
    pub fn kind(&self) -> ApplicationType {
        match self {
            Self::Sponsor(_) => ApplicationType::Sponsor,
            Self::Vendor(_) => ApplicationType::Vendor,
            Self::Press(_) => ApplicationType::Press,
        }
    }

    pub fn applicant(&self) -> &ApplicantDetails {
        match self {
            Self::Sponsor(a) => &a.applicant,
            Self::Vendor(a) => &a.applicant,
            Self::Press(a) => &a.applicant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_application_type_round_trips_its_label() {
        for kind in ApplicationType::ALL {
            assert_eq!(ApplicationType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ApplicationType::parse("Sponsor"), None);
        assert_eq!(ApplicationType::Press.to_string(), "press");
    }

    #[test]
    fn test_budget_range_labels() {
        assert_eq!(BudgetRange::from_label("$10k+"), Some(BudgetRange::Over10k));
        assert_eq!(BudgetRange::from_label("$2k-$5k"), None); // hyphen, not en dash
        assert_eq!(
            serde_json::to_value(BudgetRange::From5kTo10k).unwrap(),
            json!("$5k–$10k")
        );
    }

    #[test]
    fn test_application_serializes_flat_with_type_tag() {
        let application = Application::Press(PressApplication {
            applicant: ApplicantDetails {
                name: "Jo Lee".to_string(),
                email: "jo@x.com".to_string(),
                phone: None,
                city: Some("Austin".to_string()),
                notes: None,
            },
            media_type: "Podcast".to_string(),
            primary_platform: None,
            approx_followers: Some("12k".to_string()),
        });

        assert_eq!(
            serde_json::to_value(&application).unwrap(),
            json!({
                "type": "press",
                "name": "Jo Lee",
                "email": "jo@x.com",
                "city": "Austin",
                "mediaType": "Podcast",
                "approxFollowers": "12k"
            })
        );
        assert_eq!(application.applicant().name, "Jo Lee");
    }
}
