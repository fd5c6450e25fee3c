use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FaqItemDto {
    /// Question
    pub q: String,
    /// Answer
    pub a: String,
}

/// Whole days, hours, minutes and seconds of a remaining duration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountdownResponseDto {
    /// Event start as RFC 3339, in the event's local offset
    pub start_at: String,
    #[serde(flatten)]
    pub remaining: CountdownParts,
    pub is_over: bool,
}
