/// Message used when an unexpected failure carries no usable text
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error";

/// Event start used when `EVENT_START_AT` is not set
pub const DEFAULT_EVENT_START_AT: &str = "2026-01-31T09:00:00-06:00";

// =============================================================================
// CLIENT IP HEADERS
// =============================================================================

/// Standard proxy header holding a comma-separated client chain
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Single-value client IP headers set by common hosts and CDNs, in lookup order
pub const CLIENT_IP_HEADERS: [&str; 4] = [
    "x-real-ip",
    "cf-connecting-ip",
    "fly-client-ip",
    "x-vercel-forwarded-for",
];
