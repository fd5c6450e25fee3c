mod event_service;

pub use event_service::{countdown_parts, EventService};
