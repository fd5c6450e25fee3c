use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::event::handlers;
use crate::features::event::services::EventService;

pub fn routes(service: Arc<EventService>) -> Router {
    Router::new()
        .route("/api/faq", get(handlers::list_faq))
        .route("/api/event/countdown", get(handlers::get_countdown))
        .with_state(service)
}
