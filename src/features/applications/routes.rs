use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::applications::handlers;
use crate::features::applications::services::ApplicationService;

/// Create routes for the applications feature
///
/// Public: the application modal on the landing page posts here directly.
pub fn routes(service: Arc<ApplicationService>) -> Router {
    Router::new()
        .route("/api/apply", post(handlers::submit_application))
        .with_state(service)
}
