use utoipa::{Modify, OpenApi};

use crate::features::applications::{
    dtos as applications_dtos, handlers as applications_handlers, models as applications_models,
};
use crate::features::event::{dtos as event_dtos, handlers as event_handlers};
use crate::shared::types::ErrorResponse;
use crate::shared::validation::ValidationIssues;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Applications (public)
        applications_handlers::submit_application,
        // Event (public)
        event_handlers::list_faq,
        event_handlers::get_countdown,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            ValidationIssues,
            // Applications
            applications_models::ApplicationType,
            applications_models::BudgetRange,
            applications_models::ApplicantDetails,
            applications_models::SponsorApplication,
            applications_models::VendorApplication,
            applications_models::PressApplication,
            applications_models::Application,
            applications_dtos::ApplyResponseDto,
            // Event
            event_dtos::FaqItemDto,
            event_dtos::CountdownParts,
            event_dtos::CountdownResponseDto,
        )
    ),
    tags(
        (name = "applications", description = "Sponsor, vendor and press applications (public)"),
        (name = "event", description = "Event information for the landing page (public)"),
    ),
    info(
        title = "TCGFest API",
        version = "0.1.0",
        description = "Sponsor, vendor and press applications for TCGFest",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
