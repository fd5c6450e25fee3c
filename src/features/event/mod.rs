//! Public event information shown on the landing page.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/faq` | No | Frequently asked questions |
//! | GET | `/api/event/countdown` | No | Time remaining until doors open |

mod faq;

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::EventService;
