//! Sponsor, vendor and press applications from the landing page.
//!
//! Submissions are validated, stamped with server-side metadata and relayed
//! to the Zapier webhook configured for their type. Nothing is stored
//! locally; the webhook target is the system of record.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/apply` | No | Submit an application |

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validation;

pub use services::ApplicationService;
