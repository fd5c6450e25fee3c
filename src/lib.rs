//! HTTP API behind the TCGFest landing page.

pub mod core;
pub mod features;
pub mod shared;
