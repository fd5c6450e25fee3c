mod apply_client;
mod zapier_client;

pub use apply_client::{rejection_message, ApplyClient, SubmitError};
pub use zapier_client::ZapierClient;
