pub mod application_handler;

pub use application_handler::{__path_submit_application, submit_application};
