pub mod event_handler;

pub use event_handler::{__path_get_countdown, __path_list_faq, get_countdown, list_faq};
