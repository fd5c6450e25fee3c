pub mod applications;
pub mod event;
