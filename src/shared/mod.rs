pub mod constants;
pub mod request_meta;
pub mod types;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;
