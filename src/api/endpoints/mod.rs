//! Route handlers, one module per resource.

pub mod caretaker;
pub mod doctor;
pub mod old_age_home;
pub mod patient;
pub mod prescription;
pub mod report;

use crate::api::error::ApiError;

/// Path segments arrive as strings; anything that is not a plain
/// integer is a 400 with the caller-supplied message.
fn parse_id(raw: &str, message: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(message.to_string()))
}
