//! API response validation
//!
//! The status API answers with loosely structured JSON; this module is the
//! single place where its shape is enforced before records reach the
//! interpreter. Both `homeworks` and `current_date` must be present, even
//! though only the record list is consumed.

use crate::error::{BotError, Result};
use serde_json::Value;

/// Check the API response shape and extract the homework records.
///
/// The records come back unchanged and may be empty. Per-record fields are
/// checked later by [`crate::status::parse_status`].
pub fn validate(response: &Value) -> Result<Vec<Value>> {
    let map = response.as_object().ok_or(BotError::TypeMismatch)?;

    if !map.contains_key("homeworks") || !map.contains_key("current_date") {
        return Err(BotError::WrongApiAnswer);
    }

    let records = map["homeworks"].as_array().ok_or(BotError::HomeworkListShape)?;

    Ok(records.clone())
}
