//! Ticket row and write-payload types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use thiserror::Error;

/// Wire names of the fields that must be present and non-empty on every
/// create and full update.
pub const REQUIRED_FIELDS: [&str; 5] = ["customer", "phone", "email", "deviceType", "date"];

/// A persisted repair ticket.
///
/// `id` is assigned by storage on insert and never changes afterwards.
/// JSON uses camelCase (`deviceType`), columns use snake_case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RepairTicket {
    pub id: i64,
    pub customer: String,
    pub phone: String,
    pub email: String,
    pub device_type: String,
    /// Free-form date string supplied by the client; stored verbatim.
    pub date: String,
}

/// Validated write payload for create and full update.
///
/// Carries exactly the five required fields. There is no arbitrary-column
/// passthrough: a payload with any other key is rejected before it reaches
/// storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TicketDraft {
    pub customer: String,
    pub phone: String,
    pub email: String,
    pub device_type: String,
    pub date: String,
}

/// Payload validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("Missing required fields")]
    MissingFields,

    #[error("invalid field value: {0}")]
    InvalidValue(String),
}

impl TicketDraft {
    /// Validate a raw JSON payload into a draft.
    ///
    /// Checks, in order: the payload is an object, carries no unknown keys,
    /// and has all five required fields present as non-empty strings.
    pub fn from_payload(payload: &Value) -> Result<Self, DraftError> {
        let object = payload.as_object().ok_or(DraftError::NotAnObject)?;

        for key in object.keys() {
            if !REQUIRED_FIELDS.contains(&key.as_str()) {
                return Err(DraftError::UnknownField(key.clone()));
            }
        }

        for field in REQUIRED_FIELDS {
            match object.get(field) {
                Some(Value::String(s)) if !s.trim().is_empty() => {}
                Some(Value::String(_)) | None | Some(Value::Null) => {
                    return Err(DraftError::MissingFields)
                }
                // Present but not a string (number, bool, array, object).
                Some(_) => {
                    return Err(DraftError::InvalidValue(format!(
                        "field `{field}` must be a string"
                    )))
                }
            }
        }

        serde_json::from_value(payload.clone())
            .map_err(|e| DraftError::InvalidValue(e.to_string()))
    }
}
