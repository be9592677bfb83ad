//! Success response envelopes for write operations
//!
//! Reads return the bare row (or array of rows); only writes get an
//! envelope with an operator-facing message.

use serde::Serialize;

/// Create response: message plus the storage-assigned id
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

impl CreatedResponse {
    pub fn new(id: i64) -> Self {
        Self {
            message: "Record created successfully".to_string(),
            id,
        }
    }
}

/// Full-update response
#[derive(Debug, Clone, Serialize)]
pub struct UpdatedResponse {
    pub message: String,
}

impl UpdatedResponse {
    pub fn new() -> Self {
        Self {
            message: "Record updated successfully".to_string(),
        }
    }
}

impl Default for UpdatedResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Delete response echoing the write outcome
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub message: String,
    pub data: DeleteOutcome,
}

/// Explicit delete outcome, instead of echoing a raw driver packet
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub rows_affected: u64,
}

impl DeletedResponse {
    pub fn new(rows_affected: u64) -> Self {
        Self {
            message: "Delete record successfully".to_string(),
            data: DeleteOutcome { rows_affected },
        }
    }
}
