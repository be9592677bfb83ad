//! Ticket HTTP Routes
//!
//! The five CRUD endpoints over `/RepairComputer`. Each handler validates
//! (writes only), issues one repository call, and maps the outcome onto the
//! response contract. Existence on update/delete is decided purely by the
//! affected-row count.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::tickets::{RepairTicket, TicketDraft, TicketRepository};

use super::errors::{ApiError, ApiResult};
use super::response::{CreatedResponse, DeletedResponse, UpdatedResponse};

/// State shared across ticket handlers
pub struct TicketState {
    pub repo: TicketRepository,
}

impl TicketState {
    pub fn new(repo: TicketRepository) -> Self {
        Self { repo }
    }
}

/// Create ticket routes
pub fn ticket_routes(state: Arc<TicketState>) -> Router {
    Router::new()
        .route("/RepairComputer", get(list_tickets).post(create_ticket))
        .route(
            "/RepairComputer/{id}",
            get(get_ticket).put(update_ticket).delete(delete_ticket),
        )
        .with_state(state)
}

/// A non-numeric id never matches a row, so it reports as a miss rather
/// than a malformed request.
fn parse_id(raw: &str, miss: &'static str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| ApiError::NotFound(miss))
}

/// List all tickets as a bare JSON array
async fn list_tickets(State(state): State<Arc<TicketState>>) -> ApiResult<Json<Vec<RepairTicket>>> {
    let tickets = state
        .repo
        .list_all()
        .await
        .map_err(ApiError::storage("Error fetching all repair records"))?;
    Ok(Json(tickets))
}

/// Fetch a single ticket as a bare JSON object
async fn get_ticket(
    State(state): State<Arc<TicketState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<RepairTicket>> {
    let miss = "Repair record not found";
    let id = parse_id(&id, miss)?;

    let ticket = state
        .repo
        .find_by_id(id)
        .await
        .map_err(ApiError::storage("Error fetching data by ID"))?
        .ok_or(ApiError::NotFound(miss))?;
    Ok(Json(ticket))
}

/// Create a ticket from a validated payload
async fn create_ticket(
    State(state): State<Arc<TicketState>>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let draft = TicketDraft::from_payload(&payload)?;

    let id = state
        .repo
        .insert(&draft)
        .await
        .map_err(ApiError::storage("Error creating record"))?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

/// Full overwrite of a ticket; all five fields are re-validated
async fn update_ticket(
    State(state): State<Arc<TicketState>>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<UpdatedResponse>> {
    let miss = "Repair record not found for update";
    let id = parse_id(&id, miss)?;
    let draft = TicketDraft::from_payload(&payload)?;

    let affected = state
        .repo
        .update(id, &draft)
        .await
        .map_err(ApiError::storage("Error updating record"))?;
    if affected == 0 {
        return Err(ApiError::NotFound(miss));
    }
    Ok(Json(UpdatedResponse::new()))
}

/// Permanently remove a ticket
async fn delete_ticket(
    State(state): State<Arc<TicketState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeletedResponse>> {
    let miss = "Repair record not found to delete";
    let id = parse_id(&id, miss)?;

    let affected = state
        .repo
        .delete(id)
        .await
        .map_err(ApiError::storage("Something went wrong while deleting"))?;
    if affected == 0 {
        return Err(ApiError::NotFound(miss));
    }
    Ok(Json(DeletedResponse::new(affected)))
}
