//! # HTTP Server Module
//!
//! Axum server exposing the repair-ticket CRUD API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/RepairComputer` - List and create tickets
//! - `/RepairComputer/{id}` - Get, full-update, delete one ticket

pub mod errors;
pub mod response;
pub mod server;
pub mod ticket_routes;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
pub use ticket_routes::TicketState;
