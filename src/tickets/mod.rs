//! Repair ticket domain
//!
//! One ticket = one row in the `repair_tickets` table, representing a
//! customer's device-repair request.
//!
//! The module is split the same way the HTTP layer consumes it:
//! - `model`: the persisted row type, the validated write payload, and
//!   payload validation errors
//! - `repository`: the SQLite-backed store issuing the five CRUD statements

mod model;
mod repository;

pub use model::{DraftError, RepairTicket, TicketDraft, REQUIRED_FIELDS};
pub use repository::TicketRepository;
