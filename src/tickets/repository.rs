//! SQLite-backed ticket store
//!
//! Holds the connection pool and issues exactly five parameterized
//! statements: select-all, select-by-id, insert, update-by-id, delete-by-id.
//! Existence on update/delete is decided by the affected-row count.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use super::model::{RepairTicket, TicketDraft};

const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS repair_tickets (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    customer    TEXT NOT NULL,
    phone       TEXT NOT NULL,
    email       TEXT NOT NULL,
    device_type TEXT NOT NULL,
    date        TEXT NOT NULL
)";

const SELECT_ALL: &str =
    "SELECT id, customer, phone, email, device_type, date FROM repair_tickets";

const SELECT_BY_ID: &str =
    "SELECT id, customer, phone, email, device_type, date FROM repair_tickets WHERE id = ?1";

const INSERT: &str = "INSERT INTO repair_tickets (customer, phone, email, device_type, date) \
                      VALUES (?1, ?2, ?3, ?4, ?5)";

const UPDATE_BY_ID: &str = "UPDATE repair_tickets \
                            SET customer = ?1, phone = ?2, email = ?3, device_type = ?4, date = ?5 \
                            WHERE id = ?6";

const DELETE_BY_ID: &str = "DELETE FROM repair_tickets WHERE id = ?1";

/// Ticket store over a pooled SQLite connection.
///
/// Cheap to clone; clones share the pool. The pool is injected into the HTTP
/// state rather than held as a process-wide global, so tests can run each
/// against their own database.
#[derive(Clone)]
pub struct TicketRepository {
    pool: SqlitePool,
}

impl TicketRepository {
    /// Wrap an existing pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool against `database_url`, creating the database file if it
    /// does not exist yet. Fails eagerly: the first connection is
    /// established before this returns.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Create the `repair_tickets` table if it is not there yet.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    pub async fn list_all(&self) -> Result<Vec<RepairTicket>, sqlx::Error> {
        sqlx::query_as::<_, RepairTicket>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<RepairTicket>, sqlx::Error> {
        sqlx::query_as::<_, RepairTicket>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Insert a validated draft; returns the storage-assigned id.
    pub async fn insert(&self, draft: &TicketDraft) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(INSERT)
            .bind(&draft.customer)
            .bind(&draft.phone)
            .bind(&draft.email)
            .bind(&draft.device_type)
            .bind(&draft.date)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Full overwrite of one row; returns the affected-row count
    /// (0 means the id does not exist).
    pub async fn update(&self, id: i64, draft: &TicketDraft) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(UPDATE_BY_ID)
            .bind(&draft.customer)
            .bind(&draft.phone)
            .bind(&draft.email)
            .bind(&draft.device_type)
            .bind(&draft.date)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Permanent removal; returns the affected-row count.
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
