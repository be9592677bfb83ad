//! Storage lifecycle tests
//!
//! Repository-level checks against a file-backed database: rows survive a
//! reconnect, ids keep increasing, and affected-row counts are the sole
//! existence signal.

use tempfile::TempDir;

use repairdesk::tickets::{TicketDraft, TicketRepository};

fn scratch_url(dir: &TempDir) -> String {
    format!("sqlite://{}", dir.path().join("tickets.db").display())
}

fn draft(customer: &str) -> TicketDraft {
    TicketDraft {
        customer: customer.to_string(),
        phone: "555".to_string(),
        email: "j@x.com".to_string(),
        device_type: "laptop".to_string(),
        date: "2024-01-01".to_string(),
    }
}

#[tokio::test]
async fn test_rows_survive_reconnect() {
    let dir = TempDir::new().unwrap();
    let url = scratch_url(&dir);

    let id = {
        let repo = TicketRepository::connect(&url, 1).await.unwrap();
        repo.ensure_schema().await.unwrap();
        repo.insert(&draft("Jane")).await.unwrap()
    };

    let repo = TicketRepository::connect(&url, 1).await.unwrap();
    repo.ensure_schema().await.unwrap();

    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found.customer, "Jane");
    assert_eq!(repo.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_deleted_id_is_not_reported_as_existing() {
    let dir = TempDir::new().unwrap();
    let repo = TicketRepository::connect(&scratch_url(&dir), 2).await.unwrap();
    repo.ensure_schema().await.unwrap();

    let id = repo.insert(&draft("Jane")).await.unwrap();
    assert_eq!(repo.delete(id).await.unwrap(), 1);

    // Every later operation on the id sees zero rows.
    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert_eq!(repo.update(id, &draft("John")).await.unwrap(), 0);
    assert_eq!(repo.delete(id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_changes_exactly_one_row() {
    let dir = TempDir::new().unwrap();
    let repo = TicketRepository::connect(&scratch_url(&dir), 2).await.unwrap();
    repo.ensure_schema().await.unwrap();

    let first = repo.insert(&draft("Jane")).await.unwrap();
    let second = repo.insert(&draft("John")).await.unwrap();

    assert_eq!(repo.update(first, &draft("Janet")).await.unwrap(), 1);

    let untouched = repo.find_by_id(second).await.unwrap().unwrap();
    assert_eq!(untouched.customer, "John");
    let changed = repo.find_by_id(first).await.unwrap().unwrap();
    assert_eq!(changed.customer, "Janet");
    // id is immutable across the overwrite
    assert_eq!(changed.id, first);
}
