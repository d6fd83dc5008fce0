use notelist_core::db::migrations::latest_version;
use notelist_core::db::open_db_in_memory;
use notelist_core::{Item, ItemRepository, RepoError, SqliteItemRepository};
use rusqlite::Connection;
use uuid::Uuid;

#[test]
fn insert_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::try_new(&conn).unwrap();

    let item = Item::new();
    let id = repo.insert_item(&item).unwrap();
    assert_eq!(id, item.uuid);

    let loaded = repo.get_item(id).unwrap().unwrap();
    assert_eq!(loaded, item);
}

#[test]
fn get_missing_item_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::try_new(&conn).unwrap();

    assert!(repo.get_item(Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn list_orders_by_created_at_then_uuid() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::try_new(&conn).unwrap();

    let item_late = item_with_fixed_id("00000000-0000-4000-8000-000000000001", 3_000);
    let item_early = item_with_fixed_id("00000000-0000-4000-8000-000000000002", 1_000);
    let item_tie_a = item_with_fixed_id("00000000-0000-4000-8000-000000000003", 2_000);
    let item_tie_b = item_with_fixed_id("00000000-0000-4000-8000-000000000004", 2_000);
    repo.insert_item(&item_late).unwrap();
    repo.insert_item(&item_tie_b).unwrap();
    repo.insert_item(&item_early).unwrap();
    repo.insert_item(&item_tie_a).unwrap();

    let listed = repo.list_items().unwrap();
    let ids: Vec<_> = listed.into_iter().map(|item| item.uuid).collect();
    assert_eq!(
        ids,
        vec![
            item_early.uuid,
            item_tie_a.uuid,
            item_tie_b.uuid,
            item_late.uuid
        ]
    );
}

#[test]
fn deleted_item_disappears_from_queries() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::try_new(&conn).unwrap();

    let item = Item::new();
    repo.insert_item(&item).unwrap();
    repo.delete_item(item.uuid).unwrap();

    assert!(repo.get_item(item.uuid).unwrap().is_none());
    assert!(repo.list_items().unwrap().is_empty());
}

#[test]
fn delete_missing_item_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::try_new(&conn).unwrap();

    let id = Uuid::new_v4();
    let err = repo.delete_item(id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(missing) if missing == id));
}

#[test]
fn insert_rejects_invalid_item() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::try_new(&conn).unwrap();

    let invalid = Item {
        uuid: Uuid::nil(),
        created_at: 1_000,
    };
    let err = repo.insert_item(&invalid).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteItemRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_items_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteItemRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("items"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE items (uuid TEXT PRIMARY KEY NOT NULL);")
        .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteItemRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "items",
            column: "created_at"
        })
    ));
}

fn item_with_fixed_id(id: &str, created_at: i64) -> Item {
    Item::with_id(Uuid::parse_str(id).unwrap(), created_at).unwrap()
}
