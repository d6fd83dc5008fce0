use notelist_core::{Item, ItemValidationError};
use uuid::Uuid;

#[test]
fn new_item_has_fresh_identity_and_current_time() {
    let item = Item::new();

    assert!(!item.uuid.is_nil());
    assert!(item.created_at > 0);
    assert!(item.validate().is_ok());
}

#[test]
fn two_new_items_never_share_an_id() {
    assert_ne!(Item::new().uuid, Item::new().uuid);
}

#[test]
fn item_serialization_uses_expected_wire_fields() {
    let item_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let item = Item::with_id(item_id, 1_700_000_000_000).unwrap();

    let json = serde_json::to_value(item).unwrap();
    assert_eq!(json["uuid"], item_id.to_string());
    assert_eq!(json["created_at"], 1_700_000_000_000_i64);

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Item::with_id(Uuid::nil(), 1_000).unwrap_err();
    assert_eq!(err, ItemValidationError::NilUuid);
}

#[test]
fn with_id_rejects_pre_epoch_timestamp() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let err = Item::with_id(id, -5).unwrap_err();
    assert_eq!(err, ItemValidationError::NegativeTimestamp(-5));
}
