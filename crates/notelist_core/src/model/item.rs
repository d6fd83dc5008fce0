//! Item domain model.
//!
//! # Responsibility
//! - Define the timestamped note record shown in the list and detail panes.
//! - Validate identity and timestamp at construction.
//!
//! # Invariants
//! - `uuid` is stable for the item's lifetime and never reused.
//! - `created_at` is immutable after construction.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for an item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// Construction/validation failure for item records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Nil uuid would break identity-based selection tracking.
    NilUuid,
    /// Creation timestamps predate the epoch; the clock or input is broken.
    NegativeTimestamp(i64),
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "item uuid must not be nil"),
            Self::NegativeTimestamp(value) => {
                write!(f, "item created_at ({value}) must be >= 0")
            }
        }
    }
}

impl Error for ItemValidationError {}

/// Canonical timestamped note record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable global ID; the only key selection tracking compares on.
    pub uuid: ItemId,
    /// Creation time in unix epoch milliseconds. Immutable after creation.
    pub created_at: i64,
}

impl Item {
    /// Creates a new item with a generated stable ID and the current time.
    pub fn new() -> Self {
        Self {
            uuid: Uuid::new_v4(),
            created_at: now_epoch_ms(),
        }
    }

    /// Creates an item with caller-provided identity and timestamp.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(uuid: ItemId, created_at: i64) -> Result<Self, ItemValidationError> {
        let item = Self { uuid, created_at };
        item.validate()?;
        Ok(item)
    }

    /// Checks construction invariants; write paths call this before SQL.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.uuid.is_nil() {
            return Err(ItemValidationError::NilUuid);
        }
        if self.created_at < 0 {
            return Err(ItemValidationError::NegativeTimestamp(self.created_at));
        }
        Ok(())
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new()
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{Item, ItemValidationError};
    use uuid::Uuid;

    #[test]
    fn new_generates_identity_and_timestamp() {
        let item = Item::new();
        assert!(!item.uuid.is_nil());
        assert!(item.created_at > 0);
    }

    #[test]
    fn with_id_rejects_nil_uuid() {
        let err = Item::with_id(Uuid::nil(), 1_000).unwrap_err();
        assert_eq!(err, ItemValidationError::NilUuid);
    }

    #[test]
    fn with_id_rejects_negative_timestamp() {
        let id = Uuid::new_v4();
        let err = Item::with_id(id, -1).unwrap_err();
        assert_eq!(err, ItemValidationError::NegativeTimestamp(-1));
    }
}
