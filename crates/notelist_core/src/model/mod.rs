//! Domain model for notelist items.
//!
//! # Responsibility
//! - Define the canonical timestamped record the list and detail views share.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId` that is never reused.
//! - Deletion is hard removal from storage, not a tombstone.

pub mod item;
