//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract the selection controller delegates to.
//! - Isolate SQLite query details from controller logic.
//!
//! # Invariants
//! - Repository writes must enforce `Item::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod item_repo;
