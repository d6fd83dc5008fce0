//! Core domain logic for the notelist application.
//! This crate is the single source of truth for selection invariants.

pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use controller::selection::{ConfirmationRequest, SelectionController};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Item, ItemId, ItemValidationError};
pub use repo::item_repo::{ItemRepository, RepoError, RepoResult, SqliteItemRepository};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
