//! List/detail coordination logic.
//!
//! # Responsibility
//! - Keep the single selected item consistent with the mutable collection.
//! - Gate destructive operations behind explicit confirmation requests.
//!
//! # See also
//! - `repo::item_repo` for the persistence contract the controller drives.

pub mod selection;
