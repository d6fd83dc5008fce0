//! Selection-consistency controller.
//!
//! # Responsibility
//! - Track the single selected item across adds, deletes and external
//!   collection changes.
//! - Model two-step delete confirmation (request, then confirm or cancel)
//!   as explicit state instead of transient UI flags.
//! - Forward insert/delete commands to the item repository.
//!
//! # Invariants
//! - A non-empty selection always names an id present in the last delivered
//!   collection snapshot; `on_collection_changed` restores this after every
//!   external mutation.
//! - "Was the selection deleted" is decided by id equality, never by
//!   positional index; indices shift during deletion.
//! - Offsets are resolved against the snapshot once, before any deletion.
//! - Confirming with nothing selected or nothing pending is a silent no-op;
//!   the presentation layer disables those affordances.

use crate::model::item::{Item, ItemId};
use crate::repo::item_repo::{ItemRepository, RepoResult};
use log::info;
use std::collections::BTreeSet;

/// Gate returned by delete requests; the presentation layer shows a
/// confirmation dialog and calls the matching confirm or cancel operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationRequest {
    /// Confirm deleting the currently selected item (detail-pane flow).
    DeleteSelected { id: ItemId },
    /// Confirm deleting the items at the stored offsets (list swipe flow).
    DeleteAtOffsets { offsets: BTreeSet<usize> },
}

/// Coordinates the selected item with the repository-backed collection.
///
/// The collection itself is never cached here: every operation that needs
/// it takes the currently displayed snapshot, and the caller pushes fresh
/// snapshots through [`SelectionController::on_collection_changed`] after
/// each repository mutation.
pub struct SelectionController<R: ItemRepository> {
    repo: R,
    selection: Option<ItemId>,
    pending_delete_offsets: Option<BTreeSet<usize>>,
}

impl<R: ItemRepository> SelectionController<R> {
    /// Creates a controller with empty selection and no pending deletion.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            selection: None,
            pending_delete_offsets: None,
        }
    }

    /// Currently selected item id, if any.
    pub fn selection(&self) -> Option<ItemId> {
        self.selection
    }

    /// Offsets awaiting delete confirmation, if any.
    pub fn pending_delete_offsets(&self) -> Option<&BTreeSet<usize>> {
        self.pending_delete_offsets.as_ref()
    }

    /// Fetches the current collection snapshot from the repository.
    ///
    /// Callers feed the result back through `on_collection_changed`; the
    /// controller never consumes it implicitly.
    pub fn items(&self) -> RepoResult<Vec<Item>> {
        self.repo.list_items()
    }

    /// Reconciles the selection with a freshly delivered collection.
    ///
    /// # Contract
    /// - Selection is kept iff its id occurs in `items`.
    /// - Otherwise it becomes the first item's id, or `None` when `items`
    ///   is empty.
    /// - Idempotent: re-applying the same snapshot changes nothing.
    ///
    /// Must be invoked after every external mutation of the collection.
    pub fn on_collection_changed(&mut self, items: &[Item]) -> Option<ItemId> {
        let keep = self
            .selection
            .is_some_and(|id| items.iter().any(|item| item.uuid == id));
        if !keep {
            self.selection = items.first().map(|item| item.uuid);
        }
        self.selection
    }

    /// Selects the item with the given id, as tapped in the displayed list.
    ///
    /// Ignored when `id` is not in the snapshot, so a tap racing a deletion
    /// can never install a dangling selection.
    pub fn select(&mut self, id: ItemId, items: &[Item]) -> Option<ItemId> {
        if items.iter().any(|item| item.uuid == id) {
            self.selection = Some(id);
        }
        self.selection
    }

    /// Creates a new item, persists it and unconditionally selects it.
    pub fn add_item(&mut self) -> RepoResult<Item> {
        let item = Item::new();
        self.repo.insert_item(&item)?;
        self.selection = Some(item.uuid);
        info!(
            "event=item_add module=controller status=ok id={}",
            item.uuid
        );
        Ok(item)
    }

    /// Asks to delete the selected item.
    ///
    /// Returns `None` when nothing is selected (the affordance should be
    /// disabled in that state). No mutation happens until
    /// `confirm_delete_selected`.
    pub fn request_delete_selected(&self) -> Option<ConfirmationRequest> {
        self.selection
            .map(|id| ConfirmationRequest::DeleteSelected { id })
    }

    /// Deletes the selected item and clears the selection.
    ///
    /// # Contract
    /// - No-op when nothing is selected, or when the selected id is absent
    ///   from `items` (stale snapshot).
    /// - On success the selection is empty; the next collection change
    ///   notification may re-pick a first item.
    pub fn confirm_delete_selected(&mut self, items: &[Item]) -> RepoResult<Option<ItemId>> {
        let Some(id) = self.selection else {
            return Ok(None);
        };
        if !items.iter().any(|item| item.uuid == id) {
            return Ok(self.selection);
        }

        self.repo.delete_item(id)?;
        self.selection = None;
        info!("event=item_delete module=controller status=ok mode=selected id={id}");
        Ok(self.selection)
    }

    /// Asks to delete the items at `offsets` in the displayed collection.
    ///
    /// Stores the offsets as pending; a second request before confirmation
    /// replaces them. No mutation happens until `confirm_delete_at_offsets`.
    pub fn request_delete_at_offsets(&mut self, offsets: BTreeSet<usize>) -> ConfirmationRequest {
        self.pending_delete_offsets = Some(offsets.clone());
        ConfirmationRequest::DeleteAtOffsets { offsets }
    }

    /// Deletes the items at the pending offsets.
    ///
    /// # Contract
    /// - No-op when no offsets are pending.
    /// - Offsets are resolved against `items` before any deletion; offsets
    ///   past the end of the snapshot are skipped.
    /// - If the selected item was among the deleted, the selection becomes
    ///   the first remaining item (or empty) after all deletions complete;
    ///   otherwise it is unchanged.
    /// - Pending offsets are cleared.
    pub fn confirm_delete_at_offsets(&mut self, items: &[Item]) -> RepoResult<Option<ItemId>> {
        let Some(offsets) = self.pending_delete_offsets.take() else {
            return Ok(self.selection);
        };

        let targets: Vec<ItemId> = offsets
            .iter()
            .filter_map(|&offset| items.get(offset))
            .map(|item| item.uuid)
            .collect();

        let deleted_selected = self
            .selection
            .is_some_and(|id| targets.iter().any(|&target| target == id));

        for &id in &targets {
            self.repo.delete_item(id)?;
            info!("event=item_delete module=controller status=ok mode=offsets id={id}");
        }

        if deleted_selected {
            self.selection = items
                .iter()
                .find(|item| !targets.contains(&item.uuid))
                .map(|item| item.uuid);
        }

        Ok(self.selection)
    }

    /// Abandons a pending offset deletion without touching the collection.
    pub fn cancel_pending_delete(&mut self) {
        self.pending_delete_offsets = None;
    }
}
