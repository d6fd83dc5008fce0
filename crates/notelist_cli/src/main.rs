//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notelist_core` wiring.
//! - Walk one add/select/delete round against an in-memory store, with
//!   deterministic `key=value` output for quick local sanity checks.

use notelist_core::db::open_db_in_memory;
use notelist_core::{SelectionController, SqliteItemRepository};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("notelist_cli error={err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("notelist_core version={}", notelist_core::core_version());

    let conn = open_db_in_memory()?;
    let repo = SqliteItemRepository::try_new(&conn)?;
    let mut controller = SelectionController::new(repo);

    let added = controller.add_item()?;
    let items = controller.items()?;
    controller.on_collection_changed(&items);
    println!("added id={} created_at={}", added.uuid, added.created_at);
    println!(
        "items count={} selection={}",
        items.len(),
        selection_label(controller.selection())
    );

    if let Some(request) = controller.request_delete_selected() {
        println!("confirmation request={request:?}");
        controller.confirm_delete_selected(&items)?;
    }
    let items = controller.items()?;
    controller.on_collection_changed(&items);
    println!(
        "items count={} selection={}",
        items.len(),
        selection_label(controller.selection())
    );

    Ok(())
}

fn selection_label(selection: Option<notelist_core::ItemId>) -> String {
    selection.map_or_else(|| "none".to_string(), |id| id.to_string())
}
