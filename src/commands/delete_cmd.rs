//! Commands for the Delete Confirmation Gate
//!
//! Destructive archive actions are two-step: `request_delete` parks the
//! target and returns the prompt, `confirm_delete` performs it. Deleting a
//! folder cascades through its whole subtree.

use crate::domain::{DeleteKind, PendingDelete};
use crate::repository::CascadeDeleteOperations;
use crate::AppState;

/// Park a delete target; returns the confirmation prompt to show
pub async fn request_delete(
    state: &AppState,
    kind: DeleteKind,
    id: String,
    name: Option<String>,
) -> Result<String, String> {
    let mut gate = state.delete_gate.lock().await;
    gate.request(kind, id, name);
    Ok(gate.pending().map(|p| p.prompt()).unwrap_or_default())
}

/// The request currently awaiting confirmation, if any
pub async fn pending_delete(state: &AppState) -> Result<Option<PendingDelete>, String> {
    let gate = state.delete_gate.lock().await;
    Ok(gate.pending().cloned())
}

/// Drop the pending request without touching any data
pub async fn cancel_delete(state: &AppState) -> Result<(), String> {
    let mut gate = state.delete_gate.lock().await;
    gate.cancel();
    Ok(())
}

/// Perform the pending delete. Folder deletion removes the whole subtree
/// and everything filed inside it.
pub async fn confirm_delete(state: &AppState) -> Result<(), String> {
    let pending = {
        let mut gate = state.delete_gate.lock().await;
        gate.confirm()
    };
    let Some(PendingDelete { kind, id, .. }) = pending else {
        return Err("nothing is pending deletion".to_string());
    };

    let mut archive = state.archive.lock().await;
    let result = match kind {
        DeleteKind::Folder => archive.delete_folder_cascade(&id),
        DeleteKind::File => archive.delete_file(&id),
        DeleteKind::Note => archive.delete_note(&id),
        DeleteKind::Task => archive.delete_task(&id),
        DeleteKind::Link => archive.delete_link(&id),
        DeleteKind::Moodboard => archive.delete_moodboard(&id),
        DeleteKind::Brief => archive.delete_brief(&id),
    };
    result.map_err(|e| e.to_string())
}
