//! Commands for Note CRUD

use crate::domain::Note;
use crate::AppState;

pub async fn create_note(
    state: &AppState,
    title: String,
    content: String,
    folder_id: Option<String>,
) -> Result<Note, String> {
    let mut archive = state.archive.lock().await;
    archive
        .create_note(&title, &content, folder_id)
        .map_err(|e| e.to_string())
}

pub async fn update_note(
    state: &AppState,
    id: String,
    title: Option<String>,
    content: Option<String>,
) -> Result<Note, String> {
    let mut archive = state.archive.lock().await;
    archive
        .update_note(&id, title, content)
        .map_err(|e| e.to_string())
}

pub async fn list_notes(
    state: &AppState,
    folder_id: Option<String>,
) -> Result<Vec<Note>, String> {
    let archive = state.archive.lock().await;
    Ok(archive.notes_in(folder_id.as_deref()))
}
