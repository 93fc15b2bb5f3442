//! Commands for Task CRUD

use crate::domain::Task;
use crate::AppState;

pub async fn create_task(
    state: &AppState,
    text: String,
    folder_id: Option<String>,
) -> Result<Task, String> {
    let mut archive = state.archive.lock().await;
    archive
        .create_task(&text, folder_id)
        .map_err(|e| e.to_string())
}

pub async fn update_task(
    state: &AppState,
    id: String,
    text: Option<String>,
) -> Result<Task, String> {
    let mut archive = state.archive.lock().await;
    archive.update_task(&id, text).map_err(|e| e.to_string())
}

/// Flip a task's completion state
pub async fn toggle_task(state: &AppState, id: String) -> Result<Task, String> {
    let mut archive = state.archive.lock().await;
    archive.toggle_task(&id).map_err(|e| e.to_string())
}

pub async fn list_tasks(
    state: &AppState,
    folder_id: Option<String>,
) -> Result<Vec<Task>, String> {
    let archive = state.archive.lock().await;
    Ok(archive.tasks_in(folder_id.as_deref()))
}
