//! Commands for Folder CRUD + Navigation
//!
//! Folder management plus breadcrumbs, visit history and the view mode.

use crate::domain::Folder;
use crate::repository::{
    Breadcrumb, FolderHierarchyOperations, HistoryEntry, NavigationOperations, ViewMode,
};
use crate::AppState;

/// Create a folder under `parent_id` (None = archive root)
pub async fn create_folder(
    state: &AppState,
    name: String,
    color: Option<String>,
    parent_id: Option<String>,
) -> Result<Folder, String> {
    let mut archive = state.archive.lock().await;
    archive
        .create_folder(&name, color, parent_id)
        .map_err(|e| e.to_string())
}

/// Rename or recolor a folder
pub async fn update_folder(
    state: &AppState,
    id: String,
    name: Option<String>,
    color: Option<String>,
) -> Result<Folder, String> {
    let mut archive = state.archive.lock().await;
    archive
        .update_folder(&id, name, color)
        .map_err(|e| e.to_string())
}

/// Direct children of `parent_id` (None = root-level folders)
pub async fn list_folders(
    state: &AppState,
    parent_id: Option<String>,
) -> Result<Vec<Folder>, String> {
    let archive = state.archive.lock().await;
    Ok(archive.folders_in(parent_id.as_deref()))
}

/// Make `folder_id` the current folder and record the visit
pub async fn open_folder(state: &AppState, folder_id: Option<String>) -> Result<(), String> {
    let mut archive = state.archive.lock().await;
    archive.open_folder(folder_id).map_err(|e| e.to_string())
}

/// Current folder id, None at the root
pub async fn current_folder(state: &AppState) -> Result<Option<String>, String> {
    let archive = state.archive.lock().await;
    Ok(archive.current_folder().map(str::to_string))
}

/// Root-to-current breadcrumb trail for the current folder
pub async fn breadcrumbs(state: &AppState) -> Result<Vec<Breadcrumb>, String> {
    let archive = state.archive.lock().await;
    let current = archive.current_folder().map(str::to_string);
    Ok(archive.breadcrumbs(current.as_deref()))
}

/// Recently visited folders, newest first
pub async fn folder_history(state: &AppState) -> Result<Vec<HistoryEntry>, String> {
    let archive = state.archive.lock().await;
    Ok(archive.history().to_vec())
}

/// Switch between "grid" and "list"
pub async fn set_view_mode(state: &AppState, mode: String) -> Result<(), String> {
    let mut archive = state.archive.lock().await;
    archive.set_view_mode(ViewMode::from_str(&mode));
    Ok(())
}

pub async fn view_mode(state: &AppState) -> Result<String, String> {
    let archive = state.archive.lock().await;
    Ok(archive.view_mode().as_str().to_string())
}
