//! Commands for File Uploads
//!
//! Uploads are tagged by the generative service before they land in the
//! archive; the size cap is enforced before the remote call so oversized
//! files fail fast.

use crate::domain::FileAsset;
use crate::repository::FileUpload;
use crate::AppState;

/// Register an uploaded file in `folder_id` (None = archive root)
pub async fn upload_file(
    state: &AppState,
    name: String,
    mime: Option<String>,
    bytes: Vec<u8>,
    folder_id: Option<String>,
) -> Result<FileAsset, String> {
    let upload = FileUpload::new(name, mime, bytes);
    upload.ensure_within_cap().map_err(|e| e.to_string())?;

    let tags = state.generative.generate_tags(&upload.name).await;

    let mut archive = state.archive.lock().await;
    archive
        .register_file(upload, tags, folder_id)
        .map_err(|e| e.to_string())
}

/// Files directly inside `folder_id` (None = root files only)
pub async fn list_files(
    state: &AppState,
    folder_id: Option<String>,
) -> Result<Vec<FileAsset>, String> {
    let archive = state.archive.lock().await;
    Ok(archive.files_in(folder_id.as_deref()))
}

/// Rename a file or replace its tags
pub async fn update_file(
    state: &AppState,
    id: String,
    name: Option<String>,
    tags: Option<Vec<String>>,
) -> Result<FileAsset, String> {
    let mut archive = state.archive.lock().await;
    archive
        .update_file(&id, name, tags)
        .map_err(|e| e.to_string())
}

/// Drop `dragged_id` just before `target_id` in the list view
pub async fn reorder_file(
    state: &AppState,
    dragged_id: String,
    target_id: String,
) -> Result<(), String> {
    let mut archive = state.archive.lock().await;
    archive
        .reorder_file(&dragged_id, &target_id)
        .map_err(|e| e.to_string())
}
