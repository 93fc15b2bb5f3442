//! Commands for Link CRUD

use crate::domain::LinkItem;
use crate::AppState;

pub async fn create_link(
    state: &AppState,
    title: String,
    url: String,
    folder_id: Option<String>,
) -> Result<LinkItem, String> {
    let mut archive = state.archive.lock().await;
    archive
        .create_link(&title, &url, folder_id)
        .map_err(|e| e.to_string())
}

pub async fn update_link(
    state: &AppState,
    id: String,
    title: Option<String>,
    url: Option<String>,
) -> Result<LinkItem, String> {
    let mut archive = state.archive.lock().await;
    archive
        .update_link(&id, title, url)
        .map_err(|e| e.to_string())
}

pub async fn list_links(
    state: &AppState,
    folder_id: Option<String>,
) -> Result<Vec<LinkItem>, String> {
    let archive = state.archive.lock().await;
    Ok(archive.links_in(folder_id.as_deref()))
}
