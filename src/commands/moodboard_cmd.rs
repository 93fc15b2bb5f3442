//! Commands for Moodboard CRUD

use crate::domain::{Moodboard, MoodboardImage};
use crate::AppState;

pub async fn create_moodboard(
    state: &AppState,
    title: String,
    images: Vec<MoodboardImage>,
    folder_id: Option<String>,
) -> Result<Moodboard, String> {
    let mut archive = state.archive.lock().await;
    archive
        .create_moodboard(&title, images, folder_id)
        .map_err(|e| e.to_string())
}

pub async fn update_moodboard(
    state: &AppState,
    id: String,
    title: Option<String>,
    images: Option<Vec<MoodboardImage>>,
) -> Result<Moodboard, String> {
    let mut archive = state.archive.lock().await;
    archive
        .update_moodboard(&id, title, images)
        .map_err(|e| e.to_string())
}

/// Pin one more image (data URI) onto a board
pub async fn add_moodboard_image(
    state: &AppState,
    board_id: String,
    data_uri: String,
) -> Result<MoodboardImage, String> {
    let mut archive = state.archive.lock().await;
    archive
        .add_moodboard_image(&board_id, data_uri)
        .map_err(|e| e.to_string())
}

pub async fn remove_moodboard_image(
    state: &AppState,
    board_id: String,
    image_id: String,
) -> Result<(), String> {
    let mut archive = state.archive.lock().await;
    archive
        .remove_moodboard_image(&board_id, &image_id)
        .map_err(|e| e.to_string())
}

pub async fn list_moodboards(
    state: &AppState,
    folder_id: Option<String>,
) -> Result<Vec<Moodboard>, String> {
    let archive = state.archive.lock().await;
    Ok(archive.moodboards_in(folder_id.as_deref()))
}
