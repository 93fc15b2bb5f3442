//! Commands for App Settings

use crate::repository::{Language, Theme};
use crate::AppState;

pub async fn get_theme(state: &AppState) -> Result<String, String> {
    let settings = state.settings.lock().await;
    Ok(settings.theme().as_str().to_string())
}

pub async fn set_theme(state: &AppState, theme: String) -> Result<(), String> {
    let mut settings = state.settings.lock().await;
    settings.set_theme(Theme::from_str(&theme));
    Ok(())
}

pub async fn get_language(state: &AppState) -> Result<String, String> {
    let settings = state.settings.lock().await;
    Ok(settings.language().as_str().to_string())
}

pub async fn set_language(state: &AppState, language: String) -> Result<(), String> {
    let mut settings = state.settings.lock().await;
    settings.set_language(Language::from_str(&language));
    Ok(())
}
