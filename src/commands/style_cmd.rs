//! Commands for the Art Style Library
//!
//! The catalog is compiled in, so these take no state.

use crate::domain::ArtStyle;
use crate::styles;

pub fn list_styles() -> Result<Vec<ArtStyle>, String> {
    Ok(styles::all().to_vec())
}

pub fn get_style(id: String) -> Result<ArtStyle, String> {
    styles::by_id(&id)
        .cloned()
        .ok_or_else(|| format!("style {} not found", id))
}

pub fn list_style_categories() -> Result<Vec<String>, String> {
    Ok(styles::categories().into_iter().map(str::to_string).collect())
}

pub fn styles_by_category(category: String) -> Result<Vec<ArtStyle>, String> {
    Ok(styles::by_category(&category).into_iter().cloned().collect())
}

pub fn search_styles(query: String) -> Result<Vec<ArtStyle>, String> {
    Ok(styles::search(&query).into_iter().cloned().collect())
}
