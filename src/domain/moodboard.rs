//! Moodboard Entity
//!
//! A titled collection of reference images stored inline as data URIs.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A single image pinned to a moodboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodboardImage {
    pub id: String,
    /// Image content (data URI)
    pub url: String,
}

/// A board of collected reference images
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Moodboard {
    /// Unique identifier
    pub id: String,
    /// Owning folder id (None = archive root)
    pub folder_id: Option<String>,
    pub title: String,
    pub images: Vec<MoodboardImage>,
}

impl Entity for Moodboard {
    fn id(&self) -> &str {
        &self.id
    }
}
