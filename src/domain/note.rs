//! Note Entity

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A free-form text note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: String,
    /// Owning folder id (None = archive root)
    pub folder_id: Option<String>,
    pub title: String,
    pub content: String,
    /// Creation date, YYYY/MM/DD
    pub date: String,
}

impl Entity for Note {
    fn id(&self) -> &str {
        &self.id
    }
}
