//! Link Entity

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A saved external link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkItem {
    /// Unique identifier
    pub id: String,
    /// Owning folder id (None = archive root)
    pub folder_id: Option<String>,
    pub title: String,
    pub url: String,
}

impl Entity for LinkItem {
    fn id(&self) -> &str {
        &self.id
    }
}
