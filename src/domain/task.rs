//! Task Entity

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A checklist entry scoped to a folder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Owning folder id (None = archive root)
    pub folder_id: Option<String>,
    pub text: String,
    pub is_completed: bool,
}

impl Entity for Task {
    fn id(&self) -> &str {
        &self.id
    }
}
