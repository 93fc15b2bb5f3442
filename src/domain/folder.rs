//! Folder Entity
//!
//! A colored folder in the archive. Folders form a tree through `parent_id`;
//! the archive root is not a stored folder, it is `parent_id = None`.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Default swatch offered when creating a folder
pub const DEFAULT_FOLDER_COLOR: &str = "#E0B0FF";

/// Color presets shown by the folder form
pub const PRESET_COLORS: [&str; 10] = [
    "#E0B0FF", // Lilac (default)
    "#FFD700", // Gold
    "#87CEEB", // Sky blue
    "#FF6B6B", // Soft red
    "#4ECDC4", // Teal
    "#9B59B6", // Deep purple
    "#F1C40F", // Yellow
    "#2ECC71", // Emerald
    "#3498DB", // Blue
    "#95A5A6", // Gray
];

/// A folder in the archive tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Accent color (hex string)
    pub color: String,
    /// Parent folder id (None = archive root)
    pub parent_id: Option<String>,
}

impl Folder {
    pub fn new(id: String, name: String, color: String, parent_id: Option<String>) -> Self {
        Self {
            id,
            name,
            color,
            parent_id,
        }
    }

    /// Check if this folder sits directly under the archive root
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl Entity for Folder {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_creation() {
        let folder = Folder::new(
            "1".into(),
            "Logos".into(),
            DEFAULT_FOLDER_COLOR.into(),
            None,
        );
        assert_eq!(folder.id(), "1");
        assert!(folder.is_root());
    }

    #[test]
    fn test_child_folder() {
        let child = Folder::new("2".into(), "Drafts".into(), "#FFD700".into(), Some("1".into()));
        assert_eq!(child.parent_id.as_deref(), Some("1"));
        assert!(!child.is_root());
    }
}
