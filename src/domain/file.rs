//! File Asset Entity
//!
//! An uploaded file stored inline as a base64 data URI. Content is capped at
//! upload time so the backing key-value store stays within its budget.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Upload size cap, in bytes
pub const MAX_UPLOAD_BYTES: usize = 500 * 1024;

/// An archived file with inline content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAsset {
    /// Unique identifier
    pub id: String,
    /// Owning folder id (None = archive root)
    pub folder_id: Option<String>,
    /// Original file name
    pub name: String,
    /// MIME type
    pub mime: String,
    /// Human-readable size, e.g. "12.4 KB"
    pub size: String,
    /// Tags attached at upload time
    pub tags: Vec<String>,
    /// Upload date, YYYY/MM/DD
    pub upload_date: String,
    /// Inline preview for images (data URI)
    pub thumbnail: Option<String>,
    /// Inline content for download (data URI)
    pub url: Option<String>,
}

impl FileAsset {
    /// Check whether the asset is an image (and thus previewable)
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

impl Entity for FileAsset {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_detection() {
        let file = FileAsset {
            id: "f1".into(),
            folder_id: None,
            name: "cover.png".into(),
            mime: "image/png".into(),
            size: "1.0 KB".into(),
            tags: vec![],
            upload_date: "2024/01/01".into(),
            thumbnail: None,
            url: None,
        };
        assert!(file.is_image());
    }
}
