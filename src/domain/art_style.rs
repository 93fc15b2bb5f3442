//! Art Style Entity
//!
//! A reference-library entry. The catalog is compiled in, never persisted.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A documented design style in the reference library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtStyle {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Visual traits that define the style
    pub features: Vec<String>,
    /// Where the style works well
    pub usage: Vec<String>,
    /// Where the style should not be used
    pub avoid: Vec<String>,
    /// Representative palette (hex strings)
    pub colors: Vec<String>,
    pub category: String,
    pub image_url: String,
    pub fonts: Vec<String>,
    pub artists: Vec<String>,
    pub learn_more_url: String,
}

impl Entity for ArtStyle {
    fn id(&self) -> &str {
        &self.id
    }
}
