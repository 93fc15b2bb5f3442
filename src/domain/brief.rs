//! Project Brief Entity
//!
//! A versioned client brief. Every edit bumps `version` by one and refreshes
//! `last_modified`; pinned briefs sort ahead of the rest.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A reference file attached to a brief (content inline as a data URI)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefReference {
    pub id: String,
    pub name: String,
    /// MIME type of the attached file
    pub mime: String,
    /// File content (data URI)
    pub url: String,
}

/// A client project brief
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brief {
    /// Unique identifier
    pub id: String,
    /// Owning folder id (None = archive root)
    pub folder_id: Option<String>,
    pub title: String,
    pub client: String,
    pub start_date: String,
    /// Delivery date, YYYY/MM/DD
    pub deadline: String,
    pub objective: String,
    pub target_audience: String,
    pub deliverables: String,
    /// Client preferences and style notes
    pub preferences: String,
    pub references: Vec<BriefReference>,
    pub tags: Vec<String>,
    /// Pinned briefs are listed first
    pub is_pinned: bool,
    /// Starts at 1, +1 on every edit
    pub version: u32,
    /// Unix epoch milliseconds of the last edit
    pub last_modified: i64,
}

impl Entity for Brief {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Editable fields of a brief, used for both create and edit forms.
/// On edit, `None` leaves the existing value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BriefPatch {
    pub title: Option<String>,
    pub client: Option<String>,
    pub start_date: Option<String>,
    pub deadline: Option<String>,
    pub objective: Option<String>,
    pub target_audience: Option<String>,
    pub deliverables: Option<String>,
    pub preferences: Option<String>,
    pub references: Option<Vec<BriefReference>>,
    pub tags: Option<Vec<String>>,
}
