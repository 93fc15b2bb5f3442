//! Archive Navigation
//!
//! Current-folder tracking, the grid/list view mode, and a short
//! most-recently-visited history. The current folder and view mode persist
//! across sessions; history is per-session.

use serde::{Deserialize, Serialize};

use crate::domain::DomainResult;

use super::super::ids::now_millis;
use super::archive_repo::{ArchiveRepository, KEY_CURRENT_FOLDER, KEY_VIEW_MODE};
use super::folder_hierarchy::ROOT_LABEL;

/// Visits kept in the recent-folder history
pub const HISTORY_LIMIT: usize = 10;

/// How archive contents are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "list" => ViewMode::List,
            _ => ViewMode::Grid,
        }
    }
}

/// One visited folder; newest entries sit at the front
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Visited folder (None = archive root)
    pub folder_id: Option<String>,
    /// Folder name at visit time
    pub label: String,
    /// Unix epoch milliseconds of the visit
    pub timestamp: i64,
}

/// Trait for navigation state on the archive
pub trait NavigationOperations {
    /// Make `folder_id` the current folder and record the visit.
    /// Re-opening the folder already on top of the history is not recorded
    /// again, but revisits after going elsewhere are.
    fn open_folder(&mut self, folder_id: Option<String>) -> DomainResult<()>;

    fn current_folder(&self) -> Option<&str>;

    fn history(&self) -> &[HistoryEntry];

    fn set_view_mode(&mut self, mode: ViewMode);

    fn view_mode(&self) -> ViewMode;
}

impl NavigationOperations for ArchiveRepository {
    fn open_folder(&mut self, folder_id: Option<String>) -> DomainResult<()> {
        let label = match folder_id.as_deref() {
            Some(id) => self
                .folder_by_id(id)
                .map(|f| f.name.clone())
                .unwrap_or_else(|| "Unknown folder".to_string()),
            None => ROOT_LABEL.to_string(),
        };

        let on_top = self
            .history
            .first()
            .map(|entry| entry.folder_id == folder_id)
            .unwrap_or(false);
        if !on_top {
            self.history.insert(
                0,
                HistoryEntry {
                    folder_id: folder_id.clone(),
                    label,
                    timestamp: now_millis(),
                },
            );
            self.history.truncate(HISTORY_LIMIT);
        }

        self.current_folder = folder_id;
        self.persist(KEY_CURRENT_FOLDER, &self.current_folder);
        Ok(())
    }

    fn current_folder(&self) -> Option<&str> {
        self.current_folder.as_deref()
    }

    fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.persist(KEY_VIEW_MODE, &self.view_mode);
    }

    fn view_mode(&self) -> ViewMode {
        self.view_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_round_trip() {
        assert_eq!(ViewMode::from_str("list"), ViewMode::List);
        assert_eq!(ViewMode::from_str("bogus"), ViewMode::Grid);
        assert_eq!(serde_json::to_string(&ViewMode::List).unwrap(), "\"list\"");
    }
}
