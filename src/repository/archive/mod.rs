//! Archive Module
//!
//! The folder tree and its seven item collections, plus traversal,
//! cascade deletion, and navigation state.

mod archive_repo;
mod folder_cascade;
mod folder_hierarchy;
mod navigation;

pub use archive_repo::{
    ArchiveCounts, ArchiveRepository, KEY_BRIEFS, KEY_CURRENT_FOLDER, KEY_FILES, KEY_FOLDERS,
    KEY_LINKS, KEY_MOODBOARDS, KEY_NOTES, KEY_TASKS, KEY_VIEW_MODE,
};
pub use folder_cascade::CascadeDeleteOperations;
pub use folder_hierarchy::{
    Breadcrumb, FolderHierarchyOperations, MAX_BREADCRUMB_DEPTH, ROOT_LABEL,
};
pub use navigation::{HistoryEntry, NavigationOperations, ViewMode, HISTORY_LIMIT};
