//! Repository Layer
//!
//! Data access abstractions and implementations.

mod archive;
mod character_repo;
mod db;
mod finance_repo;
mod ids;
mod memory;
mod resume_repo;
mod settings_repo;
mod traits;
mod uploads;

#[cfg(test)]
mod tests;

/// Drop the entity with `id` from `items`; true if something was removed
pub(crate) fn remove_by_id<T: crate::domain::Entity>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

pub use archive::{
    ArchiveCounts, ArchiveRepository, Breadcrumb, CascadeDeleteOperations,
    FolderHierarchyOperations, HistoryEntry, NavigationOperations, ViewMode, HISTORY_LIMIT,
    MAX_BREADCRUMB_DEPTH, ROOT_LABEL,
};
pub use character_repo::{CharacterPatch, CharacterRepository};
pub use db::SqliteStore;
pub use finance_repo::{FinanceRepository, MonthFlow, MonthTotals};
pub use ids::{next_id, now_millis, today};
pub use memory::MemoryStore;
pub use resume_repo::ResumeRepository;
pub use settings_repo::{Language, SettingsRepository, Theme};
pub use traits::{KeyValueStore, SharedStore};
pub use uploads::FileUpload;
