//! Folder Cascade Deletion
//!
//! Deleting a folder removes its whole subtree and every item, of every
//! kind, that lives anywhere inside it. Ownership is only a back-reference
//! (`folder_id`), so each collection gets one filter pass against the
//! descendant closure. All in-memory updates complete before any store
//! write.

use crate::domain::{DomainError, DomainResult};

use super::archive_repo::ArchiveRepository;
use super::folder_hierarchy::FolderHierarchyOperations;

/// Trait for transitive folder deletion
pub trait CascadeDeleteOperations {
    /// Delete `folder_id`, all its sub-folders, and their contents
    fn delete_folder_cascade(&mut self, folder_id: &str) -> DomainResult<()>;
}

impl CascadeDeleteOperations for ArchiveRepository {
    fn delete_folder_cascade(&mut self, folder_id: &str) -> DomainResult<()> {
        if self.folder_by_id(folder_id).is_none() {
            return Err(DomainError::NotFound(format!(
                "folder {} not found",
                folder_id
            )));
        }

        let doomed = self.descendant_closure(folder_id);
        let owned_by_doomed =
            |owner: &Option<String>| owner.as_ref().is_some_and(|id| doomed.contains(id));

        self.folders.retain(|f| !doomed.contains(&f.id));
        self.files.retain(|f| !owned_by_doomed(&f.folder_id));
        self.notes.retain(|n| !owned_by_doomed(&n.folder_id));
        self.tasks.retain(|t| !owned_by_doomed(&t.folder_id));
        self.links.retain(|l| !owned_by_doomed(&l.folder_id));
        self.moodboards.retain(|m| !owned_by_doomed(&m.folder_id));
        self.briefs.retain(|b| !owned_by_doomed(&b.folder_id));

        self.persist_folders();
        self.persist_files();
        self.persist_notes();
        self.persist_tasks();
        self.persist_links();
        self.persist_moodboards();
        self.persist_briefs();

        Ok(())
    }
}
