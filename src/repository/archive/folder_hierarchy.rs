//! Folder Hierarchy Operations
//!
//! Pure reads over the folder tree: breadcrumb trails and the transitive
//! descendant set used by cascade deletion.

use std::collections::HashSet;

use serde::Serialize;

use super::archive_repo::ArchiveRepository;

/// Name shown for the implicit archive root
pub const ROOT_LABEL: &str = "Main Archive";

/// Upper bound on breadcrumb length. Parent links are expected to be
/// acyclic; the bound keeps a corrupted chain from looping forever.
pub const MAX_BREADCRUMB_DEPTH: usize = 20;

/// One step in a breadcrumb trail; `id = None` is the archive root
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breadcrumb {
    pub id: Option<String>,
    pub name: String,
}

/// Trait for folder tree traversals
pub trait FolderHierarchyOperations {
    /// Root-to-folder trail. Always starts with the synthetic root entry;
    /// a dangling parent reference ends the walk as if the root were reached.
    fn breadcrumbs(&self, folder_id: Option<&str>) -> Vec<Breadcrumb>;

    /// The folder plus every transitive sub-folder, at arbitrary depth
    fn descendant_closure(&self, root_id: &str) -> HashSet<String>;
}

impl FolderHierarchyOperations for ArchiveRepository {
    fn breadcrumbs(&self, folder_id: Option<&str>) -> Vec<Breadcrumb> {
        let mut path = Vec::new();
        let mut current = folder_id.map(str::to_string);
        let mut guard = 0;

        while let Some(id) = current {
            if guard >= MAX_BREADCRUMB_DEPTH {
                break;
            }
            match self.folder_by_id(&id) {
                Some(folder) => {
                    path.push(Breadcrumb {
                        id: Some(folder.id.clone()),
                        name: folder.name.clone(),
                    });
                    current = folder.parent_id.clone();
                }
                None => break,
            }
            guard += 1;
        }

        path.push(Breadcrumb {
            id: None,
            name: ROOT_LABEL.to_string(),
        });
        path.reverse();
        path
    }

    fn descendant_closure(&self, root_id: &str) -> HashSet<String> {
        let mut closure: HashSet<String> = HashSet::new();
        closure.insert(root_id.to_string());
        let mut to_visit = vec![root_id.to_string()];

        while let Some(current) = to_visit.pop() {
            for folder in &self.folders {
                if folder.parent_id.as_deref() == Some(current.as_str())
                    && closure.insert(folder.id.clone())
                {
                    to_visit.push(folder.id.clone());
                }
            }
        }

        closure
    }
}
