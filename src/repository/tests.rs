//! Repository Integration Tests
//!
//! Archive behavior against in-memory and on-disk stores.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::domain::{BriefPatch, DomainError};
    use crate::repository::{
        ArchiveRepository, CascadeDeleteOperations, FileUpload, FolderHierarchyOperations,
        MemoryStore, NavigationOperations, SharedStore, SqliteStore, ViewMode, ROOT_LABEL,
    };

    fn setup() -> ArchiveRepository {
        ArchiveRepository::load(Arc::new(MemoryStore::new()))
    }

    fn png_upload(name: &str) -> FileUpload {
        FileUpload::new(name, Some("image/png".into()), vec![1, 2, 3, 4])
    }

    // --- CRUD basics ---

    #[test]
    fn test_create_folder_assigns_id_and_parent() {
        let mut repo = setup();
        let root = repo.create_folder("Logos", None, None).unwrap();
        let child = repo
            .create_folder("Drafts", None, Some(root.id.clone()))
            .unwrap();
        assert!(!root.id.is_empty());
        assert_eq!(child.parent_id.as_deref(), Some(root.id.as_str()));
    }

    #[test]
    fn test_create_folder_rejects_blank_name() {
        let mut repo = setup();
        assert!(matches!(
            repo.create_folder("   ", None, None),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut repo = setup();
        assert!(matches!(
            repo.update_folder("absent", Some("x".into()), None),
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(
            repo.update_note("absent", None, None),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn test_toggle_task_flips_completion() {
        let mut repo = setup();
        let task = repo.create_task("ship the poster", None).unwrap();
        assert!(!task.is_completed);
        assert!(repo.toggle_task(&task.id).unwrap().is_completed);
        assert!(!repo.toggle_task(&task.id).unwrap().is_completed);
    }

    #[test]
    fn test_file_reorder_moves_before_target() {
        let mut repo = setup();
        let a = repo.register_file(png_upload("a.png"), vec![], None).unwrap();
        let b = repo.register_file(png_upload("b.png"), vec![], None).unwrap();
        let c = repo.register_file(png_upload("c.png"), vec![], None).unwrap();

        repo.reorder_file(&c.id, &a.id).unwrap();
        let order: Vec<String> = repo.files_in(None).into_iter().map(|f| f.id).collect();
        assert_eq!(order, vec![c.id.clone(), a.id.clone(), b.id.clone()]);

        // Self-drop is a no-op
        repo.reorder_file(&c.id, &c.id).unwrap();
        let order2: Vec<String> = repo.files_in(None).into_iter().map(|f| f.id).collect();
        assert_eq!(order, order2);
    }

    #[test]
    fn test_file_reorder_unknown_target_keeps_order() {
        let mut repo = setup();
        let a = repo.register_file(png_upload("a.png"), vec![], None).unwrap();
        let b = repo.register_file(png_upload("b.png"), vec![], None).unwrap();

        assert!(repo.reorder_file(&a.id, "absent").is_err());
        let order: Vec<String> = repo.files_in(None).into_iter().map(|f| f.id).collect();
        assert_eq!(order, vec![a.id, b.id]);
    }

    // --- Folder-scoped queries ---

    #[test]
    fn test_root_query_excludes_foldered_items() {
        let mut repo = setup();
        let folder = repo.create_folder("Mockups", None, None).unwrap();
        repo.register_file(png_upload("root.png"), vec![], None).unwrap();
        repo.register_file(png_upload("nested.png"), vec![], Some(folder.id.clone()))
            .unwrap();

        let at_root = repo.files_in(None);
        assert_eq!(at_root.len(), 1);
        assert_eq!(at_root[0].name, "root.png");

        // Root folder listing never includes descendants either
        let sub = repo
            .create_folder("Deep", None, Some(folder.id.clone()))
            .unwrap();
        let roots = repo.folders_in(None);
        assert!(roots.iter().any(|f| f.id == folder.id));
        assert!(!roots.iter().any(|f| f.id == sub.id));
    }

    #[test]
    fn test_pinned_briefs_sort_first() {
        let mut repo = setup();
        let first = repo
            .create_brief(
                BriefPatch {
                    title: Some("First".into()),
                    ..Default::default()
                },
                None,
            )
            .unwrap();
        let second = repo
            .create_brief(
                BriefPatch {
                    title: Some("Second".into()),
                    ..Default::default()
                },
                None,
            )
            .unwrap();
        // Newest first by default; pinning the older one moves it up
        repo.toggle_pin_brief(&first.id).unwrap();
        let listed = repo.briefs_in(None);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);
    }

    // --- Breadcrumbs ---

    #[test]
    fn test_breadcrumbs_root_only() {
        let repo = setup();
        let trail = repo.breadcrumbs(None);
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].id, None);
        assert_eq!(trail[0].name, ROOT_LABEL);
    }

    #[test]
    fn test_breadcrumbs_three_level_chain() {
        let mut repo = setup();
        let a = repo.create_folder("A", None, None).unwrap();
        let b = repo.create_folder("B", None, Some(a.id.clone())).unwrap();
        let c = repo.create_folder("C", None, Some(b.id.clone())).unwrap();

        let trail = repo.breadcrumbs(Some(&c.id));
        let names: Vec<&str> = trail.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec![ROOT_LABEL, "A", "B", "C"]);
        // depth + 1 entries, root first, target last
        assert_eq!(trail.len(), 4);
        assert_eq!(trail.last().unwrap().id.as_deref(), Some(c.id.as_str()));
    }

    #[test]
    fn test_breadcrumbs_dangling_parent_stops_at_root() {
        let mut repo = setup();
        let orphan = repo
            .create_folder("Orphan", None, Some("gone".into()))
            .unwrap();
        let trail = repo.breadcrumbs(Some(&orphan.id));
        let names: Vec<&str> = trail.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec![ROOT_LABEL, "Orphan"]);
    }

    #[test]
    fn test_breadcrumbs_cycle_terminates() {
        // Hand-write a corrupted tree where A and B parent each other
        let store: SharedStore = Arc::new(MemoryStore::new());
        store
            .set(
                "archive_folders",
                r##"[{"id":"a","name":"A","color":"#fff","parent_id":"b"},
                    {"id":"b","name":"B","color":"#fff","parent_id":"a"}]"##,
            )
            .unwrap();
        let corrupted = ArchiveRepository::load(store);
        let trail = corrupted.breadcrumbs(Some("a"));
        // Bounded walk: terminates, root entry still first
        assert_eq!(trail[0].name, ROOT_LABEL);
        assert!(trail.len() <= crate::repository::MAX_BREADCRUMB_DEPTH + 1);
    }

    // --- Descendant closure ---

    #[test]
    fn test_closure_contains_root_and_is_fixed_point() {
        let mut repo = setup();
        let a = repo.create_folder("A", None, None).unwrap();
        let b = repo.create_folder("B", None, Some(a.id.clone())).unwrap();
        let c = repo.create_folder("C", None, Some(b.id.clone())).unwrap();
        let _sibling = repo.create_folder("S", None, None).unwrap();

        let closure = repo.descendant_closure(&a.id);
        assert!(closure.contains(&a.id));
        assert!(closure.contains(&b.id));
        assert!(closure.contains(&c.id));
        assert_eq!(closure.len(), 3);

        // Fixed point: nothing new appears on a second pass
        let again = repo.descendant_closure(&a.id);
        assert_eq!(closure, again);
    }

    #[test]
    fn test_closure_of_leaf_is_itself() {
        let mut repo = setup();
        let leaf = repo.create_folder("Leaf", None, None).unwrap();
        let closure = repo.descendant_closure(&leaf.id);
        assert_eq!(closure.len(), 1);
        assert!(closure.contains(&leaf.id));
    }

    // --- Cascade deletion ---

    #[test]
    fn test_cascade_removes_subtree_and_contents() {
        let mut repo = setup();
        let a = repo.create_folder("A", None, None).unwrap();
        let b = repo.create_folder("B", None, Some(a.id.clone())).unwrap();
        repo.create_note("inside B", "...", Some(b.id.clone())).unwrap();

        repo.delete_folder_cascade(&a.id).unwrap();
        assert!(repo.folders_in(None).is_empty());
        assert!(repo.notes_in(Some(&b.id)).is_empty());
        assert_eq!(repo.counts().folders, 0);
        assert_eq!(repo.counts().notes, 0);
    }

    #[test]
    fn test_cascade_spares_ancestors_and_siblings() {
        let mut repo = setup();
        let a = repo.create_folder("A", None, None).unwrap();
        let b = repo.create_folder("B", None, Some(a.id.clone())).unwrap();
        let x = repo
            .register_file(png_upload("x.png"), vec![], Some(a.id.clone()))
            .unwrap();

        repo.delete_folder_cascade(&b.id).unwrap();
        assert!(repo.folder_by_id(&a.id).is_some());
        assert!(repo.folder_by_id(&b.id).is_none());
        let kept = repo.files_in(Some(&a.id));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, x.id);
    }

    #[test]
    fn test_cascade_sweeps_every_kind() {
        let mut repo = setup();
        let a = repo.create_folder("A", None, None).unwrap();
        let b = repo.create_folder("B", None, Some(a.id.clone())).unwrap();
        repo.register_file(png_upload("f.png"), vec![], Some(b.id.clone()))
            .unwrap();
        repo.create_note("n", "", Some(b.id.clone())).unwrap();
        repo.create_task("t", Some(b.id.clone())).unwrap();
        repo.create_link("l", "https://example.com", Some(b.id.clone()))
            .unwrap();
        repo.create_moodboard("m", vec![], Some(b.id.clone())).unwrap();
        repo.create_brief(
            BriefPatch {
                title: Some("br".into()),
                ..Default::default()
            },
            Some(b.id.clone()),
        )
        .unwrap();
        // One survivor of each flavor at root
        repo.create_note("root note", "", None).unwrap();

        repo.delete_folder_cascade(&a.id).unwrap();
        let counts = repo.counts();
        assert_eq!(counts.folders, 0);
        assert_eq!(counts.files, 0);
        assert_eq!(counts.tasks, 0);
        assert_eq!(counts.links, 0);
        assert_eq!(counts.moodboards, 0);
        assert_eq!(counts.briefs, 0);
        assert_eq!(counts.notes, 1);
    }

    #[test]
    fn test_cascade_missing_folder_is_not_found() {
        let mut repo = setup();
        assert!(matches!(
            repo.delete_folder_cascade("absent"),
            Err(DomainError::NotFound(_))
        ));
    }

    // --- Brief versioning ---

    #[test]
    fn test_brief_edit_bumps_version_by_one() {
        let mut repo = setup();
        let brief = repo
            .create_brief(
                BriefPatch {
                    title: Some("Rebrand".into()),
                    client: Some("Acme".into()),
                    ..Default::default()
                },
                None,
            )
            .unwrap();
        assert_eq!(brief.version, 1);

        let updated = repo
            .update_brief(
                &brief.id,
                BriefPatch {
                    objective: Some("Bolder mark".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.version, 2);
        // Untouched fields survive the patch
        assert_eq!(updated.title, "Rebrand");
        assert_eq!(updated.client, "Acme");

        let again = repo.update_brief(&brief.id, BriefPatch::default()).unwrap();
        assert_eq!(again.version, 3);
    }

    // --- Persistence round-trips ---

    #[test]
    fn test_reload_reproduces_collections_in_order() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let (folder_id, file_ids) = {
            let mut repo = ArchiveRepository::load(store.clone());
            let folder = repo.create_folder("Logos", Some("#FFD700".into()), None).unwrap();
            let a = repo.register_file(png_upload("a.png"), vec!["logo".into()], None).unwrap();
            let b = repo
                .register_file(png_upload("b.png"), vec![], Some(folder.id.clone()))
                .unwrap();
            repo.create_note("n", "body", None).unwrap();
            (folder.id, vec![a.id, b.id])
        };

        let reloaded = ArchiveRepository::load(store);
        assert!(reloaded.folder_by_id(&folder_id).is_some());
        let all_ids: Vec<String> = reloaded
            .files_in(None)
            .into_iter()
            .chain(reloaded.files_in(Some(&folder_id)))
            .map(|f| f.id)
            .collect();
        assert_eq!(all_ids, file_ids);
        assert_eq!(reloaded.files_in(None)[0].tags, vec!["logo".to_string()]);
    }

    #[test]
    fn test_reload_from_sqlite_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atelier.db");
        let note_id = {
            let store: SharedStore = Arc::new(SqliteStore::open(&path).unwrap());
            let mut repo = ArchiveRepository::load(store);
            repo.create_note("persisted", "across opens", None).unwrap().id
        };
        let store: SharedStore = Arc::new(SqliteStore::open(&path).unwrap());
        let repo = ArchiveRepository::load(store);
        let notes = repo.notes_in(None);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, note_id);
    }

    #[test]
    fn test_malformed_collection_falls_back_to_empty() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        store.set("archive_folders", "not json at all").unwrap();
        store.set("archive_notes", "{\"wrong\":\"shape\"}").unwrap();
        let repo = ArchiveRepository::load(store);
        assert_eq!(repo.counts().folders, 0);
        assert_eq!(repo.counts().notes, 0);
    }

    #[test]
    fn test_full_store_keeps_memory_state() {
        // Tiny quota: loads fine, writes fail, memory still serves
        let store: SharedStore = Arc::new(MemoryStore::with_quota(4));
        let mut repo = ArchiveRepository::load(store);
        let folder = repo.create_folder("Big", None, None).unwrap();
        assert!(repo.folder_by_id(&folder.id).is_some());
    }

    // --- Navigation ---

    #[test]
    fn test_open_folder_records_history_with_adjacent_dedup() {
        let mut repo = setup();
        let a = repo.create_folder("A", None, None).unwrap();
        let b = repo.create_folder("B", None, None).unwrap();

        repo.open_folder(Some(a.id.clone())).unwrap();
        repo.open_folder(Some(a.id.clone())).unwrap(); // dedup: still one entry
        repo.open_folder(Some(b.id.clone())).unwrap();
        repo.open_folder(Some(a.id.clone())).unwrap(); // revisit counts again

        let visited: Vec<Option<String>> = repo
            .history()
            .iter()
            .map(|h| h.folder_id.clone())
            .collect();
        assert_eq!(
            visited,
            vec![
                Some(a.id.clone()),
                Some(b.id.clone()),
                Some(a.id.clone())
            ]
        );
        assert_eq!(repo.history()[0].label, "A");
    }

    #[test]
    fn test_history_is_capped() {
        let mut repo = setup();
        for i in 0..15 {
            let folder = repo.create_folder(&format!("F{}", i), None, None).unwrap();
            repo.open_folder(Some(folder.id)).unwrap();
        }
        assert_eq!(repo.history().len(), crate::repository::HISTORY_LIMIT);
        assert_eq!(repo.history()[0].label, "F14");
    }

    #[test]
    fn test_current_folder_and_view_mode_persist() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let folder_id = {
            let mut repo = ArchiveRepository::load(store.clone());
            let folder = repo.create_folder("Current", None, None).unwrap();
            repo.open_folder(Some(folder.id.clone())).unwrap();
            repo.set_view_mode(ViewMode::List);
            folder.id
        };
        let repo = ArchiveRepository::load(store);
        assert_eq!(repo.current_folder(), Some(folder_id.as_str()));
        assert_eq!(repo.view_mode(), ViewMode::List);
        // History is per-session
        assert!(repo.history().is_empty());
    }
}
