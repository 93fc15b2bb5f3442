//! Archive Repository - Core CRUD Operations
//!
//! Single source of truth for the seven archive collections. Every mutation
//! updates memory first, then writes the affected collection back to the
//! key-value store. A failed write is logged and the in-memory state keeps
//! serving; the store is reloaded wholesale on the next start.
//!
//! Specialized operations live in sibling modules:
//! - folder_hierarchy: breadcrumbs and descendant closure
//! - folder_cascade: recursive folder deletion
//! - navigation: current folder, view mode, visit history

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{
    Brief, BriefPatch, DomainError, DomainResult, FileAsset, Folder, LinkItem, Moodboard,
    MoodboardImage, Note, Task, DEFAULT_FOLDER_COLOR,
};

use super::super::ids::{next_id, now_millis, today};
use super::super::remove_by_id;
use super::super::traits::SharedStore;
use super::super::uploads::FileUpload;
use super::navigation::{HistoryEntry, ViewMode};

pub const KEY_FOLDERS: &str = "archive_folders";
pub const KEY_FILES: &str = "archive_files";
pub const KEY_NOTES: &str = "archive_notes";
pub const KEY_TASKS: &str = "archive_tasks";
pub const KEY_LINKS: &str = "archive_links";
pub const KEY_MOODBOARDS: &str = "archive_moodboards";
pub const KEY_BRIEFS: &str = "archive_briefs";
pub const KEY_CURRENT_FOLDER: &str = "archive_current_folder";
pub const KEY_VIEW_MODE: &str = "archive_view_mode";

/// Per-collection counts for the dashboard overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchiveCounts {
    pub folders: usize,
    pub files: usize,
    pub notes: usize,
    pub tasks: usize,
    pub links: usize,
    pub moodboards: usize,
    pub briefs: usize,
}

/// Store-backed archive state
pub struct ArchiveRepository {
    store: SharedStore,
    pub(super) folders: Vec<Folder>,
    pub(super) files: Vec<FileAsset>,
    pub(super) notes: Vec<Note>,
    pub(super) tasks: Vec<Task>,
    pub(super) links: Vec<LinkItem>,
    pub(super) moodboards: Vec<Moodboard>,
    pub(super) briefs: Vec<Brief>,
    pub(super) current_folder: Option<String>,
    pub(super) view_mode: ViewMode,
    pub(super) history: Vec<HistoryEntry>,
}

impl ArchiveRepository {
    /// Rehydrate the archive from the store. Missing keys yield empty
    /// collections; malformed values are logged and treated as missing.
    pub fn load(store: SharedStore) -> Self {
        let folders = load_json(&store, KEY_FOLDERS, Vec::new());
        let files = load_json(&store, KEY_FILES, Vec::new());
        let notes = load_json(&store, KEY_NOTES, Vec::new());
        let tasks = load_json(&store, KEY_TASKS, Vec::new());
        let links = load_json(&store, KEY_LINKS, Vec::new());
        let moodboards = load_json(&store, KEY_MOODBOARDS, Vec::new());
        let briefs = load_json(&store, KEY_BRIEFS, Vec::new());
        let current_folder = load_json(&store, KEY_CURRENT_FOLDER, None);
        let view_mode = load_json(&store, KEY_VIEW_MODE, ViewMode::default());

        Self {
            store,
            folders,
            files,
            notes,
            tasks,
            links,
            moodboards,
            briefs,
            current_folder,
            view_mode,
            history: Vec::new(),
        }
    }

    // --- Folders ---

    pub fn create_folder(
        &mut self,
        name: &str,
        color: Option<String>,
        parent_id: Option<String>,
    ) -> DomainResult<Folder> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("folder name is required".into()));
        }
        let folder = Folder::new(
            next_id(),
            name.to_string(),
            color.unwrap_or_else(|| DEFAULT_FOLDER_COLOR.to_string()),
            parent_id,
        );
        self.folders.push(folder.clone());
        self.persist_folders();
        Ok(folder)
    }

    pub fn update_folder(
        &mut self,
        id: &str,
        name: Option<String>,
        color: Option<String>,
    ) -> DomainResult<Folder> {
        if let Some(name) = &name {
            if name.trim().is_empty() {
                return Err(DomainError::InvalidInput("folder name is required".into()));
            }
        }
        let folder = self
            .folders
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("folder {} not found", id)))?;
        if let Some(name) = name {
            folder.name = name.trim().to_string();
        }
        if let Some(color) = color {
            folder.color = color;
        }
        let updated = folder.clone();
        self.persist_folders();
        Ok(updated)
    }

    pub fn folder_by_id(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    /// Direct children of `parent` only; `None` lists root-level folders
    pub fn folders_in(&self, parent: Option<&str>) -> Vec<Folder> {
        self.folders
            .iter()
            .filter(|f| f.parent_id.as_deref() == parent)
            .cloned()
            .collect()
    }

    // --- Files ---

    /// Register an upload as an archived file. The content travels inline as
    /// a data URI; images also get an inline thumbnail.
    pub fn register_file(
        &mut self,
        upload: FileUpload,
        tags: Vec<String>,
        folder_id: Option<String>,
    ) -> DomainResult<FileAsset> {
        upload.ensure_within_cap()?;
        let mime = upload.resolved_mime();
        let data_uri = upload.data_uri();
        let file = FileAsset {
            id: next_id(),
            folder_id,
            name: upload.name.clone(),
            size: upload.display_size(),
            tags,
            upload_date: today(),
            thumbnail: mime.starts_with("image/").then(|| data_uri.clone()),
            url: Some(data_uri),
            mime,
        };
        self.files.push(file.clone());
        self.persist_files();
        Ok(file)
    }

    pub fn update_file(
        &mut self,
        id: &str,
        name: Option<String>,
        tags: Option<Vec<String>>,
    ) -> DomainResult<FileAsset> {
        let file = self
            .files
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("file {} not found", id)))?;
        if let Some(name) = name {
            file.name = name;
        }
        if let Some(tags) = tags {
            file.tags = tags;
        }
        let updated = file.clone();
        self.persist_files();
        Ok(updated)
    }

    /// Move `dragged_id` so it sits just before `target_id` (list reorder).
    /// A drop on itself or on an unknown target changes nothing.
    pub fn reorder_file(&mut self, dragged_id: &str, target_id: &str) -> DomainResult<()> {
        if dragged_id == target_id {
            return Ok(());
        }
        let Some(from) = self.files.iter().position(|f| f.id == dragged_id) else {
            return Err(DomainError::NotFound(format!("file {} not found", dragged_id)));
        };
        let dragged = self.files.remove(from);
        match self.files.iter().position(|f| f.id == target_id) {
            Some(to) => {
                self.files.insert(to, dragged);
                self.persist_files();
                Ok(())
            }
            None => {
                // Unknown target: put the file back where it was
                self.files.insert(from, dragged);
                Err(DomainError::NotFound(format!("file {} not found", target_id)))
            }
        }
    }

    pub fn files_in(&self, folder: Option<&str>) -> Vec<FileAsset> {
        self.files
            .iter()
            .filter(|f| f.folder_id.as_deref() == folder)
            .cloned()
            .collect()
    }

    pub fn delete_file(&mut self, id: &str) -> DomainResult<()> {
        if !remove_by_id(&mut self.files, id) {
            return Err(DomainError::NotFound(format!("file {} not found", id)));
        }
        self.persist_files();
        Ok(())
    }

    // --- Notes ---

    pub fn create_note(
        &mut self,
        title: &str,
        content: &str,
        folder_id: Option<String>,
    ) -> DomainResult<Note> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::InvalidInput("note title is required".into()));
        }
        let note = Note {
            id: next_id(),
            folder_id,
            title: title.to_string(),
            content: content.to_string(),
            date: today(),
        };
        self.notes.insert(0, note.clone());
        self.persist_notes();
        Ok(note)
    }

    pub fn update_note(
        &mut self,
        id: &str,
        title: Option<String>,
        content: Option<String>,
    ) -> DomainResult<Note> {
        if let Some(title) = &title {
            if title.trim().is_empty() {
                return Err(DomainError::InvalidInput("note title is required".into()));
            }
        }
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("note {} not found", id)))?;
        if let Some(title) = title {
            note.title = title.trim().to_string();
        }
        if let Some(content) = content {
            note.content = content;
        }
        let updated = note.clone();
        self.persist_notes();
        Ok(updated)
    }

    pub fn notes_in(&self, folder: Option<&str>) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|n| n.folder_id.as_deref() == folder)
            .cloned()
            .collect()
    }

    pub fn delete_note(&mut self, id: &str) -> DomainResult<()> {
        if !remove_by_id(&mut self.notes, id) {
            return Err(DomainError::NotFound(format!("note {} not found", id)));
        }
        self.persist_notes();
        Ok(())
    }

    // --- Tasks ---

    pub fn create_task(&mut self, text: &str, folder_id: Option<String>) -> DomainResult<Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::InvalidInput("task text is required".into()));
        }
        let task = Task {
            id: next_id(),
            folder_id,
            text: text.to_string(),
            is_completed: false,
        };
        self.tasks.insert(0, task.clone());
        self.persist_tasks();
        Ok(task)
    }

    pub fn update_task(&mut self, id: &str, text: Option<String>) -> DomainResult<Task> {
        if let Some(text) = &text {
            if text.trim().is_empty() {
                return Err(DomainError::InvalidInput("task text is required".into()));
            }
        }
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("task {} not found", id)))?;
        if let Some(text) = text {
            task.text = text.trim().to_string();
        }
        let updated = task.clone();
        self.persist_tasks();
        Ok(updated)
    }

    pub fn toggle_task(&mut self, id: &str) -> DomainResult<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("task {} not found", id)))?;
        task.is_completed = !task.is_completed;
        let updated = task.clone();
        self.persist_tasks();
        Ok(updated)
    }

    pub fn tasks_in(&self, folder: Option<&str>) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.folder_id.as_deref() == folder)
            .cloned()
            .collect()
    }

    pub fn delete_task(&mut self, id: &str) -> DomainResult<()> {
        if !remove_by_id(&mut self.tasks, id) {
            return Err(DomainError::NotFound(format!("task {} not found", id)));
        }
        self.persist_tasks();
        Ok(())
    }

    // --- Links ---

    pub fn create_link(
        &mut self,
        title: &str,
        url: &str,
        folder_id: Option<String>,
    ) -> DomainResult<LinkItem> {
        let title = title.trim();
        let url = url.trim();
        if title.is_empty() || url.is_empty() {
            return Err(DomainError::InvalidInput(
                "link title and url are required".into(),
            ));
        }
        let link = LinkItem {
            id: next_id(),
            folder_id,
            title: title.to_string(),
            url: url.to_string(),
        };
        self.links.insert(0, link.clone());
        self.persist_links();
        Ok(link)
    }

    pub fn update_link(
        &mut self,
        id: &str,
        title: Option<String>,
        url: Option<String>,
    ) -> DomainResult<LinkItem> {
        if title.as_deref().map(str::trim) == Some("") || url.as_deref().map(str::trim) == Some("") {
            return Err(DomainError::InvalidInput(
                "link title and url are required".into(),
            ));
        }
        let link = self
            .links
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("link {} not found", id)))?;
        if let Some(title) = title {
            link.title = title.trim().to_string();
        }
        if let Some(url) = url {
            link.url = url.trim().to_string();
        }
        let updated = link.clone();
        self.persist_links();
        Ok(updated)
    }

    pub fn links_in(&self, folder: Option<&str>) -> Vec<LinkItem> {
        self.links
            .iter()
            .filter(|l| l.folder_id.as_deref() == folder)
            .cloned()
            .collect()
    }

    pub fn delete_link(&mut self, id: &str) -> DomainResult<()> {
        if !remove_by_id(&mut self.links, id) {
            return Err(DomainError::NotFound(format!("link {} not found", id)));
        }
        self.persist_links();
        Ok(())
    }

    // --- Moodboards ---

    pub fn create_moodboard(
        &mut self,
        title: &str,
        images: Vec<MoodboardImage>,
        folder_id: Option<String>,
    ) -> DomainResult<Moodboard> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::InvalidInput("moodboard title is required".into()));
        }
        let board = Moodboard {
            id: next_id(),
            folder_id,
            title: title.to_string(),
            images,
        };
        self.moodboards.insert(0, board.clone());
        self.persist_moodboards();
        Ok(board)
    }

    pub fn update_moodboard(
        &mut self,
        id: &str,
        title: Option<String>,
        images: Option<Vec<MoodboardImage>>,
    ) -> DomainResult<Moodboard> {
        if title.as_deref().map(str::trim) == Some("") {
            return Err(DomainError::InvalidInput("moodboard title is required".into()));
        }
        let board = self
            .moodboards
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("moodboard {} not found", id)))?;
        if let Some(title) = title {
            board.title = title.trim().to_string();
        }
        if let Some(images) = images {
            board.images = images;
        }
        let updated = board.clone();
        self.persist_moodboards();
        Ok(updated)
    }

    pub fn add_moodboard_image(
        &mut self,
        board_id: &str,
        data_uri: String,
    ) -> DomainResult<MoodboardImage> {
        let board = self
            .moodboards
            .iter_mut()
            .find(|m| m.id == board_id)
            .ok_or_else(|| DomainError::NotFound(format!("moodboard {} not found", board_id)))?;
        let image = MoodboardImage {
            id: next_id(),
            url: data_uri,
        };
        board.images.push(image.clone());
        self.persist_moodboards();
        Ok(image)
    }

    pub fn remove_moodboard_image(&mut self, board_id: &str, image_id: &str) -> DomainResult<()> {
        let board = self
            .moodboards
            .iter_mut()
            .find(|m| m.id == board_id)
            .ok_or_else(|| DomainError::NotFound(format!("moodboard {} not found", board_id)))?;
        let before = board.images.len();
        board.images.retain(|img| img.id != image_id);
        if board.images.len() == before {
            return Err(DomainError::NotFound(format!(
                "image {} not found on moodboard {}",
                image_id, board_id
            )));
        }
        self.persist_moodboards();
        Ok(())
    }

    pub fn moodboards_in(&self, folder: Option<&str>) -> Vec<Moodboard> {
        self.moodboards
            .iter()
            .filter(|m| m.folder_id.as_deref() == folder)
            .cloned()
            .collect()
    }

    pub fn delete_moodboard(&mut self, id: &str) -> DomainResult<()> {
        if !remove_by_id(&mut self.moodboards, id) {
            return Err(DomainError::NotFound(format!("moodboard {} not found", id)));
        }
        self.persist_moodboards();
        Ok(())
    }

    // --- Briefs ---

    pub fn create_brief(
        &mut self,
        patch: BriefPatch,
        folder_id: Option<String>,
    ) -> DomainResult<Brief> {
        let title = patch.title.as_deref().map(str::trim).unwrap_or_default();
        if title.is_empty() {
            return Err(DomainError::InvalidInput("brief title is required".into()));
        }
        let brief = Brief {
            id: next_id(),
            folder_id,
            title: title.to_string(),
            client: patch.client.unwrap_or_default(),
            start_date: patch.start_date.unwrap_or_default(),
            deadline: patch.deadline.unwrap_or_default(),
            objective: patch.objective.unwrap_or_default(),
            target_audience: patch.target_audience.unwrap_or_default(),
            deliverables: patch.deliverables.unwrap_or_default(),
            preferences: patch.preferences.unwrap_or_default(),
            references: patch.references.unwrap_or_default(),
            tags: patch.tags.unwrap_or_default(),
            is_pinned: false,
            version: 1,
            last_modified: now_millis(),
        };
        self.briefs.insert(0, brief.clone());
        self.persist_briefs();
        Ok(brief)
    }

    /// Merge `patch` into an existing brief. Every edit bumps the version by
    /// exactly one and refreshes `last_modified`.
    pub fn update_brief(&mut self, id: &str, patch: BriefPatch) -> DomainResult<Brief> {
        if patch.title.as_deref().map(str::trim) == Some("") {
            return Err(DomainError::InvalidInput("brief title is required".into()));
        }
        let brief = self
            .briefs
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("brief {} not found", id)))?;
        if let Some(title) = patch.title {
            brief.title = title.trim().to_string();
        }
        if let Some(client) = patch.client {
            brief.client = client;
        }
        if let Some(start_date) = patch.start_date {
            brief.start_date = start_date;
        }
        if let Some(deadline) = patch.deadline {
            brief.deadline = deadline;
        }
        if let Some(objective) = patch.objective {
            brief.objective = objective;
        }
        if let Some(target_audience) = patch.target_audience {
            brief.target_audience = target_audience;
        }
        if let Some(deliverables) = patch.deliverables {
            brief.deliverables = deliverables;
        }
        if let Some(preferences) = patch.preferences {
            brief.preferences = preferences;
        }
        if let Some(references) = patch.references {
            brief.references = references;
        }
        if let Some(tags) = patch.tags {
            brief.tags = tags;
        }
        brief.version += 1;
        brief.last_modified = now_millis();
        let updated = brief.clone();
        self.persist_briefs();
        Ok(updated)
    }

    /// Flip the pin flag; returns the new state
    pub fn toggle_pin_brief(&mut self, id: &str) -> DomainResult<bool> {
        let brief = self
            .briefs
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("brief {} not found", id)))?;
        brief.is_pinned = !brief.is_pinned;
        let pinned = brief.is_pinned;
        self.persist_briefs();
        Ok(pinned)
    }

    /// Briefs in `folder`, pinned ones first (stable within each group)
    pub fn briefs_in(&self, folder: Option<&str>) -> Vec<Brief> {
        let mut briefs: Vec<Brief> = self
            .briefs
            .iter()
            .filter(|b| b.folder_id.as_deref() == folder)
            .cloned()
            .collect();
        briefs.sort_by_key(|b| !b.is_pinned);
        briefs
    }

    pub fn delete_brief(&mut self, id: &str) -> DomainResult<()> {
        if !remove_by_id(&mut self.briefs, id) {
            return Err(DomainError::NotFound(format!("brief {} not found", id)));
        }
        self.persist_briefs();
        Ok(())
    }

    // --- Overview ---

    pub fn counts(&self) -> ArchiveCounts {
        ArchiveCounts {
            folders: self.folders.len(),
            files: self.files.len(),
            notes: self.notes.len(),
            tasks: self.tasks.len(),
            links: self.links.len(),
            moodboards: self.moodboards.len(),
            briefs: self.briefs.len(),
        }
    }

    // --- Persistence ---

    pub(super) fn persist_folders(&self) {
        self.persist(KEY_FOLDERS, &self.folders);
    }

    pub(super) fn persist_files(&self) {
        self.persist(KEY_FILES, &self.files);
    }

    pub(super) fn persist_notes(&self) {
        self.persist(KEY_NOTES, &self.notes);
    }

    pub(super) fn persist_tasks(&self) {
        self.persist(KEY_TASKS, &self.tasks);
    }

    pub(super) fn persist_links(&self) {
        self.persist(KEY_LINKS, &self.links);
    }

    pub(super) fn persist_moodboards(&self) {
        self.persist(KEY_MOODBOARDS, &self.moodboards);
    }

    pub(super) fn persist_briefs(&self) {
        self.persist(KEY_BRIEFS, &self.briefs);
    }

    /// Write one value to the store. Failures are non-fatal: memory stays
    /// authoritative and the error is logged.
    pub(super) fn persist<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => {
                if let Err(e) = self.store.set(key, &json) {
                    warn!("failed to persist '{}', keeping in-memory state: {}", key, e);
                }
            }
            Err(e) => warn!("failed to serialize '{}': {}", key, e),
        }
    }
}

/// Read and decode one value, falling back to `default` on a missing key,
/// unreadable store, or malformed JSON.
fn load_json<T: DeserializeOwned>(store: &SharedStore, key: &str, default: T) -> T {
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("malformed value under '{}', using default: {}", key, e);
                default
            }
        },
        Ok(None) => default,
        Err(e) => {
            warn!("failed to read '{}', using default: {}", key, e);
            default
        }
    }
}
