//! Delete Confirmation Gate
//!
//! Every destructive archive action passes through a confirmation step: a
//! request parks the target here, and only an explicit confirm releases it
//! for deletion. Cancelling discards the pending target without mutation.

use serde::{Deserialize, Serialize};

/// What kind of archive entity a delete request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteKind {
    Folder,
    File,
    Note,
    Task,
    Link,
    Moodboard,
    Brief,
}

impl DeleteKind {
    /// Label used in the confirmation prompt
    pub fn label(&self) -> &'static str {
        match self {
            DeleteKind::Folder => "folder",
            DeleteKind::File => "file",
            DeleteKind::Note => "note",
            DeleteKind::Task => "task",
            DeleteKind::Link => "link",
            DeleteKind::Moodboard => "moodboard",
            DeleteKind::Brief => "brief",
        }
    }
}

/// A delete waiting for user confirmation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingDelete {
    pub kind: DeleteKind,
    pub id: String,
    /// Display name shown in the prompt, when the caller knows it
    pub name: Option<String>,
}

impl PendingDelete {
    /// Human-readable prompt for the confirmation dialog
    pub fn prompt(&self) -> String {
        match &self.name {
            Some(name) => format!("Delete {} \"{}\"?", self.kind.label(), name),
            None => format!("Delete this {}?", self.kind.label()),
        }
    }
}

/// Idle/pending state machine guarding destructive actions
#[derive(Debug, Default)]
pub struct DeleteGate {
    pending: Option<PendingDelete>,
}

impl DeleteGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park a delete target. A newer request replaces a pending one.
    pub fn request(&mut self, kind: DeleteKind, id: String, name: Option<String>) {
        self.pending = Some(PendingDelete { kind, id, name });
    }

    /// The request currently awaiting confirmation, if any
    pub fn pending(&self) -> Option<&PendingDelete> {
        self.pending.as_ref()
    }

    /// Confirm: hand the pending target to the caller and return to idle
    pub fn confirm(&mut self) -> Option<PendingDelete> {
        self.pending.take()
    }

    /// Cancel: drop the pending target without mutation
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_releases_target() {
        let mut gate = DeleteGate::new();
        gate.request(DeleteKind::Folder, "1".into(), Some("Logos".into()));
        assert!(gate.pending().is_some());

        let released = gate.confirm().unwrap();
        assert_eq!(released.kind, DeleteKind::Folder);
        assert_eq!(released.id, "1");
        assert!(gate.pending().is_none());
    }

    #[test]
    fn test_cancel_discards_target() {
        let mut gate = DeleteGate::new();
        gate.request(DeleteKind::Note, "n1".into(), None);
        gate.cancel();
        assert!(gate.pending().is_none());
        assert!(gate.confirm().is_none());
    }

    #[test]
    fn test_newer_request_replaces_pending() {
        let mut gate = DeleteGate::new();
        gate.request(DeleteKind::Task, "t1".into(), None);
        gate.request(DeleteKind::Brief, "b1".into(), Some("Rebrand".into()));
        let released = gate.confirm().unwrap();
        assert_eq!(released.kind, DeleteKind::Brief);
        assert_eq!(released.id, "b1");
    }

    #[test]
    fn test_prompt_includes_name() {
        let pending = PendingDelete {
            kind: DeleteKind::Moodboard,
            id: "m1".into(),
            name: Some("Spring palette".into()),
        };
        assert_eq!(pending.prompt(), "Delete moodboard \"Spring palette\"?");
    }
}
