//! Commands for Brief CRUD + AI Assist
//!
//! Briefs are versioned: the repository bumps `version` on every update.
//! The assist call drafts the long-form fields from the title and client.

use crate::domain::{Brief, BriefPatch, BriefReference};
use crate::repository::FileUpload;
use crate::services::BriefAssist;
use crate::AppState;

pub async fn create_brief(
    state: &AppState,
    patch: BriefPatch,
    folder_id: Option<String>,
) -> Result<Brief, String> {
    let mut archive = state.archive.lock().await;
    archive
        .create_brief(patch, folder_id)
        .map_err(|e| e.to_string())
}

pub async fn update_brief(
    state: &AppState,
    id: String,
    patch: BriefPatch,
) -> Result<Brief, String> {
    let mut archive = state.archive.lock().await;
    archive.update_brief(&id, patch).map_err(|e| e.to_string())
}

/// Flip a brief's pin; pinned briefs list first
pub async fn toggle_pin_brief(state: &AppState, id: String) -> Result<bool, String> {
    let mut archive = state.archive.lock().await;
    archive.toggle_pin_brief(&id).map_err(|e| e.to_string())
}

pub async fn list_briefs(
    state: &AppState,
    folder_id: Option<String>,
) -> Result<Vec<Brief>, String> {
    let archive = state.archive.lock().await;
    Ok(archive.briefs_in(folder_id.as_deref()))
}

/// Draft objective/audience/deliverables/preferences for the form.
/// Returns None when the service has nothing usable.
pub async fn brief_ai_assist(
    state: &AppState,
    title: String,
    client: String,
) -> Result<Option<BriefAssist>, String> {
    if title.trim().is_empty() || client.trim().is_empty() {
        return Err("enter the project title and client name first".to_string());
    }
    Ok(state.generative.brief_assist(&title, &client).await)
}

/// Turn an uploaded file into a brief attachment (same size cap as files)
pub fn build_brief_reference(
    name: String,
    mime: Option<String>,
    bytes: Vec<u8>,
) -> Result<BriefReference, String> {
    FileUpload::new(name, mime, bytes)
        .into_brief_reference()
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;
    use crate::services::testing::CannedService;
    use std::sync::Arc;

    fn setup() -> AppState {
        AppState::new(Arc::new(MemoryStore::new()), Arc::new(CannedService::default()))
    }

    #[tokio::test]
    async fn test_assist_requires_title_and_client() {
        let state = setup();
        assert!(brief_ai_assist(&state, "".into(), "Acme".into()).await.is_err());
        let assist = brief_ai_assist(&state, "Rebrand".into(), "Acme".into())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(assist.objective, "Refresh the identity");
    }

    #[tokio::test]
    async fn test_create_then_edit_bumps_version() {
        let state = setup();
        let brief = create_brief(
            &state,
            BriefPatch {
                title: Some("Rebrand".into()),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
        let updated = update_brief(
            &state,
            brief.id,
            BriefPatch {
                deadline: Some("1403/05/01".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.version, 2);
        assert_eq!(updated.deadline, "1403/05/01");
    }
}
