//! Commands for the Dashboard
//!
//! Quick stats across the stores plus the assistant's search and news feeds.

use serde::Serialize;

use crate::repository::ArchiveCounts;
use crate::services::{NewsItem, SearchResult};
use crate::AppState;

/// Everything the home screen shows at a glance
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub archive: ArchiveCounts,
    pub characters: usize,
    pub transactions: usize,
}

pub async fn overview(state: &AppState) -> Result<Overview, String> {
    let archive = state.archive.lock().await.counts();
    let characters = state.characters.lock().await.characters().len();
    let transactions = state.finance.lock().await.transactions().len();
    Ok(Overview {
        archive,
        characters,
        transactions,
    })
}

/// Grounded answer to a design question
pub async fn smart_search(state: &AppState, query: String) -> Result<SearchResult, String> {
    if query.trim().is_empty() {
        return Err("query is empty".to_string());
    }
    Ok(state.generative.smart_search(&query).await)
}

/// Up to three recent design-news stories (empty on failure)
pub async fn design_news(state: &AppState) -> Result<Vec<NewsItem>, String> {
    Ok(state.generative.design_news().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create_folder, create_note};
    use crate::repository::MemoryStore;
    use crate::services::testing::CannedService;
    use std::sync::Arc;

    fn setup() -> AppState {
        AppState::new(Arc::new(MemoryStore::new()), Arc::new(CannedService::default()))
    }

    #[tokio::test]
    async fn test_overview_counts() {
        let state = setup();
        create_folder(&state, "A".into(), None, None).await.unwrap();
        create_note(&state, "n".into(), "".into(), None).await.unwrap();

        let stats = overview(&state).await.unwrap();
        assert_eq!(stats.archive.folders, 1);
        assert_eq!(stats.archive.notes, 1);
        // Two seeded personas
        assert_eq!(stats.characters, 2);
        assert_eq!(stats.transactions, 0);
    }

    #[tokio::test]
    async fn test_blank_search_is_rejected() {
        let state = setup();
        assert!(smart_search(&state, "  ".into()).await.is_err());
    }
}
