//! Atelier Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - services: Remote generative-text collaborator
//! - commands: UI-facing command handlers
//!
//! The UI shell owns rendering and event wiring; everything below the shell
//! goes through [`AppState`] and the `commands` functions.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;

pub mod commands;
pub mod domain;
pub mod repository;
pub mod services;
pub mod styles;

use domain::{DeleteGate, DomainResult};
use repository::{
    ArchiveRepository, CharacterRepository, FinanceRepository, ResumeRepository,
    SettingsRepository, SharedStore, SqliteStore,
};
use services::{GeminiClient, GenerativeService};

/// Application state shared across commands
pub struct AppState {
    pub archive: Mutex<ArchiveRepository>,
    pub finance: Mutex<FinanceRepository>,
    pub resume: Mutex<ResumeRepository>,
    pub characters: Mutex<CharacterRepository>,
    pub settings: Mutex<SettingsRepository>,
    pub delete_gate: Mutex<DeleteGate>,
    pub generative: Arc<dyn GenerativeService>,
}

impl AppState {
    /// Rehydrate every repository from `store`
    pub fn new(store: SharedStore, generative: Arc<dyn GenerativeService>) -> Self {
        Self {
            archive: Mutex::new(ArchiveRepository::load(store.clone())),
            finance: Mutex::new(FinanceRepository::load(store.clone())),
            resume: Mutex::new(ResumeRepository::load(store.clone())),
            characters: Mutex::new(CharacterRepository::load(store.clone())),
            settings: Mutex::new(SettingsRepository::load(store)),
            delete_gate: Mutex::new(DeleteGate::new()),
            generative,
        }
    }

    /// Open the SQLite-backed state at `db_path`; the generative service key
    /// comes from the environment
    pub fn open<P: AsRef<Path>>(db_path: P) -> DomainResult<Self> {
        let store: SharedStore = Arc::new(SqliteStore::open(db_path)?);
        Ok(Self::new(store, Arc::new(GeminiClient::from_env())))
    }
}
