//! Character Repository
//!
//! Saved chat personas and their per-character chat logs. A fresh store is
//! seeded with two built-in personas so the studio is never empty.

use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::domain::{Character, ChatMessage, ChatRole, DomainError, DomainResult};

use super::ids::{next_id, now_millis};
use super::traits::SharedStore;

pub const KEY_CHARACTERS: &str = "saved_characters";
pub const KEY_CHAT_HISTORY: &str = "chat_history";

/// Editable persona fields; `None` keeps the existing value on update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterPatch {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub age: Option<u32>,
    pub job: Option<String>,
    pub style: Option<String>,
    pub tone: Option<String>,
    pub traits: Option<Vec<String>>,
    pub bio: Option<String>,
}

/// Store-backed persona collection + chat logs
pub struct CharacterRepository {
    store: SharedStore,
    characters: Vec<Character>,
    chats: HashMap<String, Vec<ChatMessage>>,
}

impl CharacterRepository {
    pub fn load(store: SharedStore) -> Self {
        let characters = match store.get(KEY_CHARACTERS) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("malformed value under '{}', using defaults: {}", KEY_CHARACTERS, e);
                default_characters()
            }),
            Ok(None) => default_characters(),
            Err(e) => {
                warn!("failed to read '{}', using defaults: {}", KEY_CHARACTERS, e);
                default_characters()
            }
        };
        let chats = match store.get(KEY_CHAT_HISTORY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("malformed value under '{}', starting empty: {}", KEY_CHAT_HISTORY, e);
                HashMap::new()
            }),
            Ok(None) => HashMap::new(),
            Err(e) => {
                warn!("failed to read '{}', starting empty: {}", KEY_CHAT_HISTORY, e);
                HashMap::new()
            }
        };
        Self {
            store,
            characters,
            chats,
        }
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn character_by_id(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn create_character(&mut self, patch: CharacterPatch) -> DomainResult<Character> {
        let name = patch.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("character name is required".into()));
        }
        let character = Character {
            id: next_id(),
            name: name.to_string(),
            avatar: patch
                .avatar
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| placeholder_avatar(name)),
            age: patch.age.unwrap_or(30),
            job: patch.job.unwrap_or_default(),
            style: patch.style.unwrap_or_default(),
            tone: patch.tone.unwrap_or_else(|| "Formal".to_string()),
            traits: patch.traits.unwrap_or_default(),
            bio: patch.bio.unwrap_or_default(),
        };
        self.characters.push(character.clone());
        self.persist_characters();
        Ok(character)
    }

    pub fn update_character(&mut self, id: &str, patch: CharacterPatch) -> DomainResult<Character> {
        if patch.name.as_deref().map(str::trim) == Some("") {
            return Err(DomainError::InvalidInput("character name is required".into()));
        }
        let character = self
            .characters
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("character {} not found", id)))?;
        if let Some(name) = patch.name {
            character.name = name.trim().to_string();
        }
        if let Some(avatar) = patch.avatar {
            if !avatar.is_empty() {
                character.avatar = avatar;
            }
        }
        if let Some(age) = patch.age {
            character.age = age;
        }
        if let Some(job) = patch.job {
            character.job = job;
        }
        if let Some(style) = patch.style {
            character.style = style;
        }
        if let Some(tone) = patch.tone {
            character.tone = tone;
        }
        if let Some(traits) = patch.traits {
            character.traits = traits;
        }
        if let Some(bio) = patch.bio {
            character.bio = bio;
        }
        let updated = character.clone();
        self.persist_characters();
        Ok(updated)
    }

    /// Remove a persona along with its chat log
    pub fn delete_character(&mut self, id: &str) -> DomainResult<()> {
        if !super::remove_by_id(&mut self.characters, id) {
            return Err(DomainError::NotFound(format!("character {} not found", id)));
        }
        self.chats.remove(id);
        self.persist_characters();
        self.persist_chats();
        Ok(())
    }

    /// Chat log for one character, oldest message first
    pub fn chat_log(&self, character_id: &str) -> &[ChatMessage] {
        self.chats
            .get(character_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn append_message(
        &mut self,
        character_id: &str,
        role: ChatRole,
        text: impl Into<String>,
    ) -> DomainResult<ChatMessage> {
        if self.character_by_id(character_id).is_none() {
            return Err(DomainError::NotFound(format!(
                "character {} not found",
                character_id
            )));
        }
        let message = ChatMessage {
            id: next_id(),
            role,
            text: text.into(),
            timestamp: now_millis(),
        };
        self.chats
            .entry(character_id.to_string())
            .or_default()
            .push(message.clone());
        self.persist_chats();
        Ok(message)
    }

    fn persist_characters(&self) {
        match serde_json::to_string(&self.characters) {
            Ok(json) => {
                if let Err(e) = self.store.set(KEY_CHARACTERS, &json) {
                    warn!(
                        "failed to persist '{}', keeping in-memory state: {}",
                        KEY_CHARACTERS, e
                    );
                }
            }
            Err(e) => warn!("failed to serialize '{}': {}", KEY_CHARACTERS, e),
        }
    }

    fn persist_chats(&self) {
        match serde_json::to_string(&self.chats) {
            Ok(json) => {
                if let Err(e) = self.store.set(KEY_CHAT_HISTORY, &json) {
                    warn!(
                        "failed to persist '{}', keeping in-memory state: {}",
                        KEY_CHAT_HISTORY, e
                    );
                }
            }
            Err(e) => warn!("failed to serialize '{}': {}", KEY_CHAT_HISTORY, e),
        }
    }
}

fn placeholder_avatar(name: &str) -> String {
    format!(
        "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
        name.replace(' ', "")
    )
}

fn default_characters() -> Vec<Character> {
    vec![
        Character {
            id: "1".into(),
            name: "Master Jamshid".into(),
            avatar: placeholder_avatar("Jamshid"),
            age: 55,
            job: "Veteran graphic designer".into(),
            style: "Traditional, calligraphy-driven".into(),
            tone: "Measured, formal, fatherly".into(),
            traits: vec!["precise".into(), "traditionalist".into(), "critical".into()],
            bio: "Designed logos that outlived their decade. Believes fundamentals \
                  matter more than software."
                .into(),
        },
        Character {
            id: "2".into(),
            name: "Sara".into(),
            avatar: placeholder_avatar("Sara"),
            age: 24,
            job: "UI/UX designer".into(),
            style: "Minimal and flat".into(),
            tone: "Friendly, energetic, modern".into(),
            traits: vec!["creative".into(), "current".into(), "fast".into()],
            bio: "Loves whitespace and soft gradients. Always chasing the newest \
                  Dribbble trend."
                .into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;
    use std::sync::Arc;

    fn setup() -> CharacterRepository {
        CharacterRepository::load(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_fresh_store_seeds_default_personas() {
        let repo = setup();
        assert_eq!(repo.characters().len(), 2);
    }

    #[test]
    fn test_create_requires_name() {
        let mut repo = setup();
        let err = repo.create_character(CharacterPatch::default()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_delete_clears_chat_log() {
        let mut repo = setup();
        let persona = repo
            .create_character(CharacterPatch {
                name: Some("Nima".into()),
                ..Default::default()
            })
            .unwrap();
        repo.append_message(&persona.id, ChatRole::User, "hi").unwrap();
        assert_eq!(repo.chat_log(&persona.id).len(), 1);

        repo.delete_character(&persona.id).unwrap();
        assert!(repo.chat_log(&persona.id).is_empty());
    }

    #[test]
    fn test_append_to_missing_character() {
        let mut repo = setup();
        let err = repo
            .append_message("absent", ChatRole::User, "hello")
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
