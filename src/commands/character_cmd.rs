//! Commands for the Character Studio
//!
//! Persona CRUD plus the chat loop. A failed remote reply becomes a static
//! in-character apology rather than an error.

use crate::domain::{Character, ChatMessage, ChatRole};
use crate::repository::CharacterPatch;
use crate::AppState;

pub async fn list_characters(state: &AppState) -> Result<Vec<Character>, String> {
    let characters = state.characters.lock().await;
    Ok(characters.characters().to_vec())
}

pub async fn create_character(
    state: &AppState,
    patch: CharacterPatch,
) -> Result<Character, String> {
    let mut characters = state.characters.lock().await;
    characters.create_character(patch).map_err(|e| e.to_string())
}

pub async fn update_character(
    state: &AppState,
    id: String,
    patch: CharacterPatch,
) -> Result<Character, String> {
    let mut characters = state.characters.lock().await;
    characters
        .update_character(&id, patch)
        .map_err(|e| e.to_string())
}

/// Remove a persona and its chat log
pub async fn delete_character(state: &AppState, id: String) -> Result<(), String> {
    let mut characters = state.characters.lock().await;
    characters.delete_character(&id).map_err(|e| e.to_string())
}

/// Chat log for one persona, oldest first
pub async fn chat_log(state: &AppState, character_id: String) -> Result<Vec<ChatMessage>, String> {
    let characters = state.characters.lock().await;
    Ok(characters.chat_log(&character_id).to_vec())
}

/// Send one user message and append the persona's reply.
/// Returns the reply message.
pub async fn send_chat_message(
    state: &AppState,
    character_id: String,
    message: String,
) -> Result<ChatMessage, String> {
    if message.trim().is_empty() {
        return Err("message is empty".to_string());
    }

    // Snapshot the persona and prior history, then record the user turn
    let (character, history) = {
        let mut characters = state.characters.lock().await;
        let character = characters
            .character_by_id(&character_id)
            .cloned()
            .ok_or_else(|| format!("character {} not found", character_id))?;
        let history = characters.chat_log(&character_id).to_vec();
        characters
            .append_message(&character_id, ChatRole::User, message.clone())
            .map_err(|e| e.to_string())?;
        (character, history)
    };

    // The reply is generated from the history *before* this message, plus
    // the message itself, and is best-effort by contract
    let reply = state
        .generative
        .chat_reply(&character, &history, &message)
        .await;

    let mut characters = state.characters.lock().await;
    characters
        .append_message(&character_id, ChatRole::Model, reply)
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
    async fn test_chat_appends_both_turns() {
        let state = setup();
        let persona = list_characters(&state).await.unwrap().remove(0);

        let reply = send_chat_message(&state, persona.id.clone(), "Rate my logo".into())
            .await
            .unwrap();
        assert_eq!(reply.role, ChatRole::Model);
        assert_eq!(reply.text, "As a veteran, I would simplify the mark.");

        let log = chat_log(&state, persona.id).await.unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].role, ChatRole::User);
        assert_eq!(log[1].role, ChatRole::Model);
    }

    #[tokio::test]
    async fn test_empty_message_is_rejected() {
        let state = setup();
        let persona = list_characters(&state).await.unwrap().remove(0);
        assert!(send_chat_message(&state, persona.id, "   ".into()).await.is_err());
    }
}
