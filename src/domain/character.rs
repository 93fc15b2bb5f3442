//! Character Entity
//!
//! A chat persona for the character studio, plus the chat message shape.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A saved chat persona
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier
    pub id: String,
    pub name: String,
    /// Avatar image (URL or data URI)
    pub avatar: String,
    pub age: u32,
    pub job: String,
    /// Design style the persona argues from, e.g. "Swiss", "Minimal"
    pub style: String,
    /// Tone of voice, e.g. "Formal", "Friendly"
    pub tone: String,
    pub traits: Vec<String>,
    pub bio: String,
}

impl Entity for Character {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// One message in a character's chat log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    /// Unix epoch milliseconds
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&ChatRole::Model).unwrap(), "\"model\"");
        assert_eq!(ChatRole::User.as_str(), "user");
    }
}
