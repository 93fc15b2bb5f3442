//! Generative Text Service
//!
//! Best-effort client for the Gemini `generateContent` endpoint. Every
//! operation is total: a missing API key or a failed call yields a static
//! fallback value, never an error surfaced to the user.

use async_trait::async_trait;
use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::OnceLock;

use crate::domain::{Character, ChatMessage, ChatRole, DomainError, DomainResult};
use crate::repository::today;

const MODEL: &str = "gemini-2.5-flash";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Most news stories surfaced at once
const NEWS_LIMIT: usize = 3;

/// Suggested brief fields returned by the assistant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BriefAssist {
    pub objective: String,
    pub target_audience: String,
    pub deliverables: String,
    pub preferences: String,
}

/// A source backing a grounded search answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// Answer to a grounded search query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub answer: String,
    pub sources: Vec<GroundingSource>,
}

/// One design-news story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub source: String,
    pub summary: String,
    pub url: String,
    pub date: String,
}

/// Remote text generation behind the studio's assistant features
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// Short tags for a freshly uploaded design file
    async fn generate_tags(&self, file_name: &str) -> Vec<String>;

    /// In-character reply to `message`, given the prior conversation
    async fn chat_reply(
        &self,
        character: &Character,
        history: &[ChatMessage],
        message: &str,
    ) -> String;

    /// Draft objective/audience/deliverables/preferences for a brief
    async fn brief_assist(&self, title: &str, client: &str) -> Option<BriefAssist>;

    /// Grounded answer to a design question
    async fn smart_search(&self, query: &str) -> SearchResult;

    /// Recent design news, at most three stories
    async fn design_news(&self) -> Vec<NewsItem>;
}

/// Gemini-backed implementation
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    /// Read the key from `GEMINI_API_KEY` (or legacy `API_KEY`)
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok();
        Self::new(api_key)
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, body: Value) -> DomainResult<Value> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| DomainError::InvalidInput("API key is not configured".into()))?;
        let url = format!("{}/{}:generateContent?key={}", API_BASE, MODEL, key);
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?
            .error_for_status()
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        response
            .json::<Value>()
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))
    }
}

#[async_trait]
impl GenerativeService for GeminiClient {
    async fn generate_tags(&self, file_name: &str) -> Vec<String> {
        if !self.has_key() {
            return vec!["General".to_string(), "File".to_string()];
        }
        let prompt = format!(
            "Generate 3 short tags for a design file named: \"{}\". \
             Return ONLY comma separated words.",
            file_name
        );
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        });
        match self.generate(body).await {
            Ok(response) => {
                let tags = split_tags(&response_text(&response));
                if tags.is_empty() {
                    vec!["Graphic".to_string(), "Asset".to_string()]
                } else {
                    tags
                }
            }
            Err(e) => {
                warn!("tag generation failed, returning defaults: {}", e);
                vec!["Graphic".to_string(), "File".to_string(), "Design".to_string()]
            }
        }
    }

    async fn chat_reply(
        &self,
        character: &Character,
        history: &[ChatMessage],
        message: &str,
    ) -> String {
        if !self.has_key() {
            return "API key is not configured.".to_string();
        }
        let system = format!(
            "You are roleplaying as {name}.\n\
             Age: {age}\n\
             Job: {job}\n\
             Design Style: {style}\n\
             Personality Traits: {traits}\n\
             Tone of Voice: {tone}\n\
             Bio: {bio}\n\n\
             Your task is to act EXACTLY like this persona.\n\
             - Critique designs or give advice based on your specific 'Design Style' and 'Job'.\n\
             - Use the 'Tone of Voice' defined.\n\
             - Keep responses concise unless asked for a deep analysis.",
            name = character.name,
            age = character.age,
            job = character.job,
            style = character.style,
            traits = character.traits.join(", "),
            tone = character.tone,
            bio = character.bio,
        );

        let mut contents: Vec<Value> = history
            .iter()
            .map(|msg| {
                json!({
                    "role": msg.role.as_str(),
                    "parts": [{ "text": msg.text }],
                })
            })
            .collect();
        contents.push(json!({
            "role": ChatRole::User.as_str(),
            "parts": [{ "text": message }],
        }));

        let body = json!({
            "systemInstruction": { "parts": [{ "text": system }] },
            "contents": contents,
        });
        match self.generate(body).await {
            Ok(response) => response_text(&response),
            Err(e) => {
                warn!("character chat failed: {}", e);
                "Sorry, something went wrong while reaching this character.".to_string()
            }
        }
    }

    async fn brief_assist(&self, title: &str, client: &str) -> Option<BriefAssist> {
        if !self.has_key() {
            return None;
        }
        let prompt = format!(
            "Write a professional graphic design brief structure for a project \
             titled \"{}\" for client \"{}\".\n\
             Output ONLY a JSON object with these keys:\n\
             {{\n\
               \"objective\": \"Main goal of the design\",\n\
               \"targetAudience\": \"Who is this for?\",\n\
               \"deliverables\": \"List of typical items (Logo, Poster, etc.)\",\n\
               \"preferences\": \"Suggested style based on the client/project type\"\n\
             }}",
            title, client
        );
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseMimeType": "application/json" },
        });
        match self.generate(body).await {
            Ok(response) => serde_json::from_str(&response_text(&response))
                .map_err(|e| warn!("brief assist returned malformed JSON: {}", e))
                .ok(),
            Err(e) => {
                warn!("brief assist failed: {}", e);
                None
            }
        }
    }

    async fn smart_search(&self, query: &str) -> SearchResult {
        if !self.has_key() {
            return SearchResult {
                answer: "API key is not configured.".to_string(),
                sources: vec![],
            };
        }
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": query }] }],
            "systemInstruction": { "parts": [{ "text":
                "You are a helpful graphic design assistant.\n\
                 - Answer the user's question CONCISELY.\n\
                 - If the user asks about a specific color, ALWAYS provide its \
                   Hex code (e.g. #FF0000) in the answer.\n\
                 - If the user asks for a tool, mention the website URL if found.\n\
                 - Do NOT use JSON format. Return natural language text.\n\
                 - Keep the response short and direct." }] },
            "tools": [{ "google_search": {} }],
        });
        match self.generate(body).await {
            Ok(response) => {
                let text = response_text(&response);
                SearchResult {
                    answer: if text.is_empty() {
                        "No results found.".to_string()
                    } else {
                        text
                    },
                    sources: grounding_sources(&response),
                }
            }
            Err(e) => {
                warn!("smart search failed: {}", e);
                SearchResult {
                    answer: "The search ran into a problem. Please check your connection."
                        .to_string(),
                    sources: vec![],
                }
            }
        }
    }

    async fn design_news(&self) -> Vec<NewsItem> {
        if !self.has_key() {
            return vec![];
        }
        let prompt = "Find 3 of the most recent and interesting news stories in \
             Graphic Design from the last week. Include a mix of reputable sources \
             (e.g. Dezeen, Behance, Creative Boom).\n\n\
             Format the output strictly as a list where each item is separated by \"|||\".\n\
             Inside each item, format it exactly like this:\n\
             TITLE: [Headline]\n\
             SOURCE: [Source name]\n\
             SUMMARY: [Brief summary (max 150 chars)]\n\
             URL: [Link to the article if found, otherwise write 'None']";
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "tools": [{ "google_search": {} }],
        });
        match self.generate(body).await {
            Ok(response) => parse_news(&response_text(&response)),
            Err(e) => {
                warn!("news fetch failed: {}", e);
                vec![]
            }
        }
    }
}

/// Concatenated text of the first candidate
fn response_text(response: &Value) -> String {
    response["candidates"][0]["content"]["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p["text"].as_str())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

/// Web sources from the first candidate's grounding metadata
fn grounding_sources(response: &Value) -> Vec<GroundingSource> {
    response["candidates"][0]["groundingMetadata"]["groundingChunks"]
        .as_array()
        .map(|chunks| {
            chunks
                .iter()
                .filter_map(|chunk| {
                    let web = chunk.get("web")?;
                    Some(GroundingSource {
                        title: web["title"].as_str().unwrap_or_default().to_string(),
                        uri: web["uri"].as_str()?.to_string(),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

fn split_tags(text: &str) -> Vec<String> {
    text.split(|c| c == ',' || c == '\n')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://\S+").expect("valid url regex"))
}

/// Parse the loosely structured "|||"-separated news payload. Malformed
/// blocks degrade to defaults; blocks without a usable title are dropped.
fn parse_news(text: &str) -> Vec<NewsItem> {
    let items: Vec<NewsItem> = text
        .split("|||")
        .map(|block| {
            let lines: Vec<&str> = block
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect();
            let get_val = |key: &str| -> String {
                lines
                    .iter()
                    .find(|l| l.to_uppercase().starts_with(key))
                    .map(|l| l[key.len()..].trim().to_string())
                    .unwrap_or_default()
            };

            let title = get_val("TITLE:");
            let source = get_val("SOURCE:");
            let summary = get_val("SUMMARY:");
            let mut url = get_val("URL:");
            if url.is_empty() || url == "None" {
                url = url_regex()
                    .find(block)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
            }

            NewsItem {
                title: if title.is_empty() { "Design news".to_string() } else { title },
                source: if source.is_empty() { "Design world".to_string() } else { source },
                summary: if summary.is_empty() {
                    "Click through for details.".to_string()
                } else {
                    summary
                },
                url: if url.is_empty() || url == "None" { "#".to_string() } else { url },
                date: today(),
            }
        })
        .filter(|item| item.title.chars().count() > 5)
        .collect();

    items.into_iter().take(NEWS_LIMIT).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags_handles_commas_and_newlines() {
        assert_eq!(
            split_tags("Minimal, Logo\nBrand ,  "),
            vec!["Minimal", "Logo", "Brand"]
        );
        assert!(split_tags("  \n ").is_empty());
    }

    #[test]
    fn test_parse_news_happy_path() {
        let payload = "TITLE: A grand rebrand lands\nSOURCE: Dezeen\nSUMMARY: Short take.\nURL: https://example.com/a\n|||\nTITLE: Typography report\nSOURCE: Creative Boom\nSUMMARY: Another take.\nURL: None";
        let news = parse_news(payload);
        assert_eq!(news.len(), 2);
        assert_eq!(news[0].title, "A grand rebrand lands");
        assert_eq!(news[0].url, "https://example.com/a");
        // 'None' with no link in the block falls back to '#'
        assert_eq!(news[1].url, "#");
    }

    #[test]
    fn test_parse_news_url_fallback_from_block() {
        let payload =
            "TITLE: Poster festival opens\nSOURCE: X\nSUMMARY: see https://fest.example lineup\nURL: None";
        let news = parse_news(payload);
        assert_eq!(news[0].url, "https://fest.example");
    }

    #[test]
    fn test_parse_news_drops_short_titles_and_caps_at_three() {
        let payload = "TITLE: ok\n|||\nTITLE: Story number one here\n|||\nTITLE: Story number two here\n|||\nTITLE: Story number three here\n|||\nTITLE: Story number four here";
        let news = parse_news(payload);
        assert_eq!(news.len(), 3);
        assert_eq!(news[0].title, "Story number one here");
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let response = serde_json::json!({
            "candidates": [{ "content": { "parts": [
                { "text": "Hello " }, { "text": "world" }
            ]}}]
        });
        assert_eq!(response_text(&response), "Hello world");
        assert_eq!(response_text(&serde_json::json!({})), "");
    }

    #[test]
    fn test_grounding_sources_skips_non_web_chunks() {
        let response = serde_json::json!({
            "candidates": [{ "groundingMetadata": { "groundingChunks": [
                { "web": { "title": "Dezeen", "uri": "https://dezeen.com/x" } },
                { "retrievedContext": { "uri": "ignored" } }
            ]}}]
        });
        let sources = grounding_sources(&response);
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].title, "Dezeen");
    }

    #[tokio::test]
    async fn test_missing_key_short_circuits() {
        let client = GeminiClient::new(None);
        assert_eq!(client.generate_tags("logo.ai").await, vec!["General", "File"]);
        assert!(client.brief_assist("T", "C").await.is_none());
        assert!(client.design_news().await.is_empty());
        let result = client.smart_search("pastel blue hex").await;
        assert!(result.sources.is_empty());
    }
}
