//! Services Layer
//!
//! Remote collaborators consumed by the command handlers.

mod generative;

pub use generative::{
    BriefAssist, GeminiClient, GenerativeService, GroundingSource, NewsItem, SearchResult,
};

#[cfg(test)]
pub(crate) use generative::testing;
