//! All AI/LLM functionality

pub mod client;
pub mod prompt;

use async_trait::async_trait;

use crate::errors::DigestError;

// Re-export main types for convenience
pub use client::{LlmClient, SUMMARY_TEMPERATURE, extract_first_choice};
pub use prompt::{DEFAULT_LANGUAGE, build_summary_prompt};

/// Summarization capability the orchestrator depends on, kept behind a trait
/// so tests can swap in a canned implementation.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Turn one channel's chat log into digest-ready prose in `language`.
    async fn summarize(&self, text: &str, language: &str) -> Result<String, DigestError>;
}

#[async_trait]
impl Summarizer for LlmClient {
    async fn summarize(&self, text: &str, language: &str) -> Result<String, DigestError> {
        LlmClient::summarize(self, text, language).await
    }
}
