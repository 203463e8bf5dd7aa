//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the single chat-completion call a digest run makes.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use super::prompt::build_summary_prompt;
use crate::errors::DigestError;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Kept low so repeated runs over the same log come out stable.
pub const SUMMARY_TEMPERATURE: f64 = 0.3;

/// LLM API client for generating channel summaries
pub struct LlmClient {
    api_key: String,
    model_name: String,
    http: Client,
}

impl LlmClient {
    #[must_use]
    pub fn new(api_key: String, model_name: String) -> Self {
        Self {
            api_key,
            model_name,
            http: Client::new(),
        }
    }

    /// Summarize one channel's chat log with a single non-streaming
    /// chat-completion request and return the first candidate verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request to `OpenAI` fails, the API
    /// answers with a non-success status, or the response carries no
    /// message content.
    pub async fn summarize(&self, text: &str, language: &str) -> Result<String, DigestError> {
        let prompt = build_summary_prompt(text, language);
        let request_body = build_completion_body(&self.model_name, SUMMARY_TEMPERATURE, &prompt);

        info!(
            "Requesting summary from {} ({} prompt messages, {} bytes of chat log)",
            self.model_name,
            prompt.len(),
            text.len()
        );

        let response = self
            .http
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| DigestError::HttpError(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(DigestError::OpenAIError(format!(
                "OpenAI API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            DigestError::OpenAIError(format!("Failed to parse OpenAI response: {e}"))
        })?;

        extract_first_choice(&response_json).ok_or_else(|| {
            DigestError::OpenAIError("No message content in completion response".to_string())
        })
    }
}

/// Build the chat-completion request payload.
pub(crate) fn build_completion_body(
    model: &str,
    temperature: f64,
    prompt: &[ChatCompletionMessage],
) -> Value {
    let messages: Vec<Value> = prompt
        .iter()
        .map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::assistant => "assistant",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
            };

            let content = match &m.content {
                Content::Text(t) => t.clone(),
                // Digest prompts carry text content only
                Content::ImageUrl(_) => String::new(),
            };

            json!({
                "role": role_str,
                "content": content
            })
        })
        .collect();

    json!({
        "model": model,
        "temperature": temperature,
        "messages": messages
    })
}

/// Pull the first candidate's message content out of a chat-completion
/// response. Later candidates, if the API ever returns any, are ignored.
#[must_use]
pub fn extract_first_choice(response: &Value) -> Option<String> {
    response
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(std::string::ToString::to_string)
}
