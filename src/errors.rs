use slack_morphism::errors::SlackClientError;
use thiserror::Error;

/// Failure modes of a digest run.
///
/// A failed history fetch is recoverable per channel: the orchestrator logs
/// it and moves on to the next channel. Summarization and publish failures
/// abort the whole run.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("Failed to access Slack API: {0}")]
    ApiError(String),

    #[error("Failed to access OpenAI API: {0}")]
    OpenAIError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<SlackClientError> for DigestError {
    fn from(error: SlackClientError) -> Self {
        DigestError::ApiError(error.to_string())
    }
}

impl From<reqwest::Error> for DigestError {
    fn from(error: reqwest::Error) -> Self {
        DigestError::HttpError(error.to_string())
    }
}
