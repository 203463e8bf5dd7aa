//! recap - A scheduled Slack bot that posts a daily digest of channel activity.
//!
//! Each run covers the trailing 25 hours (Asia/Tokyo): for every configured
//! channel it fetches the history, flattens the human-authored messages into
//! a chat log, has ChatGPT summarize the log, and posts all summaries to the
//! destination channel as one message.
//!
//! # Architecture
//!
//! The system uses:
//! - slack-morphism for fetching channel history
//! - plain reqwest calls for `chat.postMessage` and `conversations.info`
//! - openai-api-rs message types with a reqwest chat-completion call
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use recap::ai::LlmClient;
//! use recap::config::AppConfig;
//! use recap::slack::SlackClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Set up structured logging
//!     recap::setup_logging();
//!
//!     // Create a dummy AppConfig for the example
//!     let config = AppConfig {
//!         slack_bot_token: "xoxb-dummy".to_string(),
//!         openai_api_key: "sk-dummy".to_string(),
//!         post_channel_id: "C0000000000".to_string(),
//!         read_channel_ids: vec!["C0000000001".to_string()],
//!         openai_model: None,
//!     };
//!
//!     let slack = SlackClient::new(config.slack_bot_token.clone())?;
//!     let llm = LlmClient::new(
//!         config.openai_api_key.clone(),
//!         "gpt-3.5-turbo".to_string(),
//!     );
//!
//!     recap::digest::run_digest(&config, &slack, &llm).await?;
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod collect;
pub mod config;
pub mod digest;
pub mod errors;
pub mod models;
pub mod slack;
pub mod window;

/// Configure structured logging for console output.
///
/// Sets up tracing-subscriber with the plain formatter. Call once at the
/// start of the process.
///
/// # Example
///
/// ```
/// recap::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
