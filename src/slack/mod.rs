//! All Slack-specific functionality

pub mod client;

use async_trait::async_trait;

use crate::errors::DigestError;
use crate::models::ChannelMessage;
use crate::window::ReportingWindow;

// Re-export main types for convenience
pub use client::SlackClient;

/// The slice of the Slack API a digest run touches. The orchestrator only
/// sees this trait, so tests drive it with an in-memory fake.
#[async_trait]
pub trait ChannelGateway: Send + Sync {
    /// Messages in `channel_id` within the window, newest first as Slack
    /// delivers them.
    async fn fetch_history(
        &self,
        channel_id: &str,
        window: &ReportingWindow,
    ) -> Result<Vec<ChannelMessage>, DigestError>;

    /// Human-readable channel name, falling back to the id when Slack does
    /// not provide one.
    async fn channel_name(&self, channel_id: &str) -> Result<String, DigestError>;

    /// Post `text` verbatim as a single message.
    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), DigestError>;
}
