//! Slack API client module
//!
//! Encapsulates the three Slack Web API calls a digest run makes: channel
//! history, channel info and posting the digest.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use slack_morphism::hyper_tokio::{SlackClientHyperConnector, SlackHyperClient};
use slack_morphism::prelude::SlackApiConversationsHistoryRequest;
use slack_morphism::{SlackApiToken, SlackApiTokenValue, SlackChannelId, SlackTs};
use tracing::warn;

use super::ChannelGateway;
use crate::errors::DigestError;
use crate::models::ChannelMessage;
use crate::window::ReportingWindow;

/// Slack caps `conversations.history` pages at 999 entries.
const HISTORY_PAGE_LIMIT: u16 = 999;

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    error: Option<String>,
}

/// Build the JSON payload for `chat.postMessage`.
#[must_use]
fn build_post_message_payload(channel: &str, text: &str) -> Value {
    json!({
        "channel": channel,
        "text": text,
    })
}

/// Slack API client owning its connections; constructed once at startup and
/// passed by reference from there on.
pub struct SlackClient {
    client: SlackHyperClient,
    token: SlackApiToken,
    http: Client,
}

impl SlackClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTPS connector cannot be built.
    pub fn new(token: String) -> Result<Self, DigestError> {
        let connector = SlackClientHyperConnector::new().map_err(|e| {
            DigestError::ApiError(format!("Failed to create Slack HTTP connector: {e}"))
        })?;

        Ok(Self {
            client: SlackHyperClient::new(connector),
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
            http: Client::new(),
        })
    }
}

#[async_trait]
impl ChannelGateway for SlackClient {
    async fn fetch_history(
        &self,
        channel_id: &str,
        window: &ReportingWindow,
    ) -> Result<Vec<ChannelMessage>, DigestError> {
        let session = self.client.open_session(&self.token);

        let request = SlackApiConversationsHistoryRequest::new()
            .with_channel(SlackChannelId(channel_id.to_string()))
            .with_oldest(SlackTs(window.oldest_ts()))
            .with_latest(SlackTs(window.latest_ts()))
            .with_limit(HISTORY_PAGE_LIMIT);

        let result = session.conversations_history(&request).await?;

        Ok(result
            .messages
            .into_iter()
            .map(|msg| ChannelMessage {
                from_bot: msg.sender.bot_id.is_some(),
                text: msg.content.text.unwrap_or_default(),
            })
            .collect())
    }

    async fn channel_name(&self, channel_id: &str) -> Result<String, DigestError> {
        let info_payload = json!({
            "channel": channel_id,
        });

        let info_resp = self
            .http
            .post("https://slack.com/api/conversations.info")
            .bearer_auth(&self.token.token_value.0)
            .json(&info_payload)
            .send()
            .await
            .map_err(|e| DigestError::HttpError(format!("Failed to get channel info: {e}")))?;

        let info_data: Value = info_resp
            .json()
            .await
            .map_err(|e| DigestError::ApiError(format!("Failed to parse channel info: {e}")))?;

        let channel_name = info_data
            .get("channel")
            .and_then(|c| c.get("name"))
            .and_then(|n| n.as_str())
            .map_or_else(|| channel_id.to_string(), std::string::ToString::to_string);

        Ok(channel_name)
    }

    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), DigestError> {
        let payload = build_post_message_payload(channel_id, text);

        let resp = self
            .http
            .post("https://slack.com/api/chat.postMessage")
            .bearer_auth(&self.token.token_value.0)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DigestError::HttpError(format!("Failed to post message: {e}")))?;

        if !resp.status().is_success() {
            return Err(DigestError::ApiError(format!(
                "chat.postMessage HTTP {}",
                resp.status()
            )));
        }

        let body: PostMessageResponse = resp.json().await.map_err(|e| {
            DigestError::ApiError(format!("chat.postMessage JSON parse error: {e}"))
        })?;

        if !body.ok {
            let error = body.error.as_deref().unwrap_or("unknown");
            warn!("Failed to post message: {}", error);
            return Err(DigestError::ApiError(format!(
                "chat.postMessage error: {error}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_message_payload_shape() {
        let payload = build_post_message_payload("C123456", "digest text");
        assert_eq!(payload["channel"], "C123456");
        assert_eq!(payload["text"], "digest text");
    }

    #[test]
    fn test_post_message_response_parses_success() {
        let resp: PostMessageResponse =
            serde_json::from_str(r#"{"ok": true, "ts": "1718000000.000100"}"#).unwrap();
        assert!(resp.ok);
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_post_message_response_parses_error() {
        let resp: PostMessageResponse =
            serde_json::from_str(r#"{"ok": false, "error": "channel_not_found"}"#).unwrap();
        assert!(!resp.ok);
        assert_eq!(resp.error.as_deref(), Some("channel_not_found"));
    }
}
