use tracing::info;

use crate::errors::DigestError;
use crate::models::ChannelMessage;
use crate::slack::ChannelGateway;
use crate::window::ReportingWindow;

/// Fetch a channel's history for the window and flatten the qualifying
/// messages into one chat log, oldest first, one message body per line.
///
/// A channel with no qualifying messages yields `Ok` with an empty string.
/// Only a failed history call is an error; the caller decides whether the
/// channel is skipped.
pub async fn fetch_channel_text(
    gateway: &dyn ChannelGateway,
    channel_id: &str,
    window: &ReportingWindow,
) -> Result<String, DigestError> {
    let messages = gateway.fetch_history(channel_id, window).await?;

    let text = assemble_channel_text(&messages);

    info!(
        "Collected {} log lines from {} history entries in {}",
        text.lines().count(),
        messages.len(),
        channel_id
    );

    Ok(text)
}

/// Drop bot-authored and blank messages, undo Slack's newest-first delivery
/// order and join the surviving bodies into newline-terminated lines.
///
/// Bodies are appended untrimmed; emptiness is judged on the trimmed form
/// only. A body containing line breaks spans several lines of the log.
#[must_use]
pub fn assemble_channel_text(messages: &[ChannelMessage]) -> String {
    let mut text = String::new();

    for message in messages.iter().rev() {
        if message.from_bot || message.text.trim().is_empty() {
            continue;
        }
        text.push_str(&message.text);
        text.push('\n');
    }

    text
}
