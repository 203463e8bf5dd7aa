//! One digest run end to end: window, per-channel collection and
//! summarization, then a single post to the destination channel.

use tracing::{error, info};

use crate::ai::{DEFAULT_LANGUAGE, Summarizer};
use crate::collect::fetch_channel_text;
use crate::config::AppConfig;
use crate::errors::DigestError;
use crate::slack::ChannelGateway;
use crate::window::ReportingWindow;

/// Heading line that opens a channel's section of the digest.
#[must_use]
pub fn channel_label(channel_id: &str) -> String {
    format!("今日の <#{channel_id}> はこんな感じ。 ")
}

/// Join per-channel sections into the digest posted to Slack.
///
/// Sections are separated by a blank line and a non-empty digest ends with
/// exactly one newline. No sections yields the empty string.
#[must_use]
pub fn compose_digest(sections: &[String]) -> String {
    if sections.is_empty() {
        return String::new();
    }

    let mut digest = sections.join("\n\n");
    digest.push('\n');
    digest
}

/// Run the whole digest pass.
///
/// Channels are processed strictly in configuration order. A channel whose
/// history fetch fails is logged and skipped; everything after a successful
/// fetch is fatal for the run. The digest is posted even when every channel
/// was skipped.
///
/// # Errors
///
/// Returns an error when a summary request fails or the final post is not
/// accepted by Slack.
pub async fn run_digest(
    config: &AppConfig,
    slack: &dyn ChannelGateway,
    summarizer: &dyn Summarizer,
) -> Result<(), DigestError> {
    let window = ReportingWindow::ending_now();
    info!(
        "Collecting channel activity between {} and {}",
        window.start(),
        window.end()
    );

    let mut sections = Vec::new();
    for channel_id in &config.read_channel_ids {
        let text = match fetch_channel_text(slack, channel_id, &window).await {
            Ok(text) => text,
            Err(e) => {
                error!("Skipping channel {}: {}", channel_id, e);
                continue;
            }
        };

        let channel_name = slack.channel_name(channel_id).await?;
        info!(
            "Summarizing #{} ({} bytes of chat log)",
            channel_name,
            text.len()
        );

        let summary = summarizer.summarize(&text, DEFAULT_LANGUAGE).await?;
        sections.push(format!("{}\n{}", channel_label(channel_id), summary));
    }

    let digest = compose_digest(&sections);
    slack.post_message(&config.post_channel_id, &digest).await?;

    info!(
        "Digest of {} channel(s) posted to {}",
        sections.len(),
        config.post_channel_id
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_label_wraps_id_in_mention() {
        assert_eq!(channel_label("C024BE91L"), "今日の <#C024BE91L> はこんな感じ。 ");
    }

    #[test]
    fn test_compose_digest_empty_without_sections() {
        assert_eq!(compose_digest(&[]), "");
    }

    #[test]
    fn test_compose_digest_single_section() {
        let sections = vec!["今日の <#C1> はこんな感じ。 \nSUMMARY".to_string()];
        assert_eq!(compose_digest(&sections), "今日の <#C1> はこんな感じ。 \nSUMMARY\n");
    }

    #[test]
    fn test_compose_digest_separates_sections_with_blank_line() {
        let sections = vec!["label-a\nsummary-a".to_string(), "label-b\nsummary-b".to_string()];
        assert_eq!(
            compose_digest(&sections),
            "label-a\nsummary-a\n\nlabel-b\nsummary-b\n"
        );
    }
}
