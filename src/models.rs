//! Plain data carried between the collection and summarization stages.

/// One entry from a channel's history, reduced to what the digest needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMessage {
    /// Set when Slack attributes the message to a bot integration.
    pub from_bot: bool,
    /// Raw message body, exactly as Slack delivered it.
    pub text: String,
}

impl ChannelMessage {
    #[must_use]
    pub fn new(from_bot: bool, text: impl Into<String>) -> Self {
        Self {
            from_bot,
            text: text.into(),
        }
    }
}
