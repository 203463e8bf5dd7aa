use std::env;

/// Runtime configuration, read from the environment once at startup and
/// passed down explicitly. Nothing in the crate reads env vars after this.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_bot_token: String,
    pub openai_api_key: String,
    /// Channel the finished digest is posted to.
    pub post_channel_id: String,
    /// Channels summarized into the digest, in posting order.
    pub read_channel_ids: Vec<String>,
    pub openai_model: Option<String>,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns a message naming the offending variable when one is missing
    /// or when `SLACK_READ_CHANNEL_IDS` contains no channel ids.
    pub fn from_env() -> Result<Self, String> {
        let read_channel_ids = parse_channel_ids(
            &env::var("SLACK_READ_CHANNEL_IDS")
                .map_err(|e| format!("SLACK_READ_CHANNEL_IDS: {}", e))?,
        );
        if read_channel_ids.is_empty() {
            return Err("SLACK_READ_CHANNEL_IDS: no channel ids configured".to_string());
        }

        Ok(Self {
            slack_bot_token: env::var("SLACK_BOT_TOKEN")
                .map_err(|e| format!("SLACK_BOT_TOKEN: {}", e))?,
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|e| format!("OPENAI_API_KEY: {}", e))?,
            post_channel_id: env::var("SLACK_POST_CHANNEL_ID")
                .map_err(|e| format!("SLACK_POST_CHANNEL_ID: {}", e))?,
            read_channel_ids,
            openai_model: env::var("OPENAI_MODEL").ok(),
        })
    }
}

/// Split a comma-separated channel list, trimming whitespace and dropping
/// empty entries so trailing commas are harmless.
#[must_use]
pub fn parse_channel_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_comma_separated_channel_ids() {
        assert_eq!(
            parse_channel_ids("C0001,C0002,C0003"),
            vec!["C0001", "C0002", "C0003"]
        );
    }

    #[test]
    fn test_trims_whitespace_and_skips_empty_entries() {
        assert_eq!(
            parse_channel_ids(" C0001 , ,C0002, "),
            vec!["C0001", "C0002"]
        );
    }

    #[test]
    fn test_empty_input_yields_no_ids() {
        assert!(parse_channel_ids("").is_empty());
        assert!(parse_channel_ids(" , ,").is_empty());
    }
}
