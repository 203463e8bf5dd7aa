use anyhow::Result;
use openai_api_rs::v1::common::GPT3_5_TURBO;
use tracing::error;

use recap::ai::LlmClient;
use recap::config::AppConfig;
use recap::digest::run_digest;
use recap::slack::SlackClient;

#[tokio::main]
async fn main() -> Result<()> {
    recap::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        anyhow::anyhow!(e)
    })?;

    let slack = SlackClient::new(config.slack_bot_token.clone())?;
    let model = config
        .openai_model
        .clone()
        .unwrap_or_else(|| GPT3_5_TURBO.to_string());
    let llm = LlmClient::new(config.openai_api_key.clone(), model);

    run_digest(&config, &slack, &llm).await?;

    Ok(())
}
