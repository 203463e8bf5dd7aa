//! Prompt assembly for the digest summary.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

/// Language the digest is written in unless a caller overrides it.
pub const DEFAULT_LANGUAGE: &str = "Japanese";

/// System message describing the chat-log format and the output language.
#[must_use]
pub fn system_instruction(language: &str) -> String {
    [
        "The chat log consists of one message per line.".to_string(),
        r"A literal `\n` inside a message represents a line break within that message."
            .to_string(),
        format!("The user understands {language} only."),
        format!("So the assistant must answer in {language}."),
    ]
    .join("\n")
}

/// User message carrying the style rules and the chat log itself.
///
/// The log is appended verbatim after a blank line, untouched by any escaping
/// or truncation.
#[must_use]
pub fn user_instruction(text: &str, language: &str) -> String {
    [
        format!("Summarize the meaning of the following chat log in {language}."),
        "Do not summarize it line by line.".to_string(),
        "Before the summary, write a title of about 10 words that captures it, wrapped in 「」 and followed by a line break.".to_string(),
        "Do not include greetings, salutations or polite closing phrases in the summary.".to_string(),
        "Write it in Kansai dialect.".to_string(),
        "Keep it easy to read and within 140 characters.".to_string(),
        "At the end, add a few encouraging words for a good day tomorrow.".to_string(),
        String::new(),
        text.to_string(),
    ]
    .join("\n")
}

/// Fixed two-message prompt sent for every summary request.
#[must_use]
pub fn build_summary_prompt(text: &str, language: &str) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(system_instruction(language)),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(user_instruction(text, language)),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}
