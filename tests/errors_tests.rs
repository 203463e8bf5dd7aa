use recap::errors::DigestError;
use std::error::Error;

#[test]
fn test_digest_error_implements_error_trait() {
    // Verify DigestError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = DigestError::ApiError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_digest_error_display() {
    // Verify Display implementation works correctly
    let error = DigestError::ApiError("API failed".to_string());
    assert_eq!(format!("{error}"), "Failed to access Slack API: API failed");

    let error = DigestError::OpenAIError("Model unavailable".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access OpenAI API: Model unavailable"
    );

    let error = DigestError::HttpError("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );
}

#[test]
fn test_digest_error_from_conversions() {
    // We can't easily construct a reqwest::Error or SlackClientError directly,
    // but we can verify the From impls exist by checking that these
    // conversion functions compile
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> DigestError {
        DigestError::from(err)
    }

    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_slack_conversion(err: slack_morphism::errors::SlackClientError) -> DigestError {
        DigestError::from(err)
    }
}
