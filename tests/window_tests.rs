use chrono::{Duration, TimeZone, Timelike};
use recap::window::{LOOKBACK_HOURS, REPORT_TIMEZONE, ReportingWindow};

#[test]
fn test_window_spans_lookback_ending_at_now() {
    let now = REPORT_TIMEZONE
        .with_ymd_and_hms(2024, 5, 18, 10, 0, 0)
        .unwrap();
    let window = ReportingWindow::ending_at(now, Duration::hours(LOOKBACK_HOURS));

    assert_eq!(window.end(), now);
    assert_eq!(window.start(), now - Duration::hours(25));
    assert!(window.start() < window.end());
}

#[test]
fn test_window_truncates_subsecond_precision() {
    let now = REPORT_TIMEZONE
        .with_ymd_and_hms(2024, 5, 18, 10, 0, 0)
        .unwrap()
        .with_nanosecond(987_654_321)
        .unwrap();
    let window = ReportingWindow::ending_at(now, Duration::hours(LOOKBACK_HOURS));

    // Truncation floors to the whole second on both bounds
    assert_eq!(window.end().nanosecond(), 0);
    assert_eq!(window.start().nanosecond(), 0);
    assert_eq!(
        window.end(),
        REPORT_TIMEZONE
            .with_ymd_and_hms(2024, 5, 18, 10, 0, 0)
            .unwrap()
    );
}

#[test]
fn test_window_crosses_midnight_into_previous_day() {
    let now = REPORT_TIMEZONE
        .with_ymd_and_hms(2024, 5, 18, 10, 0, 0)
        .unwrap();
    let window = ReportingWindow::ending_at(now, Duration::hours(LOOKBACK_HOURS));

    assert_eq!(
        window.start(),
        REPORT_TIMEZONE
            .with_ymd_and_hms(2024, 5, 17, 9, 0, 0)
            .unwrap()
    );
}

#[test]
fn test_window_exposes_epoch_second_cursors() {
    let now = REPORT_TIMEZONE
        .with_ymd_and_hms(2024, 5, 18, 10, 0, 30)
        .unwrap();
    let window = ReportingWindow::ending_at(now, Duration::hours(LOOKBACK_HOURS));

    assert_eq!(window.latest_ts(), now.timestamp().to_string());
    assert_eq!(
        window.oldest_ts(),
        (now - Duration::hours(25)).timestamp().to_string()
    );
    // Epoch-second strings carry no fractional part
    assert!(!window.latest_ts().contains('.'));
}

#[test]
fn test_ending_now_uses_fixed_zone_and_lookback() {
    let window = ReportingWindow::ending_now();

    assert_eq!(window.end() - window.start(), Duration::hours(LOOKBACK_HOURS));
    assert_eq!(window.end().timezone(), REPORT_TIMEZONE);
    assert_eq!(window.end().nanosecond(), 0);
}
