//! The trailing time window a digest run reports on.

use chrono::{DateTime, Duration, Timelike, Utc};
use chrono_tz::Tz;

/// How far back a run looks. One hour past a day so a daily schedule with
/// some start-time jitter never leaves a gap between runs.
pub const LOOKBACK_HOURS: i64 = 25;

/// All window arithmetic happens in this zone regardless of host locale.
pub const REPORT_TIMEZONE: Tz = chrono_tz::Asia::Tokyo;

/// Slice of time from `start` to `end`, truncated to whole seconds to match
/// the resolution of Slack's `oldest`/`latest` history cursors.
#[derive(Debug, Clone)]
pub struct ReportingWindow {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
}

impl ReportingWindow {
    /// Window of `lookback` duration ending at `now`.
    #[must_use]
    pub fn ending_at(now: DateTime<Tz>, lookback: Duration) -> Self {
        let end = now.with_nanosecond(0).unwrap_or(now);
        let start = end - lookback;
        Self { start, end }
    }

    /// The standard digest window: [`LOOKBACK_HOURS`] ending at the current
    /// wall-clock time in [`REPORT_TIMEZONE`].
    #[must_use]
    pub fn ending_now() -> Self {
        let now = Utc::now().with_timezone(&REPORT_TIMEZONE);
        Self::ending_at(now, Duration::hours(LOOKBACK_HOURS))
    }

    #[must_use]
    pub fn start(&self) -> DateTime<Tz> {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> DateTime<Tz> {
        self.end
    }

    /// Window start as the epoch-second string Slack expects in `oldest`.
    #[must_use]
    pub fn oldest_ts(&self) -> String {
        self.start.timestamp().to_string()
    }

    /// Window end as the epoch-second string Slack expects in `latest`.
    #[must_use]
    pub fn latest_ts(&self) -> String {
        self.end.timestamp().to_string()
    }
}
