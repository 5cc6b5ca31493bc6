// snapguard-core/src/domain/retention.rs

use chrono::{DateTime, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Flat day-count retention window.
///
/// A snapshot is expired once its whole-day age meets or exceeds the window,
/// so a window of 0 expires everything, including a snapshot created in the
/// same pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionWindow {
    days: u32,
}

impl RetentionWindow {
    pub fn days(days: u32) -> Self {
        Self { days }
    }

    /// Whole-day age of a snapshot, timezone information discarded on both
    /// sides before subtracting (the provider reports start times with an
    /// offset; the source policy compares naive timestamps).
    ///
    /// Floor division: a start time slightly ahead of now (clock skew
    /// between the provider and this host) yields -1, not 0, so a 0-day
    /// window does not treat it as expired.
    pub fn age_in_days(start_time: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
        (now.naive_utc() - start_time.naive_utc())
            .num_seconds()
            .div_euclid(SECONDS_PER_DAY)
    }

    pub fn is_expired(&self, age_days: i64) -> bool {
        age_days >= i64::from(self.days)
    }
}
