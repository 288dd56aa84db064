//! Time Normalization
//!
//! The single date/time-aware seam in the crate: every supported time
//! representation converts to integer Unix seconds here, and the moving
//! factor is derived from those seconds. Nothing else in the crate looks
//! at a clock.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, NaiveDateTime, TimeZone};

/// A point in time convertible to Unix seconds
///
/// Implemented for raw Unix seconds, [`SystemTime`], and the `chrono`
/// calendar types. Conversion truncates sub-second precision and is
/// monotonic: a later instant never yields a smaller value.
pub trait UnixTime {
    /// Seconds since the Unix epoch, truncated
    fn unix_seconds(&self) -> i64;
}

impl UnixTime for i64 {
    fn unix_seconds(&self) -> i64 {
        *self
    }
}

impl UnixTime for u64 {
    fn unix_seconds(&self) -> i64 {
        i64::try_from(*self).unwrap_or(i64::MAX)
    }
}

impl UnixTime for SystemTime {
    fn unix_seconds(&self) -> i64 {
        match self.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX),
            // Pre-epoch system clocks normalize to the epoch itself
            Err(_) => 0,
        }
    }
}

impl<Tz: TimeZone> UnixTime for DateTime<Tz> {
    fn unix_seconds(&self) -> i64 {
        self.timestamp()
    }
}

/// Naive timestamps are interpreted as UTC
impl UnixTime for NaiveDateTime {
    fn unix_seconds(&self) -> i64 {
        self.and_utc().timestamp()
    }
}

/// Moving factor for a point in time: `floor(unix_seconds / period)`.
///
/// The window is closed on the left and open on the right, so a timestamp
/// exactly divisible by `period` belongs to the window starting there.
/// Times before the epoch are unsupported and clamp to step 0.
pub(crate) fn time_step(time: &impl UnixTime, period: u64) -> u64 {
    let secs = time.unix_seconds().max(0) as u64;
    secs / period
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn integer_seconds_pass_through() {
        assert_eq!(1586369351i64.unix_seconds(), 1586369351);
        assert_eq!(1586369351u64.unix_seconds(), 1586369351);
    }

    #[test]
    fn calendar_time_matches_unix_seconds() {
        let dt = Utc.with_ymd_and_hms(2020, 4, 8, 18, 9, 11).unwrap();
        assert_eq!(dt.unix_seconds(), 1586369351);
    }

    #[test]
    fn offset_time_normalizes_to_same_instant() {
        // 2020-04-08 20:09:11 +02:00 is the same instant as 18:09:11 UTC
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let dt = offset.with_ymd_and_hms(2020, 4, 8, 20, 9, 11).unwrap();
        assert_eq!(dt.unix_seconds(), 1586369351);
    }

    #[test]
    fn naive_time_is_treated_as_utc() {
        let naive = chrono::NaiveDate::from_ymd_opt(2020, 4, 8)
            .unwrap()
            .and_hms_opt(18, 9, 11)
            .unwrap();
        assert_eq!(naive.unix_seconds(), 1586369351);
    }

    #[test]
    fn system_time_is_sane() {
        let now = SystemTime::now().unix_seconds();
        // Well after 2020, well before the year 3000
        assert!(now > 1_577_836_800);
        assert!(now < 32_503_680_000);
    }

    #[test]
    fn step_boundary_is_closed_on_the_left() {
        assert_eq!(time_step(&89i64, 30), 2);
        assert_eq!(time_step(&90i64, 30), 3);
        assert_eq!(time_step(&91i64, 30), 3);
    }

    #[test]
    fn pre_epoch_clamps_to_step_zero() {
        assert_eq!(time_step(&-5i64, 30), 0);
    }
}
