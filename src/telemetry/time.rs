//! Device timestamp normalization.
//!
//! Samples are stamped with the payload's millisecond counter since boot.
//! These helpers turn counter deltas into readable durations and filter out
//! counter values that cannot belong to a real flight.

use crate::telemetry::dates::parse_launch_date;
use crate::telemetry::Sample;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_DAY: i64 = 86_400_000;

/// Counter values at or above this are treated as corrupt.
pub const MAX_DEVICE_TIMESTAMP_MS: i64 = 1_000_000_000;
/// Deltas above this print as [`INVALID_DURATION`]. Heuristic, not a
/// limit of the hardware.
pub const MAX_PLAUSIBLE_DELTA_MS: i64 = 30 * MS_PER_DAY;

pub const INVALID_DURATION: &str = "Datos inválidos";
pub const NOT_AVAILABLE: &str = "N/A";

/// Thresholds used to reject implausible device timestamps and durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePolicy {
    pub max_device_timestamp_ms: i64,
    pub max_plausible_delta_ms: i64,
}

impl Default for TimePolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TimePolicy {
    pub const DEFAULT: TimePolicy = TimePolicy {
        max_device_timestamp_ms: MAX_DEVICE_TIMESTAMP_MS,
        max_plausible_delta_ms: MAX_PLAUSIBLE_DELTA_MS,
    };

    pub fn is_valid_device_timestamp(&self, timestamp: i64) -> bool {
        timestamp > 0 && timestamp < self.max_device_timestamp_ms
    }

    /// Formats a millisecond delta as `"{d}d {h}h {m}m {s}s"`, dropping
    /// leading zero units.
    pub fn format_relative_time(&self, delta_ms: i64) -> String {
        if delta_ms > self.max_plausible_delta_ms {
            return INVALID_DURATION.to_string();
        }

        let seconds = delta_ms.div_euclid(MS_PER_SECOND);
        let minutes = seconds.div_euclid(60);
        let hours = minutes.div_euclid(60);
        let days = hours.div_euclid(24);

        let rem_seconds = seconds.rem_euclid(60);
        let rem_minutes = minutes.rem_euclid(60);
        let rem_hours = hours.rem_euclid(24);

        if days > 0 {
            format!("{days}d {rem_hours}h {rem_minutes}m {rem_seconds}s")
        } else if hours > 0 {
            format!("{hours}h {rem_minutes}m {rem_seconds}s")
        } else if minutes > 0 {
            format!("{minutes}m {rem_seconds}s")
        } else {
            format!("{seconds}s")
        }
    }

    /// Span between the earliest and latest valid timestamps, if at least
    /// two samples carry one.
    pub fn valid_timestamp_span(&self, samples: &[Sample]) -> Option<i64> {
        let mut valid = samples
            .iter()
            .map(|s| s.timestamp)
            .filter(|ts| self.is_valid_device_timestamp(*ts));

        let first = valid.next()?;
        let (min, max, count) = valid.fold((first, first, 1usize), |(min, max, n), ts| {
            (min.min(ts), max.max(ts), n + 1)
        });

        (count >= 2).then_some(max - min)
    }

    /// Flight duration derived from the sample counters alone.
    pub fn duration_from_samples(&self, samples: &[Sample]) -> String {
        if samples.len() < 2 {
            return NOT_AVAILABLE.to_string();
        }

        match self.valid_timestamp_span(samples) {
            Some(span) => self.format_relative_time(span),
            None => INVALID_DURATION.to_string(),
        }
    }
}

pub fn format_relative_time(delta_ms: i64) -> String {
    TimePolicy::DEFAULT.format_relative_time(delta_ms)
}

pub fn to_relative_time(timestamp: i64, start_timestamp: i64) -> i64 {
    timestamp.saturating_sub(start_timestamp)
}

pub fn is_valid_device_timestamp(timestamp: i64) -> bool {
    TimePolicy::DEFAULT.is_valid_device_timestamp(timestamp)
}

pub fn duration_from_samples(samples: &[Sample]) -> String {
    TimePolicy::DEFAULT.duration_from_samples(samples)
}

/// Earliest sample timestamp, 0 when there are none.
pub fn start_timestamp(samples: &[Sample]) -> i64 {
    samples.iter().map(|s| s.timestamp).min().unwrap_or(0)
}

/// Latest sample timestamp, 0 when there are none.
pub fn end_timestamp(samples: &[Sample]) -> i64 {
    samples.iter().map(|s| s.timestamp).max().unwrap_or(0)
}

/// Renders a raw launch date as `dd/mm/yyyy, HH:MM:SS` (UTC).
pub fn format_launch_date(raw: Option<&str>) -> String {
    raw.and_then(parse_launch_date)
        .map(|dt| dt.format("%d/%m/%Y, %H:%M:%S").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
