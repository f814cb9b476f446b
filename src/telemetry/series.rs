use serde::Serialize;
use utoipa::ToSchema;

use crate::telemetry::time::{to_relative_time, TimePolicy};
use crate::telemetry::{Channel, Sample};

/// One chart/table point. Built only by [`extract_series`]; read-only after.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SeriesPoint {
    timestamp: i64,
    value: f64,
    relative_time: i64,
    formatted_time: String,
    display_time: String,
}

impl SeriesPoint {
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Milliseconds since the first point of the series.
    pub fn relative_time(&self) -> i64 {
        self.relative_time
    }

    pub fn formatted_time(&self) -> &str {
        &self.formatted_time
    }

    /// `"{formatted_time} ({timestamp}ms)"`
    pub fn display_time(&self) -> &str {
        &self.display_time
    }
}

pub fn extract_series(samples: &[Sample], channel: Channel) -> Vec<SeriesPoint> {
    extract_series_with(samples, channel, &TimePolicy::DEFAULT)
}

/// Projects the samples carrying `channel` into a time-ordered series.
/// Relative times are measured from the first point of the filtered series.
pub fn extract_series_with(
    samples: &[Sample],
    channel: Channel,
    policy: &TimePolicy,
) -> Vec<SeriesPoint> {
    let mut raw: Vec<(i64, f64)> = samples
        .iter()
        .filter_map(|s| channel.value(s).map(|v| (s.timestamp, v)))
        .collect();

    // stable: equal timestamps keep arrival order
    raw.sort_by_key(|(ts, _)| *ts);

    let Some(&(start, _)) = raw.first() else {
        return Vec::new();
    };

    raw.into_iter()
        .map(|(timestamp, value)| {
            let relative_time = to_relative_time(timestamp, start);
            let formatted_time = policy.format_relative_time(relative_time);
            let display_time = format!("{} ({}ms)", formatted_time, timestamp);
            SeriesPoint {
                timestamp,
                value,
                relative_time,
                formatted_time,
                display_time,
            }
        })
        .collect()
}
