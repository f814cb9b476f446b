//! Launch status classification.
//!
//! Stored launch dates are unreliable: the end date is missing while a
//! flight is running and either date may be malformed. The classifier
//! walks a fixed fallback chain, first match wins:
//!
//! 1. no launch: unavailable
//! 2. end date absent, unparseable or still in the future: in progress,
//!    with elapsed wall-clock time since a parseable start date
//! 3. both dates parse: completed, duration from the sample counters
//! 4. two or more valid sample counters: completed (estimated)
//! 5. otherwise: no data

use serde::Serialize;
use utoipa::ToSchema;

use crate::telemetry::clock::{Clock, SystemClock};
use crate::telemetry::dates::parse_launch_date;
use crate::telemetry::time::{TimePolicy, NOT_AVAILABLE};
use crate::telemetry::Launch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema, strum_macros::Display)]
pub enum LaunchStatus {
    #[serde(rename = "No disponible")]
    #[strum(to_string = "No disponible")]
    Unavailable,
    #[serde(rename = "En curso")]
    #[strum(to_string = "En curso")]
    InProgress,
    #[serde(rename = "Completado")]
    #[strum(to_string = "Completado")]
    Completed,
    #[serde(rename = "Completado (estimado)")]
    #[strum(to_string = "Completado (estimado)")]
    Estimated,
    #[serde(rename = "Sin datos")]
    #[strum(to_string = "Sin datos")]
    NoData,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DurationResult {
    pub duration: String,
    pub status: LaunchStatus,
    pub is_in_progress: bool,
}

impl DurationResult {
    fn finished(duration: String, status: LaunchStatus) -> Self {
        Self {
            duration,
            status,
            is_in_progress: false,
        }
    }
}

pub struct Classifier<C = SystemClock> {
    clock: C,
    policy: TimePolicy,
}

impl Default for Classifier<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock, TimePolicy::DEFAULT)
    }
}

impl<C: Clock> Classifier<C> {
    pub fn new(clock: C, policy: TimePolicy) -> Self {
        Self { clock, policy }
    }

    pub fn classify(&self, launch: Option<&Launch>) -> DurationResult {
        let Some(launch) = launch else {
            return DurationResult::finished(NOT_AVAILABLE.into(), LaunchStatus::Unavailable);
        };

        let now = self.clock.now();
        let start = launch.start_date.as_deref().and_then(parse_launch_date);
        let end = launch.end_date.as_deref().and_then(parse_launch_date);

        let running = match end {
            None => true,
            Some(end) => end > now,
        };
        if running {
            let duration = start
                .map(|start| {
                    self.policy
                        .format_relative_time((now - start).num_milliseconds())
                })
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());
            log::debug!("launch {} in progress ({})", launch.launch_id, duration);
            return DurationResult {
                duration,
                status: LaunchStatus::InProgress,
                is_in_progress: true,
            };
        }

        if start.is_some() {
            let duration = self.policy.duration_from_samples(&launch.samples);
            log::debug!("launch {} completed ({})", launch.launch_id, duration);
            return DurationResult::finished(duration, LaunchStatus::Completed);
        }

        if let Some(span) = self.policy.valid_timestamp_span(&launch.samples) {
            log::debug!(
                "launch {} has no start date, estimating from samples",
                launch.launch_id
            );
            return DurationResult::finished(
                self.policy.format_relative_time(span),
                LaunchStatus::Estimated,
            );
        }

        log::debug!("launch {} has no usable dates or samples", launch.launch_id);
        DurationResult::finished(NOT_AVAILABLE.into(), LaunchStatus::NoData)
    }
}

/// Classifies against the wall clock with the default thresholds.
pub fn classify(launch: Option<&Launch>) -> DurationResult {
    Classifier::<SystemClock>::default().classify(launch)
}
