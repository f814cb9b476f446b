//! Pure projections over recorded launches: time normalization, chart
//! series, launch status and GPS trajectory statistics. Nothing here does
//! I/O or keeps state between calls.

pub mod clock;
pub mod dates;
pub mod series;
pub mod status;
pub mod time;
pub mod trajectory;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use series::{extract_series, extract_series_with, SeriesPoint};
pub use status::{classify, Classifier, DurationResult, LaunchStatus};
pub use time::{format_relative_time, to_relative_time, TimePolicy};
pub use trajectory::{
    build_trajectory, max_altitude, min_altitude, total_distance_km, TrajectoryPoint,
    TrajectoryStats,
};
pub use types::{Channel, Launch, Sample};
