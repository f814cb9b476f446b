use serde::Serialize;
use utoipa::ToSchema;

use crate::telemetry::Sample;

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct TrajectoryPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Metres; 0 when the fix carried no altitude.
    pub altitude: f64,
    pub timestamp: i64,
}

/// Statistics shown next to the trajectory map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct TrajectoryStats {
    pub point_count: usize,
    pub max_altitude: f64,
    pub min_altitude: f64,
    pub total_distance_km: f64,
}

impl TrajectoryStats {
    pub fn from_points(points: &[TrajectoryPoint]) -> Self {
        Self {
            point_count: points.len(),
            max_altitude: max_altitude(points),
            min_altitude: min_altitude(points),
            total_distance_km: total_distance_km(points),
        }
    }
}

/// GPS fixes (samples with both latitude and longitude) in timestamp order.
pub fn build_trajectory(samples: &[Sample]) -> Vec<TrajectoryPoint> {
    let mut points: Vec<TrajectoryPoint> = samples
        .iter()
        .filter_map(|s| {
            Some(TrajectoryPoint {
                latitude: s.latitude?,
                longitude: s.longitude?,
                altitude: s.altitude.unwrap_or(0.0),
                timestamp: s.timestamp,
            })
        })
        .collect();

    points.sort_by_key(|p| p.timestamp);
    points
}

/// Great-circle distance in metres.
pub fn haversine_m(a: &TrajectoryPoint, b: &TrajectoryPoint) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Path length in km, following the points in the order given. GPS
/// jitter adds to the total.
pub fn total_distance_km(points: &[TrajectoryPoint]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let metres: f64 = points.windows(2).map(|w| haversine_m(&w[0], &w[1])).sum();
    metres / 1000.0
}

pub fn max_altitude(points: &[TrajectoryPoint]) -> f64 {
    points
        .iter()
        .map(|p| p.altitude)
        .reduce(f64::max)
        .unwrap_or(0.0)
}

pub fn min_altitude(points: &[TrajectoryPoint]) -> f64 {
    points
        .iter()
        .map(|p| p.altitude)
        .reduce(f64::min)
        .unwrap_or(0.0)
}
