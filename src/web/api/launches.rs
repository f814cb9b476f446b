use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::telemetry::time::format_launch_date;
use crate::telemetry::{
    build_trajectory, extract_series_with, Channel, DurationResult, Launch, SeriesPoint,
    TrajectoryPoint, TrajectoryStats,
};
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct LaunchOverview {
    pub launch_id: u32,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// `dd/mm/yyyy, HH:MM:SS` or `N/A`
    pub start_date_display: String,
    pub end_date_display: String,
    pub status: DurationResult,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SeriesQuery {
    pub channel: Channel,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TrajectoryResponse {
    pub stats: TrajectoryStats,
    pub points: Vec<TrajectoryPoint>,
}

#[utoipa::path(
    get,
    path = "/api/launches",
    tag = "launches",
    responses(
        (status = 200, description = "All launches with their status", body = Vec<LaunchOverview>),
        (status = 500, description = "Launch store failure", body = ErrorResponse)
    )
)]
pub async fn list_launches(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<LaunchOverview>>> {
    let classifier = state.classifier();

    let overviews = state
        .store
        .list_launches()?
        .into_iter()
        .map(|launch| LaunchOverview {
            start_date_display: format_launch_date(launch.start_date.as_deref()),
            end_date_display: format_launch_date(launch.end_date.as_deref()),
            status: classifier.classify(Some(&launch)),
            launch_id: launch.launch_id,
            start_date: launch.start_date,
            end_date: launch.end_date,
        })
        .collect();

    Ok(Json(overviews))
}

#[utoipa::path(
    get,
    path = "/api/launches/{id}",
    tag = "launches",
    params(("id" = u32, Path, description = "Launch id")),
    responses(
        (status = 200, description = "Launch with all samples", body = Launch),
        (status = 404, description = "Launch not found", body = ErrorResponse)
    )
)]
pub async fn get_launch(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<Launch>> {
    Ok(Json(state.store.get_launch(id)?))
}

#[utoipa::path(
    get,
    path = "/api/launches/{id}/status",
    tag = "launches",
    params(("id" = u32, Path, description = "Launch id")),
    responses(
        (status = 200, description = "Launch status and duration", body = DurationResult),
        (status = 404, description = "Launch not found", body = ErrorResponse)
    )
)]
pub async fn get_status(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<DurationResult>> {
    let launch = state.store.get_launch(id)?;
    Ok(Json(state.classifier().classify(Some(&launch))))
}

#[utoipa::path(
    get,
    path = "/api/launches/{id}/series",
    tag = "launches",
    params(("id" = u32, Path, description = "Launch id"), SeriesQuery),
    responses(
        (status = 200, description = "Time-ordered points of one channel", body = Vec<SeriesPoint>),
        (status = 400, description = "Unknown channel"),
        (status = 404, description = "Launch not found", body = ErrorResponse)
    )
)]
pub async fn get_series(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Query(query): Query<SeriesQuery>,
) -> ApiResult<Json<Vec<SeriesPoint>>> {
    let launch = state.store.get_launch(id)?;
    let series = extract_series_with(&launch.samples, query.channel, &state.policy());
    log::debug!("launch {}: {} {} points", id, series.len(), query.channel);
    Ok(Json(series))
}

#[utoipa::path(
    get,
    path = "/api/launches/{id}/trajectory",
    tag = "launches",
    params(("id" = u32, Path, description = "Launch id")),
    responses(
        (status = 200, description = "GPS trajectory and statistics", body = TrajectoryResponse),
        (status = 404, description = "Launch not found", body = ErrorResponse)
    )
)]
pub async fn get_trajectory(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<TrajectoryResponse>> {
    let launch = state.store.get_launch(id)?;
    let points = build_trajectory(&launch.samples);

    Ok(Json(TrajectoryResponse {
        stats: TrajectoryStats::from_points(&points),
        points,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use std::sync::Arc;

    use crate::store::{LaunchSource, StoreError};
    use crate::telemetry::{LaunchStatus, Sample};
    use crate::web::api::error::ApiError;
    use crate::web::config::Config;

    struct MemorySource(Vec<Launch>);

    impl LaunchSource for MemorySource {
        fn list_launches(&self) -> Result<Vec<Launch>, StoreError> {
            Ok(self.0.clone())
        }

        fn get_launch(&self, launch_id: u32) -> Result<Launch, StoreError> {
            self.0
                .iter()
                .find(|l| l.launch_id == launch_id)
                .cloned()
                .ok_or(StoreError::NotFound(launch_id))
        }
    }

    fn state() -> AppState {
        let samples = vec![
            Sample {
                timestamp: 2_000,
                humidity: Some(45.0),
                latitude: Some(40.01),
                longitude: Some(-3.0),
                altitude: Some(80.0),
                ..Sample::default()
            },
            Sample {
                timestamp: 1_000,
                humidity: Some(44.0),
                latitude: Some(40.0),
                longitude: Some(-3.0),
                ..Sample::default()
            },
            Sample {
                timestamp: 1_500,
                temperature: Some(19.0),
                ..Sample::default()
            },
        ];
        let launches = vec![
            Launch {
                launch_id: 1,
                start_date: Some("2024-05-01T10:00:00Z".into()),
                end_date: Some("2024-05-01T10:30:00Z".into()),
                samples,
            },
            Launch {
                launch_id: 2,
                start_date: Some("null".into()),
                end_date: None,
                samples: Vec::new(),
            },
            Launch {
                launch_id: 3,
                start_date: Some("null".into()),
                end_date: Some("2024-05-02T09:00:00Z".into()),
                samples: vec![Sample::at(3_000), Sample::at(48_000)],
            },
        ];

        AppState {
            config: Arc::new(Config::from_yaml("launches:\n  base_folder: unused\n").unwrap()),
            store: Arc::new(MemorySource(launches)),
        }
    }

    #[tokio::test]
    async fn listing_classifies_each_launch() {
        let Json(list) = list_launches(State(state())).await.unwrap();

        assert_eq!(list.len(), 3);
        assert_eq!(list[0].start_date_display, "01/05/2024, 10:00:00");
        assert_eq!(list[0].status.status, LaunchStatus::Completed);
        assert_eq!(list[0].status.duration, "1s");
        assert_eq!(list[1].start_date_display, "N/A");
        assert!(list[1].status.is_in_progress);
        assert_eq!(list[2].status.status, LaunchStatus::Estimated);
        assert_eq!(list[2].status.duration, "45s");
    }

    #[tokio::test]
    async fn listing_agrees_with_status() {
        let Json(list) = list_launches(State(state())).await.unwrap();

        for entry in list {
            let Json(status) = get_status(State(state()), Path(entry.launch_id))
                .await
                .unwrap();
            assert_eq!(entry.status, status, "launch {}", entry.launch_id);
        }
    }

    #[tokio::test]
    async fn status_uses_samples() {
        let Json(status) = get_status(State(state()), Path(1)).await.unwrap();

        assert_eq!(status.status, LaunchStatus::Completed);
        assert_eq!(status.duration, "1s");
    }

    #[tokio::test]
    async fn series_for_requested_channel() {
        let Json(series) = get_series(
            State(state()),
            Path(1),
            Query(SeriesQuery {
                channel: Channel::Humidity,
            }),
        )
        .await
        .unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].timestamp(), 1_000);
        assert_eq!(series[1].relative_time(), 1_000);
        assert_eq!(series[1].display_time(), "1s (2000ms)");
    }

    #[tokio::test]
    async fn trajectory_with_stats() {
        let Json(trajectory) = get_trajectory(State(state()), Path(1)).await.unwrap();

        assert_eq!(trajectory.points.len(), 2);
        assert_eq!(trajectory.stats.point_count, 2);
        assert_eq!(trajectory.stats.max_altitude, 80.0);
        assert_eq!(trajectory.stats.min_altitude, 0.0);
        assert!((trajectory.stats.total_distance_km - 1.112).abs() < 0.005);
    }

    #[tokio::test]
    async fn unknown_launch_is_404() {
        let err = get_launch(State(state()), Path(42)).await.unwrap_err();

        assert!(matches!(err, ApiError::NotFound(42)));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
