use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::launches::{LaunchOverview, TrajectoryResponse};
use crate::telemetry::{
    Channel, DurationResult, Launch, LaunchStatus, Sample, SeriesPoint, TrajectoryPoint,
    TrajectoryStats,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::launches::list_launches,
        super::api::launches::get_launch,
        super::api::launches::get_status,
        super::api::launches::get_series,
        super::api::launches::get_trajectory,
    ),
    components(
        schemas(
            LaunchOverview,
            TrajectoryResponse,
            ErrorResponse,
            Launch,
            Sample,
            Channel,
            DurationResult,
            LaunchStatus,
            SeriesPoint,
            TrajectoryPoint,
            TrajectoryStats,
        )
    ),
    info(
        title = "CanSat Dashboard API",
        description = "Launch status, chart series and GPS trajectories derived from CanSat telemetry",
        version = "0.1.0"
    ),
    tags(
        (name = "launches", description = "Recorded launches and their derived data")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for path in [
            "/api/launches",
            "/api/launches/{id}",
            "/api/launches/{id}/status",
            "/api/launches/{id}/series",
            "/api/launches/{id}/trajectory",
        ] {
            assert!(paths.contains(&path), "missing {path}");
        }
    }
}
