use axum::{routing::get, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::store::FolderStore;

use super::api::launches as launch_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;
use super::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/launches", get(launch_handlers::list_launches))
        .route("/api/launches/{id}", get(launch_handlers::get_launch))
        .route("/api/launches/{id}/status", get(launch_handlers::get_status))
        .route("/api/launches/{id}/series", get(launch_handlers::get_series))
        .route(
            "/api/launches/{id}/trajectory",
            get(launch_handlers::get_trajectory),
        )
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();
    let base_folder: PathBuf = config.launches.base_folder.clone();

    log::info!("Serving launches from {}", base_folder.display());

    let state = AppState {
        config: Arc::new(config),
        store: Arc::new(FolderStore::new(base_folder)),
    };

    let app = router(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
