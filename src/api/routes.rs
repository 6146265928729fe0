//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::launcher::{AgentLauncher, ProcessLauncher};

use super::types::*;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    /// Starts one agent process per accepted task
    pub launcher: Arc<dyn AgentLauncher>,
}

/// Build the application router for the given state.
///
/// Anything that is not an API route falls through to the panel's
/// static assets.
pub fn router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/api/health", get(health))
        .route("/agent", post(launch_agent))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let launcher: Arc<dyn AgentLauncher> =
        Arc::new(ProcessLauncher::new(config.agent_command.clone()));
    let state = Arc::new(AppState {
        config: config.clone(),
        launcher,
    });

    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Receive a task and launch a new agent process in the background.
///
/// The body must be JSON carrying a string `task` field. Launched
/// agents are not tracked; the response only acknowledges the spawn.
async fn launch_agent(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<LaunchResponse>, (StatusCode, Json<LaunchResponse>)> {
    let Some(task) = body.get("task").and_then(Value::as_str) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(LaunchResponse::error("Task not provided")),
        ));
    };

    tracing::info!("Received task: '{}'. Launching agent...", task);

    match state.launcher.launch(task).await {
        Ok(()) => Ok(Json(LaunchResponse::success(format!(
            "Agent for task '{}' launched.",
            task
        )))),
        Err(e) => {
            tracing::error!("Error launching agent: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(LaunchResponse::error(format!(
                    "Failed to launch agent: {}",
                    e
                ))),
            ))
        }
    }
}
