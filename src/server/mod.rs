use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer};

use crate::core::service::MentionService;
use crate::domain::ports::ContentSource;
use crate::utils::error::TrackerError;

const REQUEST_BODY_LIMIT_BYTES: usize = 16 * 1024;

// --- Error Handling ---
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::BadRequest(s) => (StatusCode::BAD_REQUEST, s),
            AppError::NotFound(s) => (StatusCode::NOT_FOUND, s),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again.".to_string(),
                )
            }
        };
        (
            status,
            Json(serde_json::json!({ "error": msg, "success": false })),
        )
            .into_response()
    }
}

impl From<TrackerError> for AppError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::ValidationError { message } => AppError::BadRequest(message),
            TrackerError::NoContentError { handle } => AppError::NotFound(format!(
                "No content found for @{}. The account may be private, suspended, or empty.",
                handle
            )),
            other => AppError::Internal(anyhow::Error::new(other)),
        }
    }
}

// --- Request/Response Types ---
#[derive(Debug, Deserialize)]
pub struct CountRequest {
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub username: String,
    pub count: usize,
    pub message: String,
    pub success: bool,
    pub tweet_count: usize,
}

// --- Handlers ---
async fn count_mentions_handler<S: ContentSource>(
    State(service): State<Arc<MentionService<S>>>,
    Json(payload): Json<CountRequest>,
) -> std::result::Result<Json<CountResponse>, AppError> {
    let report = service.count_for(&payload.username).await?;
    Ok(Json(CountResponse {
        username: report.handle,
        count: report.count,
        message: report.message,
        success: true,
        tweet_count: report.estimated_items,
    }))
}

// --- Server ---
pub fn build_router<S: ContentSource + 'static>(
    service: Arc<MentionService<S>>,
    static_dir: &str,
) -> Router {
    Router::new()
        .route("/count-mentions", post(count_mentions_handler::<S>))
        .with_state(service)
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(REQUEST_BODY_LIMIT_BYTES))
}

pub async fn run_server<S: ContentSource + 'static>(
    listen_addr: &str,
    service: Arc<MentionService<S>>,
    static_dir: &str,
) -> Result<()> {
    let app = build_router(service, static_dir);

    let addr: SocketAddr = listen_addr.parse()?;
    tracing::info!("gLumi tracker listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("shutting down gracefully");
        })
        .await?;

    Ok(())
}
