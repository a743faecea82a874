//! HTTP server: the dashboard page plus a small JSON API
//!
//! ## Endpoints
//!
//! - `GET /` - Dashboard page
//! - `GET /api/health` - Health check with record count
//! - `GET /api/layout` - Widget layout declaration
//! - `GET /api/dataset` - Dataset summary
//! - `POST /api/update` - Run the callbacks triggered by a widget change

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, warn, Level};

use crate::callback::{CallbackRegistry, ComponentValues, FilterSelection, Update};
use crate::dashboard;
use crate::data::{DatasetSummary, LaunchTable};
use crate::error::Error;
use crate::html;
use crate::layout::Layout;

/// Shared, read-only state handed to every handler
pub struct AppState {
    pub table: Arc<LaunchTable>,
    pub layout: Layout,
    pub registry: CallbackRegistry,
}

impl AppState {
    /// State for the launch dashboard over a loaded table
    pub fn new(table: Arc<LaunchTable>) -> Self {
        let layout = Layout::for_table(&table);
        Self {
            table,
            layout,
            registry: dashboard::callback_registry(),
        }
    }
}

/// Response wrapper with timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
}

/// Body of `POST /api/update`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// Component that changed; `None` recomputes every output
    #[serde(default)]
    pub changed: Option<String>,
    #[serde(default)]
    pub values: ComponentValues,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Library errors surfaced through the API
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::UnknownComponent(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!(%status, error = %self.0, "Request failed");
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Create the router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/health", get(health_handler))
        .route("/api/layout", get(layout_handler))
        .route("/api/dataset", get(dataset_handler))
        .route("/api/update", post(update_handler))
        // Request tracing (enable with RUST_LOG=tower_http=info or higher)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl+C
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> crate::error::Result<()> {
    let router = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Dashboard running at http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Handler for GET /
async fn index_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let summary = state.table.summary();
    let page = html::generate_page(&state.layout, Some(&summary))?;
    Ok(Html(page))
}

/// Handler for GET /api/health
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::new(HealthResponse {
        status: "ok".to_string(),
        records: state.table.len(),
    }))
}

/// Handler for GET /api/layout
async fn layout_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Layout>> {
    Json(ApiResponse::new(state.layout.clone()))
}

/// Handler for GET /api/dataset
async fn dataset_handler(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<DatasetSummary>> {
    Json(ApiResponse::new(state.table.summary()))
}

/// Handler for POST /api/update
async fn update_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<ApiResponse<Vec<Update>>>, ApiError> {
    let selection = FilterSelection::from_values(&request.values, &state.layout);
    let updates = state
        .registry
        .dispatch(&state.table, request.changed.as_deref(), &selection)?;
    Ok(Json(ApiResponse::new(updates)))
}
