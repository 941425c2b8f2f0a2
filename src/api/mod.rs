//! HTTP API handlers
//!
//! The browser never talks to the webhook backend directly; these routes
//! forward to it so the backend URL stays server-side configuration.

use crate::model::{CreateInstanceRequest, CreateWorkspaceRequest, InstanceRecord, WorkspaceRecord};
use crate::webhook::{WebhookClient, WebhookError};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub webhook: Arc<WebhookClient>,
}

impl AppState {
    pub fn new(webhook: WebhookClient) -> Self {
        Self {
            webhook: Arc::new(webhook),
        }
    }
}

/// Error body returned by every failing route
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Webhook failure mapped onto an HTTP response
pub struct ApiError(WebhookError);

impl From<WebhookError> for ApiError {
    fn from(err: WebhookError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            WebhookError::InvalidName(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::BAD_GATEWAY,
        };
        tracing::warn!(%status, error = %self.0, "API request failed");
        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

/// General status response
#[derive(Serialize, Deserialize)]
pub struct StatusResponse {
    pub service: String,
    pub version: String,
}

/// Backend settings shown on the settings page
#[derive(Serialize, Deserialize)]
pub struct SettingsResponse {
    pub webhook_base_url: String,
    pub request_timeout_secs: u64,
}

/// GET /status - Service health check
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/settings - Webhook backend configuration (read-only)
pub async fn settings_handler(State(state): State<AppState>) -> Json<SettingsResponse> {
    Json(SettingsResponse {
        webhook_base_url: state.webhook.base_url().to_string(),
        request_timeout_secs: state.webhook.timeout().as_secs(),
    })
}

/// GET /api/workspaces
pub async fn list_workspaces_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<WorkspaceRecord>>> {
    Ok(Json(state.webhook.list_workspaces().await?))
}

/// POST /api/workspaces
pub async fn create_workspace_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateWorkspaceRequest>,
) -> ApiResult<StatusCode> {
    state.webhook.create_workspace(&req.nome_workspace).await?;
    Ok(StatusCode::CREATED)
}

/// DELETE /api/workspaces/{id}
pub async fn delete_workspace_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.webhook.delete_workspace(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/workspaces/{id}/instances
pub async fn list_instances_handler(
    State(state): State<AppState>,
    Path(workspace_id): Path<String>,
) -> ApiResult<Json<Vec<InstanceRecord>>> {
    Ok(Json(state.webhook.list_instances(&workspace_id).await?))
}

/// POST /api/instances
pub async fn create_instance_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateInstanceRequest>,
) -> ApiResult<StatusCode> {
    state
        .webhook
        .create_instance(&req.nome_instancia, &req.workspace_id)
        .await?;
    Ok(StatusCode::CREATED)
}

/// DELETE /api/instances/{id}
pub async fn delete_instance_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.webhook.delete_instance(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// All API routes, ready to merge with the Dioxus router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status_handler))
        .route("/api/settings", get(settings_handler))
        .route(
            "/api/workspaces",
            get(list_workspaces_handler).post(create_workspace_handler),
        )
        .route("/api/workspaces/{id}", delete(delete_workspace_handler))
        .route("/api/workspaces/{id}/instances", get(list_instances_handler))
        .route("/api/instances", post(create_instance_handler))
        .route("/api/instances/{id}", delete(delete_instance_handler))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
