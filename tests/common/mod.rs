//! In-process stand-in for the webhook automation backend.

#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use workspace_console::config::WebhookConfig;
use workspace_console::webhook::WebhookClient;

#[derive(Default)]
pub struct Backend {
    pub workspaces: Vec<Value>,
    pub instances: Vec<Value>,
    /// `"<METHOD> <path?query>"` for every request received
    pub requests: Vec<String>,
    /// Answer every request with this status instead
    pub fail_with: Option<StatusCode>,
    /// Answer listings with this body instead
    pub listing_override: Option<Value>,
    pub next_id: u64,
}

pub type Shared = Arc<Mutex<Backend>>;

type Params = Query<HashMap<String, String>>;

fn id_of(record: &Value) -> String {
    match &record["id"] {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Record the request; returns a canned response when failing.
fn intercept(backend: &mut Backend, method: &Method, uri: &Uri) -> Option<Response> {
    backend.requests.push(format!("{} {}", method, uri));
    backend.fail_with.map(IntoResponse::into_response)
}

async fn list_workspaces(State(shared): State<Shared>, method: Method, uri: Uri) -> Response {
    let mut backend = shared.lock().unwrap();
    if let Some(response) = intercept(&mut backend, &method, &uri) {
        return response;
    }
    if let Some(body) = &backend.listing_override {
        return Json(body.clone()).into_response();
    }
    Json(Value::Array(backend.workspaces.clone())).into_response()
}

async fn create_workspace(
    State(shared): State<Shared>,
    method: Method,
    uri: Uri,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = shared.lock().unwrap();
    if let Some(response) = intercept(&mut backend, &method, &uri) {
        return response;
    }
    backend.next_id += 1;
    let record = json!({
        "id": backend.next_id,
        "nome_workspace": body["nome_workspace"],
        "instance_count": "0",
        "created_at": "2025-08-01T12:00:00.000Z",
    });
    backend.workspaces.push(record);
    Json(json!({ "ok": true })).into_response()
}

async fn delete_workspace(
    State(shared): State<Shared>,
    method: Method,
    uri: Uri,
    Query(params): Params,
) -> Response {
    let mut backend = shared.lock().unwrap();
    if let Some(response) = intercept(&mut backend, &method, &uri) {
        return response;
    }
    let id = params.get("id").cloned().unwrap_or_default();
    backend.workspaces.retain(|w| id_of(w) != id);
    StatusCode::OK.into_response()
}

async fn list_instances(
    State(shared): State<Shared>,
    method: Method,
    uri: Uri,
    Query(params): Params,
) -> Response {
    let mut backend = shared.lock().unwrap();
    if let Some(response) = intercept(&mut backend, &method, &uri) {
        return response;
    }
    if let Some(body) = &backend.listing_override {
        return Json(body.clone()).into_response();
    }
    let workspace_id = params.get("workspaceId").cloned().unwrap_or_default();
    let matching: Vec<Value> = backend
        .instances
        .iter()
        .filter(|i| i["workspace_id"].as_str() == Some(workspace_id.as_str()))
        .cloned()
        .collect();
    Json(Value::Array(matching)).into_response()
}

async fn create_instance(
    State(shared): State<Shared>,
    method: Method,
    uri: Uri,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = shared.lock().unwrap();
    if let Some(response) = intercept(&mut backend, &method, &uri) {
        return response;
    }
    backend.next_id += 1;
    let record = json!({
        "id": format!("inst-{}", backend.next_id),
        "nome_instancia": body["nome_instancia"],
        "workspace_id": body["workspace_id"],
        "status_whatsapp": "CONNECTING",
        "created_at": "2025-08-08",
        "qrcode": "iVBORw0KGgo=",
    });
    backend.instances.push(record);
    Json(json!({ "ok": true })).into_response()
}

async fn delete_instance(
    State(shared): State<Shared>,
    method: Method,
    uri: Uri,
    Query(params): Params,
) -> Response {
    let mut backend = shared.lock().unwrap();
    if let Some(response) = intercept(&mut backend, &method, &uri) {
        return response;
    }
    let id = params.get("id").cloned().unwrap_or_default();
    backend.instances.retain(|i| id_of(i) != id);
    StatusCode::OK.into_response()
}

/// Serve `backend` on an ephemeral port; returns its webhook base URL.
pub async fn spawn_backend(backend: Backend) -> (String, Shared) {
    let shared: Shared = Arc::new(Mutex::new(backend));
    let app = Router::new()
        .route("/webhook/workspaces", get(list_workspaces))
        .route(
            "/webhook/workspace",
            axum::routing::post(create_workspace).delete(delete_workspace),
        )
        .route("/webhook/instancias", get(list_instances))
        .route(
            "/webhook/instancia",
            axum::routing::post(create_instance).delete(delete_instance),
        )
        .with_state(shared.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/webhook", addr), shared)
}

pub fn client_for(base_url: &str) -> WebhookClient {
    WebhookClient::new(&WebhookConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    })
    .unwrap()
}

pub fn request_count(shared: &Shared) -> usize {
    shared.lock().unwrap().requests.len()
}
