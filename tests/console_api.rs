#![cfg(feature = "server")]

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{client_for, request_count, spawn_backend, Backend, Shared};
use workspace_console::api::{router, AppState, ErrorBody, SettingsResponse};

async fn console(backend: Backend) -> (Router, Shared) {
    let (base_url, shared) = spawn_backend(backend).await;
    (router(AppState::new(client_for(&base_url))), shared)
}

async fn call(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app.oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn status_reports_service() {
    let (app, _) = console(Backend::default()).await;
    let (status, body) = call(app, "GET", "/status", None).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["service"], "workspace-console");
}

#[tokio::test]
async fn settings_expose_backend() {
    let (base_url, _) = spawn_backend(Backend::default()).await;
    let app = router(AppState::new(client_for(&format!("{}/", base_url))));

    let (status, body) = call(app, "GET", "/api/settings", None).await;
    assert_eq!(status, StatusCode::OK);
    let settings: SettingsResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(settings.webhook_base_url, base_url);
    assert_eq!(settings.request_timeout_secs, 5);
}

#[tokio::test]
async fn lists_workspaces_through_proxy() {
    let (app, _) = console(Backend {
        workspaces: vec![json!({"id": 7, "nome_workspace": "Acme", "instance_count": "2"})],
        ..Default::default()
    })
    .await;

    let (status, body) = call(app, "GET", "/api/workspaces", None).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body[0]["id"], "7");
    assert_eq!(body[0]["instance_count"], 2);
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let (app, _) = console(Backend {
        fail_with: Some(StatusCode::SERVICE_UNAVAILABLE),
        ..Default::default()
    })
    .await;

    let (status, body) = call(app, "GET", "/api/workspaces/3/instances", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let error: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert!(error.error.contains("503"));
}

#[tokio::test]
async fn blank_name_is_bad_request() {
    let (app, backend) = console(Backend::default()).await;

    let (status, _) = call(
        app.clone(),
        "POST",
        "/api/workspaces",
        Some(json!({"nome_workspace": "  "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(
        app,
        "POST",
        "/api/instances",
        Some(json!({"nome_instancia": "", "workspace_id": "1"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(request_count(&backend), 0);
}

#[tokio::test]
async fn create_and_delete_workspace() {
    let (app, backend) = console(Backend::default()).await;

    let (status, _) = call(
        app.clone(),
        "POST",
        "/api/workspaces",
        Some(json!({"nome_workspace": "Projeto IFP"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(backend.lock().unwrap().workspaces.len(), 1);

    let (status, _) = call(app, "DELETE", "/api/workspaces/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(backend.lock().unwrap().workspaces.is_empty());
}

#[tokio::test]
async fn create_and_delete_instance() {
    let (app, backend) = console(Backend::default()).await;

    let (status, _) = call(
        app.clone(),
        "POST",
        "/api/instances",
        Some(json!({"nome_instancia": "Suporte", "workspace_id": "4"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(app.clone(), "GET", "/api/workspaces/4/instances", None).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    let id = body[0]["id"].as_str().unwrap().to_string();
    assert_eq!(body[0]["nome_instancia"], "Suporte");

    let (status, _) = call(app, "DELETE", &format!("/api/instances/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(backend.lock().unwrap().instances.is_empty());
}
