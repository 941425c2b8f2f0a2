//! Browser-side calls to the console API.
//!
//! Requests go through `fetch` in the browser. During server-side rendering
//! there is no browser, so every call reports [`FetchError::Unavailable`] and
//! pages render their loading state until hydration re-runs them.

use serde::{de::DeserializeOwned, Serialize};

use crate::model::{
    parse_array, CreateInstanceRequest, CreateWorkspaceRequest, Instance, InstanceRecord,
    Workspace, WorkspaceRecord,
};

/// Single user-facing text for every failed call.
pub const NETWORK_ERROR_MESSAGE: &str = "Erro de rede";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("not available during server rendering")]
    Unavailable,
}

impl FetchError {
    /// HTTP failures and malformed payloads read the same to the user.
    pub fn user_message(&self) -> &'static str {
        NETWORK_ERROR_MESSAGE
    }
}

/// Status code and body text of a completed request.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Require a 2xx status.
pub fn check_status(response: &RawResponse) -> Result<(), FetchError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(FetchError::Status(response.status))
    }
}

/// Require a 2xx status and a JSON array body.
pub fn decode_list<T: DeserializeOwned>(response: &RawResponse) -> Result<Vec<T>, FetchError> {
    check_status(response)?;
    let value: serde_json::Value = serde_json::from_str(&response.body)
        .map_err(|e| FetchError::Malformed(e.to_string()))?;
    parse_array(value).map_err(|e| FetchError::Malformed(e.to_string()))
}

/// Require a 2xx status and decode a JSON body.
pub fn decode_json<T: DeserializeOwned>(response: &RawResponse) -> Result<T, FetchError> {
    check_status(response)?;
    serde_json::from_str(&response.body).map_err(|e| FetchError::Malformed(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn js_error(err: wasm_bindgen::JsValue) -> FetchError {
    FetchError::Network(format!("{:?}", err))
}

#[cfg(target_arch = "wasm32")]
async fn send(method: &str, url: &str, body: Option<String>) -> Result<RawResponse, FetchError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let opts = web_sys::RequestInit::new();
    opts.set_method(method);
    if let Some(ref body) = body {
        opts.set_body(&wasm_bindgen::JsValue::from_str(body));
    }

    let request = web_sys::Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    let window =
        web_sys::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    Ok(RawResponse {
        status: response.status(),
        body: text.as_string().unwrap_or_default(),
    })
}

#[cfg(not(target_arch = "wasm32"))]
async fn send(_method: &str, _url: &str, _body: Option<String>) -> Result<RawResponse, FetchError> {
    Err(FetchError::Unavailable)
}

fn encode<B: Serialize>(body: &B) -> Result<String, FetchError> {
    serde_json::to_string(body).map_err(|e| FetchError::Malformed(e.to_string()))
}

/// GET a JSON document.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    decode_json(&send("GET", url, None).await?)
}

/// GET a JSON array.
pub async fn fetch_list<T: DeserializeOwned>(url: &str) -> Result<Vec<T>, FetchError> {
    decode_list(&send("GET", url, None).await?)
}

/// POST a JSON body, ignoring the response body.
pub async fn post_json_no_response<B: Serialize>(url: &str, body: &B) -> Result<(), FetchError> {
    check_status(&send("POST", url, Some(encode(body)?)).await?)
}

/// DELETE, ignoring the response body.
pub async fn delete(url: &str) -> Result<(), FetchError> {
    check_status(&send("DELETE", url, None).await?)
}

// =============================================================================
// Console API
// =============================================================================

/// Backend settings shown on the settings page
#[derive(Clone, Debug, Default, serde::Deserialize, PartialEq)]
pub struct BackendSettings {
    pub webhook_base_url: String,
    pub request_timeout_secs: u64,
}

pub async fn list_workspaces() -> Result<Vec<Workspace>, FetchError> {
    let records = fetch_list::<WorkspaceRecord>("/api/workspaces").await?;
    Ok(records.into_iter().map(Workspace::from).collect())
}

pub async fn create_workspace(name: String) -> Result<(), FetchError> {
    let body = CreateWorkspaceRequest {
        nome_workspace: name,
    };
    post_json_no_response("/api/workspaces", &body).await
}

pub async fn delete_workspace(id: &str) -> Result<(), FetchError> {
    delete(&format!("/api/workspaces/{}", urlencoding::encode(id))).await
}

pub async fn list_instances(workspace_id: &str) -> Result<Vec<Instance>, FetchError> {
    let url = format!(
        "/api/workspaces/{}/instances",
        urlencoding::encode(workspace_id)
    );
    let records = fetch_list::<InstanceRecord>(&url).await?;
    Ok(records.into_iter().map(Instance::from).collect())
}

pub async fn create_instance(name: String, workspace_id: String) -> Result<(), FetchError> {
    let body = CreateInstanceRequest {
        nome_instancia: name,
        workspace_id,
    };
    post_json_no_response("/api/instances", &body).await
}

pub async fn delete_instance(id: &str) -> Result<(), FetchError> {
    delete(&format!("/api/instances/{}", urlencoding::encode(id))).await
}

pub async fn fetch_settings() -> Result<BackendSettings, FetchError> {
    fetch_json("/api/settings").await
}
