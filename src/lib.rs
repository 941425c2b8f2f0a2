//! Workspace Console
//!
//! Admin console for messaging-channel workspaces and their instances, backed
//! by a webhook automation service.
//!
//! This library provides:
//! - Wire records and view models for workspaces and instances
//! - A client for the webhook backend (list, create, delete)
//! - An HTTP API that proxies the backend for the browser
//! - Web UI (Dioxus + Tailwind CSS)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Records, view models and field mapping (shared)
pub mod model;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod webhook;
