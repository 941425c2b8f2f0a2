//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod api;
pub mod clipboard;
pub mod components;
pub mod pages;
pub mod state;
pub mod toast;

use pages::{Dashboard, InstanceDetail, NotFound, Settings, WorkspaceDetail, Workspaces};
use toast::use_toast_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // One toast queue for all pages
    use_toast_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/workspaces")]
    Workspaces {},
    #[route("/workspaces/:workspace_id")]
    WorkspaceDetail { workspace_id: String },
    #[route("/workspaces/:workspace_id/instances/:instance_id")]
    InstanceDetail {
        workspace_id: String,
        instance_id: String,
    },
    #[route("/settings")]
    Settings {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_str("/").ok(), Some(Route::Dashboard {}));
        assert_eq!(
            Route::from_str("/workspaces/7").ok(),
            Some(Route::WorkspaceDetail {
                workspace_id: "7".to_string()
            })
        );
        assert_eq!(
            Route::from_str("/workspaces/7/instances/abc").ok(),
            Some(Route::InstanceDetail {
                workspace_id: "7".to_string(),
                instance_id: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert!(matches!(
            Route::from_str("/nope/really"),
            Ok(Route::NotFound { .. })
        ));
    }

    #[test]
    fn test_route_display() {
        let route = Route::InstanceDetail {
            workspace_id: "7".to_string(),
            instance_id: "abc".to_string(),
        };
        assert_eq!(route.to_string(), "/workspaces/7/instances/abc");
    }
}
