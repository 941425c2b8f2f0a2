//! Dioxus fullstack page components.
//!
//! These pages use Dioxus signals and the console API instead of inline JavaScript.

mod dashboard;
mod instance_detail;
mod not_found;
mod settings;
mod workspace_detail;
mod workspaces;

pub use dashboard::Dashboard;
pub use instance_detail::InstanceDetail;
pub use not_found::NotFound;
pub use settings::Settings;
pub use workspace_detail::WorkspaceDetail;
pub use workspaces::Workspaces;

use dioxus::prelude::*;

use crate::app::api;
use crate::app::state::ListState;
use crate::app::toast::Toasts;
use crate::model::{Instance, Workspace};

/// Re-fetch the workspace listing into `list`. Returns whether it succeeded.
async fn load_workspaces(mut list: Signal<ListState<Workspace>>, mut toasts: Toasts) -> bool {
    list.write().begin_loading();
    let result = api::list_workspaces().await;
    let applied = list.write().apply_fetch(result);
    match applied {
        Ok(()) => true,
        Err(e) => {
            toasts.network_error("Não foi possível carregar os workspaces.", &e);
            false
        }
    }
}

/// Re-fetch one workspace's instances into `list`. Returns whether it succeeded.
async fn load_instances(
    mut list: Signal<ListState<Instance>>,
    mut toasts: Toasts,
    workspace_id: String,
) -> bool {
    list.write().begin_loading();
    let result = api::list_instances(&workspace_id).await;
    let applied = list.write().apply_fetch(result);
    match applied {
        Ok(()) => true,
        Err(e) => {
            toasts.network_error("Não foi possível carregar as instâncias.", &e);
            false
        }
    }
}
