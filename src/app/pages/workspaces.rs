//! Workspaces listing page component.
//!
//! Grid of workspace cards with create and delete.

use dioxus::prelude::*;

use super::load_workspaces;
use crate::app::api;
use crate::app::components::{CreateModal, EmptyState, Layout, SkeletonGrid, SkeletonKind, WorkspaceCard};
use crate::app::state::ListState;
use crate::app::toast::use_toasts;
use crate::app::Route;
use crate::model::{validate_name, Workspace};

/// Workspaces listing page component.
#[component]
pub fn Workspaces() -> Element {
    let mut toasts = use_toasts();
    let mut list = use_signal(ListState::<Workspace>::default);
    let mut modal_open = use_signal(|| false);
    let mut creating = use_signal(|| false);

    // Effects only run in the browser, after hydration
    use_effect(move || {
        spawn(async move {
            load_workspaces(list, toasts).await;
        });
    });

    let create_workspace = move |raw_name: String| {
        let Ok(name) = validate_name(&raw_name) else {
            return;
        };
        spawn(async move {
            creating.set(true);
            match api::create_workspace(name.clone()).await {
                Ok(()) => {
                    modal_open.set(false);
                    toasts.success(
                        "Workspace criado",
                        &format!("O workspace \"{}\" foi criado com sucesso.", name),
                    );
                    load_workspaces(list, toasts).await;
                }
                Err(e) => toasts.network_error("Não foi possível criar o workspace.", &e),
            }
            creating.set(false);
        });
    };

    let delete_workspace = move |workspace: Workspace| {
        spawn(async move {
            let removed = list.write().remove(&workspace.id);
            let Some(removed) = removed else {
                return;
            };
            match api::delete_workspace(&workspace.id).await {
                Ok(()) => toasts.destructive(
                    "Workspace excluído",
                    &format!("O workspace \"{}\" foi excluído.", workspace.name),
                ),
                Err(e) => {
                    list.write().restore(removed);
                    toasts.network_error(
                        &format!("Não foi possível excluir \"{}\".", workspace.name),
                        &e,
                    );
                }
            }
        });
    };

    let state = list.read();
    let content = if state.is_loading() {
        rsx! {
            SkeletonGrid { kind: SkeletonKind::Workspace }
        }
    } else if state.is_empty() {
        rsx! {
            EmptyState {
                icon: "📁".to_string(),
                title: "Crie seu primeiro Workspace".to_string(),
                description: "Workspaces ajudam a organizar suas instâncias por cliente ou projeto.".to_string(),
                action_label: "Criar seu primeiro Workspace".to_string(),
                on_action: move |_| modal_open.set(true),
            }
        }
    } else {
        let workspaces = state.items().to_vec();
        rsx! {
            div { class: "instance-grid",
                for workspace in workspaces {
                    WorkspaceCard {
                        key: "{workspace.id}",
                        workspace: workspace.clone(),
                        on_open: {
                            let workspace_id = workspace.id.clone();
                            move |_| {
                                navigator().push(Route::WorkspaceDetail {
                                    workspace_id: workspace_id.clone(),
                                });
                            }
                        },
                        on_delete: {
                            let workspace = workspace.clone();
                            move |_| delete_workspace(workspace.clone())
                        },
                    }
                }
            }
        }
    };

    rsx! {
        Layout {
            title: "Workspaces".to_string(),
            nav_active: "workspaces".to_string(),

            div { class: "flex items-center justify-between mb-8",
                div {
                    h1 { class: "text-3xl font-bold", "Workspaces" }
                    p { class: "text-gray-400 mt-1", "Organize suas instâncias por cliente ou projeto" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| modal_open.set(true),
                    "+ Novo Workspace"
                }
            }

            section { id: "workspaces",
                {content}
            }

            if modal_open() {
                CreateModal {
                    title: "Criar Novo Workspace".to_string(),
                    description: "Digite um nome para organizar suas instâncias neste workspace.".to_string(),
                    label: "Nome do Workspace".to_string(),
                    placeholder: "Ex: Projeto IFP".to_string(),
                    submit_label: "Criar Workspace".to_string(),
                    busy: creating(),
                    on_submit: create_workspace,
                    on_close: move |_| modal_open.set(false),
                }
            }
        }
    }
}
