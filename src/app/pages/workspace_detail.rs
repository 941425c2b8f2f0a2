//! Instances of a single workspace.

use dioxus::prelude::*;

use super::load_instances;
use crate::app::api;
use crate::app::components::{
    CreateModal, EmptyState, InstanceCard, Layout, SkeletonGrid, SkeletonKind,
};
use crate::app::state::ListState;
use crate::app::toast::use_toasts;
use crate::app::Route;
use crate::model::{validate_name, Instance};

/// Shown while the workspace name is unknown or the lookup failed.
const FALLBACK_TITLE: &str = "Workspace";

#[component]
pub fn WorkspaceDetail(workspace_id: String) -> Element {
    let mut toasts = use_toasts();
    let mut list = use_signal(ListState::<Instance>::default);
    let mut modal_open = use_signal(|| false);
    let mut creating = use_signal(|| false);

    // The route param changes without remounting when navigating between workspaces
    use_effect(use_reactive((&workspace_id,), move |(workspace_id,)| {
        spawn(async move {
            load_instances(list, toasts, workspace_id).await;
        });
    }));

    let workspace_name = use_resource(use_reactive((&workspace_id,), |(workspace_id,)| async move {
        api::list_workspaces()
            .await
            .ok()
            .and_then(|all| all.into_iter().find(|w| w.id == workspace_id))
            .map(|w| w.name)
    }));
    let title = workspace_name
        .read()
        .clone()
        .flatten()
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());

    let create_instance = {
        let workspace_id = workspace_id.clone();
        move |raw_name: String| {
            let Ok(name) = validate_name(&raw_name) else {
                return;
            };
            let workspace_id = workspace_id.clone();
            spawn(async move {
                creating.set(true);
                match api::create_instance(name.clone(), workspace_id.clone()).await {
                    Ok(()) => {
                        modal_open.set(false);
                        toasts.success(
                            "Instância criada",
                            &format!("A instância \"{}\" foi criada com sucesso.", name),
                        );
                        load_instances(list, toasts, workspace_id).await;
                    }
                    Err(e) => toasts.network_error("Não foi possível criar a instância.", &e),
                }
                creating.set(false);
            });
        }
    };

    let delete_instance = move |instance: Instance| {
        spawn(async move {
            let removed = list.write().remove(&instance.id);
            let Some(removed) = removed else {
                return;
            };
            match api::delete_instance(&instance.id).await {
                Ok(()) => toasts.destructive(
                    "Instância excluída",
                    &format!("A instância \"{}\" foi excluída.", instance.name),
                ),
                Err(e) => {
                    list.write().restore(removed);
                    toasts.network_error(
                        &format!("Não foi possível excluir \"{}\".", instance.name),
                        &e,
                    );
                }
            }
        });
    };

    let state = list.read();
    let content = if state.is_loading() {
        rsx! {
            SkeletonGrid { kind: SkeletonKind::Instance }
        }
    } else if state.is_empty() {
        rsx! {
            EmptyState {
                icon: "📱".to_string(),
                title: "Nenhuma instância ainda".to_string(),
                description: "Crie uma instância para conectar um número de WhatsApp a este workspace.".to_string(),
                action_label: "Criar primeira Instância".to_string(),
                on_action: move |_| modal_open.set(true),
            }
        }
    } else {
        let instances = state.items().to_vec();
        rsx! {
            div { class: "instance-grid",
                for instance in instances {
                    InstanceCard {
                        key: "{instance.id}",
                        instance: instance.clone(),
                        on_open: {
                            let workspace_id = workspace_id.clone();
                            let instance_id = instance.id.clone();
                            move |_| {
                                navigator().push(Route::InstanceDetail {
                                    workspace_id: workspace_id.clone(),
                                    instance_id: instance_id.clone(),
                                });
                            }
                        },
                        on_delete: {
                            let instance = instance.clone();
                            move |_| delete_instance(instance.clone())
                        },
                    }
                }
            }
        }
    };

    rsx! {
        Layout {
            title: "{title}",
            nav_active: "workspaces".to_string(),

            Link {
                to: Route::Workspaces {},
                class: "inline-flex items-center text-sm text-gray-400 hover:text-white mb-6",
                "← Voltar para Workspaces"
            }

            div { class: "flex items-center justify-between mb-8",
                div {
                    h1 { class: "text-3xl font-bold", "{title}" }
                    p { class: "text-gray-400 mt-1", "Gerencie as instâncias de WhatsApp deste workspace" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| modal_open.set(true),
                    "+ Nova Instância"
                }
            }

            section { id: "instances",
                {content}
            }

            if modal_open() {
                CreateModal {
                    title: "Criar Nova Instância".to_string(),
                    description: "Digite um nome para identificar esta instância de WhatsApp.".to_string(),
                    label: "Nome da Instância".to_string(),
                    placeholder: "Ex: Atendimento Principal".to_string(),
                    submit_label: "Criar Instância".to_string(),
                    busy: creating(),
                    on_submit: create_instance,
                    on_close: move |_| modal_open.set(false),
                }
            }
        }
    }
}
