//! Dashboard page component.
//!
//! Overview counts computed from the live workspace listing.

use dioxus::prelude::*;

use super::load_workspaces;
use crate::app::components::Layout;
use crate::app::state::ListState;
use crate::app::toast::use_toasts;
use crate::app::Route;
use crate::model::Workspace;

/// Totals shown in the stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Overview {
    workspaces: usize,
    instances: u64,
}

impl Overview {
    fn from_workspaces(workspaces: &[Workspace]) -> Self {
        Self {
            workspaces: workspaces.len(),
            instances: workspaces.iter().map(|w| u64::from(w.instance_count)).sum(),
        }
    }
}

/// Dashboard page component.
#[component]
pub fn Dashboard() -> Element {
    let toasts = use_toasts();
    let list = use_signal(ListState::<Workspace>::default);

    use_effect(move || {
        spawn(async move {
            load_workspaces(list, toasts).await;
        });
    });

    let state = list.read();
    let loading = state.is_loading();
    let overview = Overview::from_workspaces(state.items());

    rsx! {
        Layout {
            title: "Dashboard".to_string(),
            nav_active: "dashboard".to_string(),

            div { class: "mb-8",
                h1 { class: "text-3xl font-bold mb-2", "Dashboard" }
                p { class: "text-gray-400", "Visão geral da sua operação WhatsApp" }
            }

            // Stats
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-6 mb-8",
                StatCard {
                    title: "Total de Workspaces",
                    value: overview.workspaces.to_string(),
                    description: "Cadastrados no sistema",
                    loading,
                }
                StatCard {
                    title: "Instâncias",
                    value: overview.instances.to_string(),
                    description: "Somadas em todos os workspaces",
                    loading,
                }
            }

            // Quick actions
            div { class: "card p-6 max-w-xl",
                h2 { class: "text-lg font-semibold", "Ações Rápidas" }
                p { class: "text-sm text-gray-400 mb-4", "Gerencie seus workspaces e instâncias" }
                div { class: "space-y-3",
                    Link {
                        to: Route::Workspaces {},
                        class: "btn btn-outline w-full",
                        "Ver todos os Workspaces"
                    }
                    Link {
                        to: Route::Workspaces {},
                        class: "btn btn-outline w-full",
                        "Criar novo Workspace"
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(
    title: &'static str,
    value: String,
    description: &'static str,
    loading: bool,
) -> Element {
    rsx! {
        div { class: "card p-6",
            p { class: "text-sm font-medium text-gray-400", "{title}" }
            if loading {
                div { class: "skeleton h-8 w-16 mt-2", aria_busy: "true" }
            } else {
                div { class: "text-2xl font-bold mt-2", "{value}" }
            }
            p { class: "text-xs text-gray-500 mt-1", "{description}" }
        }
    }
}
