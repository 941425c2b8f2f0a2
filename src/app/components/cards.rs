//! Workspace and instance cards for the listing grids.

use dioxus::prelude::*;

use super::StatusBadge;
use crate::model::{Instance, Workspace};

/// Delete button shown in a card's corner; doesn't open the card.
#[component]
fn DeleteButton(on_delete: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "btn btn-ghost btn-sm btn-danger",
            r#type: "button",
            title: "Excluir",
            onclick: move |e| {
                e.stop_propagation();
                on_delete.call(());
            },
            "Excluir"
        }
    }
}

#[component]
pub fn WorkspaceCard(
    workspace: Workspace,
    on_open: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    let instances = workspace.instance_label();

    rsx! {
        div {
            class: "card card-link p-6 space-y-4",
            tabindex: "0",
            onclick: move |_| on_open.call(()),
            onkeydown: move |e| {
                if e.key() == Key::Enter || e.key() == Key::Character(" ".to_string()) {
                    e.prevent_default();
                    on_open.call(());
                }
            },

            div { class: "flex items-start justify-between gap-2",
                h3 { class: "text-lg font-semibold leading-tight", "{workspace.name}" }
                DeleteButton { on_delete }
            }

            p { class: "text-sm font-medium text-gray-300", "{instances}" }

            div { class: "pt-2 border-t border-gray-800",
                p { class: "text-xs text-gray-500", "Criado em {workspace.created_at}" }
            }
        }
    }
}

#[component]
pub fn InstanceCard(
    instance: Instance,
    on_open: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "card card-link p-6 space-y-4",
            tabindex: "0",
            onclick: move |_| on_open.call(()),
            onkeydown: move |e| {
                if e.key() == Key::Enter || e.key() == Key::Character(" ".to_string()) {
                    e.prevent_default();
                    on_open.call(());
                }
            },

            div { class: "flex items-start justify-between gap-2",
                div {
                    h3 { class: "text-lg font-semibold leading-tight", "{instance.name}" }
                    div { class: "mt-2",
                        StatusBadge { status: instance.status }
                    }
                }
                DeleteButton { on_delete }
            }

            p { class: "text-sm font-medium text-gray-300", "📞 {instance.phone_number}" }

            div { class: "space-y-1 pt-2 border-t border-gray-800",
                p { class: "text-xs text-gray-500", "Criado em {instance.created_at}" }
                p { class: "text-xs text-gray-500", "Última atividade: {instance.last_activity}" }
            }
        }
    }
}
