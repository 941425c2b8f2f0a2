//! Single-field creation dialog shared by the workspace and instance pages.

use dioxus::prelude::*;

use crate::model::validate_name;

#[derive(Props, Clone, PartialEq)]
pub struct CreateModalProps {
    pub title: String,
    pub description: String,
    pub label: String,
    pub placeholder: String,
    pub submit_label: String,
    /// A create request is in flight
    pub busy: bool,
    /// Receives the raw input; the page validates before calling the server
    pub on_submit: EventHandler<String>,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn CreateModal(props: CreateModalProps) -> Element {
    let mut name = use_signal(String::new);
    let busy = props.busy;
    let can_submit = !busy && validate_name(&name()).is_ok();

    let on_close = props.on_close;
    let close = move |_: MouseEvent| {
        if !busy {
            name.set(String::new());
            on_close.call(());
        }
    };

    let on_submit = props.on_submit;

    rsx! {
        div {
            class: "fixed inset-0 bg-black/60 flex items-center justify-center z-40",
            onclick: close,

            div {
                class: "card p-6 max-w-md w-full mx-4",
                role: "dialog",
                aria_modal: "true",
                onclick: move |e| e.stop_propagation(),

                // Header
                div { class: "flex items-start justify-between mb-2",
                    h2 { class: "text-lg font-semibold", "{props.title}" }
                    button {
                        class: "text-gray-400 hover:text-white text-xl",
                        aria_label: "Fechar",
                        disabled: busy,
                        onclick: close,
                        "×"
                    }
                }
                p { class: "text-sm text-gray-400 mb-6", "{props.description}" }

                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        if validate_name(&name()).is_ok() && !busy {
                            on_submit.call(name());
                        }
                    },

                    div { class: "mb-6 space-y-2",
                        label { class: "block text-sm font-medium", r#for: "create-name", "{props.label}" }
                        input {
                            id: "create-name",
                            class: "input",
                            r#type: "text",
                            placeholder: "{props.placeholder}",
                            value: "{name}",
                            disabled: busy,
                            autofocus: true,
                            oninput: move |e| name.set(e.value()),
                        }
                    }

                    div { class: "flex items-center gap-2 justify-end",
                        button {
                            r#type: "button",
                            class: "btn btn-outline",
                            disabled: busy,
                            onclick: close,
                            "Cancelar"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: !can_submit,
                            aria_busy: if busy { "true" } else { "false" },
                            if busy { "Criando..." } else { "{props.submit_label}" }
                        }
                    }
                }
            }
        }
    }
}
