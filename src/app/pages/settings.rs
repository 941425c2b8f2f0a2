//! Settings page component.
//!
//! Read-only view of the webhook backend the server proxies to.

use dioxus::prelude::*;

use crate::app::api::fetch_settings;
use crate::app::components::Layout;

/// Settings page component.
#[component]
pub fn Settings() -> Element {
    let settings = use_resource(|| async { fetch_settings().await.ok() });

    let content = match settings.read().clone() {
        None => rsx! {
            div { class: "space-y-3", aria_busy: "true",
                div { class: "skeleton h-4 w-1/3" }
                div { class: "skeleton h-4 w-1/4" }
            }
        },
        Some(None) => rsx! {
            p { class: "text-red-400", "Não foi possível carregar as configurações do servidor." }
        },
        Some(Some(s)) => rsx! {
            dl { class: "space-y-4",
                div {
                    dt { class: "text-sm font-medium text-gray-400", "URL base do webhook" }
                    dd { code { class: "text-sm font-mono break-all", "{s.webhook_base_url}" } }
                }
                div {
                    dt { class: "text-sm font-medium text-gray-400", "Tempo limite das requisições" }
                    dd { "{s.request_timeout_secs} s" }
                }
            }
        },
    };

    rsx! {
        Layout {
            title: "Configurações".to_string(),
            nav_active: "settings".to_string(),

            div { class: "max-w-4xl",
                div { class: "mb-8",
                    h1 { class: "text-3xl font-bold mb-2", "Configurações" }
                    p { class: "text-gray-400", "Gerencie as configurações do sistema" }
                }

                div { class: "card p-6 space-y-4",
                    div {
                        h2 { class: "text-lg font-semibold", "Backend de automação" }
                        p { class: "text-sm text-gray-400",
                            "Definido no arquivo de configuração do servidor ou pelas variáveis WSC_WEBHOOK__BASE_URL e WSC_WEBHOOK__TIMEOUT_SECS."
                        }
                    }
                    {content}
                }
            }
        }
    }
}
