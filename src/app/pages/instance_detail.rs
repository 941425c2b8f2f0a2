//! Instance detail page: QR connection flow and API credentials.

use dioxus::prelude::*;

use crate::app::api::{self, FetchError};
use crate::app::clipboard::copy_text;
use crate::app::components::{DetailSkeleton, Layout, StatusBadge};
use crate::app::toast::use_toasts;
use crate::app::Route;
use crate::model::{Instance, MISSING_LABEL};

/// The backend has no single-instance endpoint, so pick it out of the workspace listing.
async fn fetch_instance(workspace_id: &str, instance_id: &str) -> Result<Option<Instance>, FetchError> {
    let instances = api::list_instances(workspace_id).await?;
    Ok(instances.into_iter().find(|i| i.id == instance_id))
}

#[component]
pub fn InstanceDetail(workspace_id: String, instance_id: String) -> Element {
    let mut toasts = use_toasts();
    let mut instance = use_signal(|| None::<Instance>);
    let mut loading = use_signal(|| true);
    let mut refreshing = use_signal(|| false);

    use_effect(use_reactive(
        (&workspace_id, &instance_id),
        move |(workspace_id, instance_id)| {
            spawn(async move {
                loading.set(true);
                match fetch_instance(&workspace_id, &instance_id).await {
                    Ok(found) => instance.set(found),
                    Err(e) => {
                        instance.set(None);
                        toasts.network_error("Não foi possível carregar a instância.", &e);
                    }
                }
                loading.set(false);
            });
        },
    ));

    let regenerate_qr = {
        let workspace_id = workspace_id.clone();
        let instance_id = instance_id.clone();
        move |_| {
            let workspace_id = workspace_id.clone();
            let instance_id = instance_id.clone();
            spawn(async move {
                refreshing.set(true);
                match fetch_instance(&workspace_id, &instance_id).await {
                    Ok(Some(fresh)) => {
                        instance.set(Some(fresh));
                        toasts.success(
                            "QR Code atualizado",
                            "Escaneie o QR code com seu WhatsApp para conectar.",
                        );
                    }
                    Ok(None) => instance.set(None),
                    Err(e) => toasts.network_error("Não foi possível gerar um novo QR code.", &e),
                }
                refreshing.set(false);
            });
        }
    };

    let back = Route::WorkspaceDetail {
        workspace_id: workspace_id.clone(),
    };

    if loading() {
        return rsx! {
            Layout { title: "Instância", nav_active: "workspaces".to_string(),
                DetailSkeleton {}
            }
        };
    }

    let Some(current) = instance() else {
        return rsx! {
            Layout { title: "Instância não encontrada", nav_active: "workspaces".to_string(),
                div { class: "card p-8 max-w-lg mx-auto text-center",
                    h1 { class: "text-xl font-semibold mb-2", "Instância não encontrada" }
                    p { class: "text-gray-400 mb-6",
                        "A instância solicitada não existe ou foi removida deste workspace."
                    }
                    Link { to: back.clone(), class: "btn btn-outline", "← Voltar para Instâncias" }
                }
            }
        };
    };

    let qr_src = current.qr_code_src();
    let webhook_url = current.webhook_url.clone().unwrap_or_else(|| MISSING_LABEL.to_string());
    let api_key = current.api_key.clone().unwrap_or_else(|| MISSING_LABEL.to_string());

    rsx! {
        Layout { title: "{current.name}", nav_active: "workspaces".to_string(),
            div { class: "max-w-4xl",
                div { class: "mb-8",
                    Link {
                        to: back,
                        class: "inline-flex items-center text-sm text-gray-400 hover:text-white mb-4",
                        "← Voltar para Instâncias"
                    }
                    h1 { class: "text-3xl font-bold", "{current.name}" }
                    div { class: "flex items-center gap-3 mt-2",
                        span { class: "text-gray-300", "📞 {current.phone_number}" }
                        StatusBadge { status: current.status }
                    }
                }

                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                    // QR code
                    div { class: "card p-6 space-y-4",
                        div {
                            h2 { class: "text-lg font-semibold", "QR Code de Conexão" }
                            p { class: "text-sm text-gray-400",
                                "Escaneie este código QR com seu WhatsApp para conectar a instância"
                            }
                        }
                        div { class: "flex justify-center p-4 bg-gray-800 rounded-lg",
                            if let Some(src) = qr_src {
                                img {
                                    src: "{src}",
                                    alt: "QR Code",
                                    class: "w-48 h-48 border-2 border-gray-700 rounded bg-white",
                                }
                            } else {
                                div { class: "w-48 h-48 flex items-center justify-center text-center text-sm text-gray-500",
                                    "QR code indisponível"
                                }
                            }
                        }
                        button {
                            class: "btn btn-outline w-full justify-center",
                            disabled: refreshing(),
                            onclick: regenerate_qr,
                            if refreshing() { "Gerando..." } else { "Gerar Novo QR" }
                        }
                    }

                    div { class: "space-y-6",
                        div { class: "card p-6 space-y-4",
                            h2 { class: "text-lg font-semibold", "Informações da Instância" }
                            InfoRow { label: "Nome", value: current.name.clone() }
                            InfoRow { label: "Número", value: current.phone_number.clone() }
                            InfoRow { label: "Criado em", value: current.created_at.clone() }
                            InfoRow { label: "Última atividade", value: current.last_activity.clone() }
                        }

                        div { class: "card p-6 space-y-4",
                            div {
                                h2 { class: "text-lg font-semibold", "Configurações da API" }
                                p { class: "text-sm text-gray-400",
                                    "Use essas informações para integrar com sua aplicação"
                                }
                            }
                            CredentialRow { label: "Webhook URL", value: webhook_url }
                            CredentialRow { label: "API Key", value: api_key }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InfoRow(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            p { class: "text-sm font-medium text-gray-400", "{label}" }
            p { "{value}" }
        }
    }
}

/// Monospace value with a copy-to-clipboard button.
#[component]
fn CredentialRow(label: &'static str, value: String) -> Element {
    let mut toasts = use_toasts();
    let copyable = value != MISSING_LABEL;

    let copy = {
        let value = value.clone();
        move |_| {
            let value = value.clone();
            spawn(async move {
                match copy_text(&value).await {
                    Ok(()) => toasts.success(
                        "Copiado!",
                        &format!("{} copiado para a área de transferência.", label),
                    ),
                    Err(e) => {
                        tracing::warn!("Clipboard write failed: {}", e);
                        toasts.destructive(
                            "Não foi possível copiar",
                            &format!("Copie o {} manualmente.", label),
                        );
                    }
                }
            });
        }
    };

    rsx! {
        div {
            p { class: "text-sm font-medium text-gray-400", "{label}" }
            div { class: "flex items-center gap-2 mt-1",
                code { class: "flex-1 px-3 py-2 bg-gray-800 rounded text-sm font-mono break-all", "{value}" }
                button {
                    class: "btn btn-outline btn-sm",
                    title: "Copiar {label}",
                    disabled: !copyable,
                    onclick: copy,
                    "Copiar"
                }
            }
        }
    }
}
