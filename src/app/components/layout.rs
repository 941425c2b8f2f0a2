//! Layout component wrapping all pages with the sidebar, toasts and common styles.

use dioxus::prelude::*;

use super::nav::Nav;
use crate::app::toast::use_toasts;

/// Component classes on top of Tailwind utilities.
const CUSTOM_STYLES: &str = r#"
:root { color-scheme: dark; }
body { background: #0b0f14; color: #e5e7eb; }
.card { background: #111827; border: 1px solid #1f2937; border-radius: 0.5rem; }
.card-link { cursor: pointer; transition: border-color .15s, transform .15s; }
.card-link:hover { border-color: #10b981; transform: translateY(-1px); }
.card-link:focus-visible { outline: 2px solid #10b981; outline-offset: 2px; }
.btn { display: inline-flex; align-items: center; gap: .5rem; padding: .5rem 1rem; border-radius: .375rem; font-size: .875rem; font-weight: 500; }
.btn:disabled { opacity: .5; cursor: not-allowed; }
.btn-primary { background: #10b981; color: #041b13; }
.btn-primary:hover:not(:disabled) { background: #34d399; }
.btn-outline { border: 1px solid #374151; }
.btn-outline:hover:not(:disabled) { background: #1f2937; }
.btn-ghost:hover { background: #1f2937; }
.btn-danger { color: #f87171; }
.btn-sm { padding: .25rem .5rem; font-size: .75rem; }
.badge { display: inline-block; padding: .125rem .5rem; border-radius: 9999px; font-size: .75rem; font-weight: 600; }
.input { width: 100%; background: #0b0f14; border: 1px solid #374151; border-radius: .375rem; padding: .5rem .75rem; }
.input:focus { outline: 2px solid #10b981; }
.skeleton { background: #1f2937; border-radius: .25rem; animation: pulse 1.5s ease-in-out infinite; }
@keyframes pulse { 50% { opacity: .5; } }
.instance-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.5rem; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - Workspace Console", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Style { {CUSTOM_STYLES} }

        div { class: "min-h-screen flex flex-col lg:flex-row",
            Nav { active: props.nav_active.clone() }

            div { class: "flex-1 flex flex-col",
                main { class: "flex-1 container mx-auto px-6 py-8 max-w-7xl",
                    {props.children}
                }
                footer { class: "px-6 py-3 border-t border-gray-800",
                    small { class: "text-gray-500", "Workspace Console v{version}" }
                }
            }
        }

        ToastRegion {}
    }
}

/// Stack of active toasts, bottom-right.
#[component]
fn ToastRegion() -> Element {
    let mut toasts = use_toasts();
    let items: Vec<_> = toasts
        .list()
        .into_iter()
        .map(|toast| (format!("card border-l-4 p-4 shadow-lg {}", toast.kind.class()), toast))
        .collect();

    rsx! {
        div {
            class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80",
            role: "status",
            aria_live: "polite",
            for (class, toast) in items {
                div {
                    key: "{toast.id}",
                    class: "{class}",
                    div { class: "flex items-start justify-between gap-2",
                        div {
                            p { class: "font-semibold text-sm", "{toast.title}" }
                            if !toast.description.is_empty() {
                                p { class: "text-sm text-gray-400 mt-1", "{toast.description}" }
                            }
                        }
                        button {
                            class: "text-gray-400 hover:text-white",
                            aria_label: "Fechar",
                            onclick: move |_| toasts.dismiss(toast.id),
                            "×"
                        }
                    }
                }
            }
        }
    }
}
