//! Sidebar navigation using Tailwind CSS.

use dioxus::prelude::*;

use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "dashboard", "workspaces")
    pub active: String,
}

/// Sidebar on desktop, collapsible bar on mobile.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let mut menu_open = use_signal(|| false);

    let nav_link_class = |page: &str| {
        if props.active == page {
            "block px-3 py-2 rounded-md text-sm font-medium text-white bg-gray-800"
        } else {
            "block px-3 py-2 rounded-md text-sm font-medium text-gray-400 hover:text-white hover:bg-gray-800"
        }
    };

    let links_class = if menu_open() {
        "block lg:block"
    } else {
        "hidden lg:block"
    };

    rsx! {
        nav { class: "bg-gray-900 border-b lg:border-b-0 lg:border-r border-gray-800 lg:w-60 lg:min-h-screen",
            div { class: "flex items-center justify-between h-16 px-4",
                // Brand
                Link { class: "text-white font-bold text-lg", to: Route::Dashboard {}, "Workspace Console" }

                // Mobile menu button
                button {
                    class: "lg:hidden inline-flex items-center justify-center p-2 rounded-md text-gray-400 hover:text-white hover:bg-gray-800",
                    r#type: "button",
                    onclick: move |_| menu_open.toggle(),
                    span { class: "sr-only", "Abrir menu" }
                    if menu_open() {
                        // X icon
                        svg { class: "h-6 w-6", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                            path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M6 18L18 6M6 6l12 12" }
                        }
                    } else {
                        // Hamburger icon
                        svg { class: "h-6 w-6", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                            path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M4 6h16M4 12h16M4 18h16" }
                        }
                    }
                }
            }

            div { class: "{links_class}", id: "nav-links",
                div { class: "px-2 pb-3 space-y-1",
                    Link {
                        class: nav_link_class("dashboard"),
                        to: Route::Dashboard {},
                        onclick: move |_| menu_open.set(false),
                        "Dashboard"
                    }
                    Link {
                        class: nav_link_class("workspaces"),
                        to: Route::Workspaces {},
                        onclick: move |_| menu_open.set(false),
                        "Workspaces"
                    }
                    Link {
                        class: nav_link_class("settings"),
                        to: Route::Settings {},
                        onclick: move |_| menu_open.set(false),
                        "Configurações"
                    }
                }
            }
        }
    }
}
