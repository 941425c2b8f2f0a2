use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Layout {
            title: "Página não encontrada".to_string(),
            nav_active: String::new(),

            div { class: "card p-8 max-w-lg mx-auto text-center",
                h1 { class: "text-4xl font-bold mb-2", "404" }
                p { class: "text-gray-400 mb-1", "Página não encontrada" }
                code { class: "block text-sm text-gray-500 mb-6 break-all", "{path}" }
                Link { to: Route::Dashboard {}, class: "btn btn-primary", "Voltar para o início" }
            }
        }
    }
}
