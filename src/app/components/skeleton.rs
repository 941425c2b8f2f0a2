//! Loading placeholders.

use dioxus::prelude::*;

/// Placeholder cards shown while a listing loads.
pub const SKELETON_CARDS: usize = 6;

#[derive(Clone, Copy, PartialEq)]
pub enum SkeletonKind {
    Workspace,
    Instance,
}

#[component]
pub fn SkeletonGrid(kind: SkeletonKind) -> Element {
    rsx! {
        div { class: "instance-grid", aria_busy: "true",
            for i in 0..SKELETON_CARDS {
                div { key: "{i}", class: "card p-6 space-y-4",
                    div { class: "skeleton h-6 w-3/4" }
                    if kind == SkeletonKind::Instance {
                        div { class: "skeleton h-5 w-24" }
                    }
                    div { class: "skeleton h-4 w-1/2" }
                    div { class: "pt-2 border-t border-gray-800 space-y-2",
                        div { class: "skeleton h-3 w-1/3" }
                        if kind == SkeletonKind::Instance {
                            div { class: "skeleton h-3 w-2/5" }
                        }
                    }
                }
            }
        }
    }
}

/// Two-column placeholder for the instance detail page.
#[component]
pub fn DetailSkeleton() -> Element {
    rsx! {
        div { class: "space-y-6", aria_busy: "true",
            div { class: "skeleton h-8 w-48" }
            div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                div { class: "skeleton h-64" }
                div { class: "skeleton h-64" }
            }
        }
    }
}
