//! Instance status badge.

use dioxus::prelude::*;

use crate::model::InstanceStatus;

/// (badge classes, dot classes) per status
fn status_classes(status: InstanceStatus) -> (&'static str, &'static str) {
    match status {
        InstanceStatus::Connected => ("badge bg-emerald-500 text-emerald-950", "bg-emerald-500"),
        InstanceStatus::Disconnected => ("badge bg-red-600 text-white", "bg-red-600"),
        InstanceStatus::Connecting => ("badge bg-orange-500 text-white", "bg-orange-500"),
    }
}

#[component]
pub fn StatusBadge(status: InstanceStatus) -> Element {
    let (badge, dot) = status_classes(status);
    let label = status.label();

    rsx! {
        span { class: "inline-flex items-center gap-2",
            span { class: "h-2 w-2 rounded-full {dot}" }
            span { class: "{badge}", "{label}" }
        }
    }
}
