use dioxus::prelude::*;

#[component]
pub fn EmptyState(
    icon: String,
    title: String,
    description: String,
    action_label: String,
    on_action: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center py-16 px-4 text-center",
            div { class: "mb-6 mx-auto h-16 w-16 rounded-full bg-gray-800 flex items-center justify-center text-3xl",
                "{icon}"
            }
            div { class: "mb-8 max-w-md",
                h2 { class: "text-xl font-semibold mb-2", "{title}" }
                p { class: "text-gray-400", "{description}" }
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| on_action.call(()),
                "+ {action_label}"
            }
        }
    }
}
