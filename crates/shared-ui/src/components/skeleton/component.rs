use dioxus::prelude::*;

/// Pulsing placeholder shown while a collection loads.
#[component]
pub fn Skeleton() -> Element {
    rsx! {
        div { class: "skeleton" }
    }
}
