use dioxus::prelude::*;

#[component]
pub fn Label(#[props(into, default)] html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "input-label", r#for: html_for, {children} }
    }
}
