use dioxus::prelude::*;

/// Labeled select bound to a string value; options come in as children.
#[component]
pub fn FormSelect(
    #[props(into, default)] label: String,
    #[props(into)] value: String,
    #[props(default = false)] required: bool,
    onchange: EventHandler<FormEvent>,
    children: Element,
) -> Element {
    rsx! {
        if !label.is_empty() {
            label { class: "input-label", "{label}" }
        }
        select {
            class: "input",
            value,
            required,
            onchange: move |evt| onchange.call(evt),
            {children}
        }
    }
}
