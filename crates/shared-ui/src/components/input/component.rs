use dioxus::prelude::*;

/// Labeled text input. Pass an empty `label` to render the input alone.
#[component]
pub fn Input(
    #[props(into, default)] label: String,
    #[props(into)] value: String,
    #[props(into, default)] placeholder: String,
    #[props(into, default = "text".to_string())] input_type: String,
    #[props(into, default)] id: String,
    #[props(default = false)] required: bool,
    on_input: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        if !label.is_empty() {
            label { class: "input-label", r#for: id.clone(), "{label}" }
        }
        input {
            class: "input",
            id,
            r#type: input_type,
            placeholder,
            value,
            required,
            oninput: move |evt| on_input.call(evt),
        }
    }
}
