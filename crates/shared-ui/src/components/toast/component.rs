use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "success",
            ToastLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ToastItem {
    id: u64,
    level: ToastLevel,
    message: String,
}

/// Handle for pushing transient notifications from anywhere under a
/// [`ToastProvider`]. Copyable; grab one per component with [`use_toast`].
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<ToastItem>>,
    counter: Signal<u64>,
}

impl Toasts {
    pub fn success(&self, message: String) {
        self.push(ToastLevel::Success, message);
    }

    pub fn error(&self, message: String) {
        self.push(ToastLevel::Error, message);
    }

    fn push(&self, level: ToastLevel, message: String) {
        let mut counter = self.counter;
        let mut items = self.items;
        let id = *counter.read() + 1;
        counter.set(id);
        items.write().push(ToastItem { id, level, message });
    }

    fn dismiss(&self, id: u64) {
        let mut items = self.items;
        items.write().retain(|t| t.id != id);
    }
}

/// Hook to access the toast handle.
pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

/// Provides the toast context and renders the notification stack above
/// the page content. Toasts stay until dismissed.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_context_provider(|| Toasts {
        items: Signal::new(Vec::new()),
        counter: Signal::new(0),
    });

    let items = toasts.items.read().clone();

    rsx! {
        {children}
        div { class: "toast-viewport",
            for item in items {
                div {
                    key: "{item.id}",
                    class: "toast",
                    "data-style": item.level.class(),
                    span { class: "toast-message", "{item.message}" }
                    button {
                        class: "toast-close",
                        r#type: "button",
                        onclick: move |_| toasts.dismiss(item.id),
                        "\u{2715}"
                    }
                }
            }
        }
    }
}
