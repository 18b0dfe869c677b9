use dioxus::prelude::*;

/// Prev/next pagination controls over a client-side paged collection.
///
/// `page` is 1-indexed. Prev is a no-op at page 1 and Next at the last
/// page; with zero pages the controls render nothing at all, so an empty
/// collection never shows "Page 1 of 0".
#[component]
pub fn Pagination(page: Signal<usize>, total_pages: usize) -> Element {
    if total_pages == 0 {
        return rsx! {};
    }

    let current = page();
    let at_first = current <= 1;
    let at_last = current >= total_pages;

    rsx! {
        div { class: "pagination",
            button {
                class: "button",
                "data-style": "outline",
                r#type: "button",
                disabled: at_first,
                onclick: move |_| {
                    let current = *page.read();
                    if current > 1 {
                        page.set(current - 1);
                    }
                },
                "Prev"
            }
            span { class: "pagination-info", "Page {current} of {total_pages}" }
            button {
                class: "button",
                "data-style": "outline",
                r#type: "button",
                disabled: at_last,
                onclick: move |_| {
                    let current = *page.read();
                    if current < total_pages {
                        page.set(current + 1);
                    }
                },
                "Next"
            }
        }
    }
}
