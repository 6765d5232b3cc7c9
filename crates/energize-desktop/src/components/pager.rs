use dioxus::prelude::*;

/// Previous / next controls for a paged table.
///
/// `page` is 1-indexed. Hidden when there is a single page.
#[component]
pub fn Pager(page: usize, total_pages: usize, on_change: EventHandler<usize>) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }

    rsx! {
        div {
            class: "pager",
            button {
                class: "btn-glass btn-sm",
                disabled: page <= 1,
                onclick: move |_| on_change.call(page.saturating_sub(1).max(1)),
                "Previous"
            }
            span { class: "text-secondary", "Page {page} of {total_pages}" }
            button {
                class: "btn-glass btn-sm",
                disabled: page >= total_pages,
                onclick: move |_| on_change.call((page + 1).min(total_pages)),
                "Next"
            }
        }
    }
}
