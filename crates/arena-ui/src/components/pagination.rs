//! Previous / Next controls.

use arena_core::listing::PaginationView;
use dioxus::prelude::*;

/// Render the controls for `view`. Callers only render this when a
/// [`PaginationView`] exists, i.e. there is more than one page.
#[component]
pub fn Pagination(
    view: PaginationView,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "pagination",
            button {
                class: "btn btn-secondary page-btn",
                disabled: view.prev_disabled,
                onclick: move |_| on_prev.call(()),
                "Previous"
            }
            span { class: "page-info", "{view.label()}" }
            button {
                class: "btn btn-secondary page-btn",
                disabled: view.next_disabled,
                onclick: move |_| on_next.call(()),
                "Next"
            }
        }
    }
}
