//! Dismissible, non-blocking notification.

use arena_core::model::{Notice, NoticeKind};
use dioxus::prelude::*;

fn kind_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "toast-success",
        NoticeKind::Info => "toast-info",
        NoticeKind::Error => "toast-error",
    }
}

/// Show `notice` until closed. When `on_retry` is given a Retry button is
/// rendered next to the close button.
#[component]
pub fn Toast(
    notice: Notice,
    on_close: EventHandler<()>,
    #[props(default)] on_retry: Option<EventHandler<()>>,
) -> Element {
    let class = kind_class(notice.kind);

    rsx! {
        div { class: "toast {class}", role: "status",
            span { class: "toast-message", "{notice.message}" }
            if let Some(retry) = on_retry {
                button {
                    class: "toast-action",
                    onclick: move |_| retry.call(()),
                    "Retry"
                }
            }
            button {
                class: "toast-close",
                onclick: move |_| on_close.call(()),
                "✕"
            }
        }
    }
}
