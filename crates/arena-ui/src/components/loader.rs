//! Loading spinner.

use dioxus::prelude::*;

/// `fullscreen` covers the viewport; otherwise the spinner sits inline.
#[component]
pub fn Loader(#[props(default)] fullscreen: bool) -> Element {
    let class = if fullscreen {
        "loader loader-fullscreen"
    } else {
        "loader"
    };

    rsx! {
        div { class: "{class}",
            div { class: "loader-ring" }
        }
    }
}
