use dioxus::prelude::*;

use crate::Route;
use crate::components::footer::Footer;
use crate::components::header::Header;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "cyber-page",
            Header {}
            div { class: "loading-state",
                p { "Nothing lives at /{path}" }
                Link { class: "btn btn-primary", to: Route::Home {}, "Back to Home" }
            }
            Footer {}
        }
    }
}
