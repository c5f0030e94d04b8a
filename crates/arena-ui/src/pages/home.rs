use dioxus::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::toast::Toast;
use crate::{Flash, Route};

#[component]
pub fn Home() -> Element {
    let flash = use_context::<Flash>();
    let notice = flash.0.read().clone();

    rsx! {
        div { class: "cyber-page",
            Header {}
            div { class: "home-container",
                div { class: "home-content",
                    h1 { "Welcome to CyberArena" }
                    p { "Your ultimate gaming destination" }
                    div { class: "home-buttons",
                        Link { class: "btn btn-primary", to: Route::Discover {}, "Explore Games" }
                        Link { class: "btn btn-secondary", to: Route::Profile {}, "View Profile" }
                        Link { class: "btn btn-secondary", to: Route::Admin {}, "Admin Panel" }
                    }
                }
            }
            Footer {}

            if let Some(notice) = notice {
                Toast {
                    notice,
                    on_close: move |_| flash.dismiss(),
                }
            }
        }
    }
}
