//! Site header with logo, navigation links and optional account controls.

use dioxus::prelude::*;

use crate::{Flash, Route};

/// `show_admin_panel` adds the admin label, notification bell, user icon
/// and a logout button. `show_user_icon` adds just the user icon.
#[component]
pub fn Header(
    #[props(default)] show_admin_panel: bool,
    #[props(default)] show_user_icon: bool,
) -> Element {
    let navigator = use_navigator();
    let flash = use_context::<Flash>();

    rsx! {
        header { class: "cyber-header",
            div { class: "header-container",
                div { class: "header-left",
                    if show_admin_panel {
                        span { class: "admin-panel-label", "Admin Panel" }
                    }
                    div {
                        class: "logo",
                        onclick: move |_| {
                            navigator.push(Route::Home {});
                        },
                        "CyberArena"
                    }
                }
                nav { class: "header-center",
                    Link { class: "header-nav-link", to: Route::Home {}, "Home" }
                    Link { class: "header-nav-link", to: Route::Discover {}, "Discover" }
                    Link { class: "header-nav-link", to: Route::Discover {}, "Developers" }
                    Link { class: "header-nav-link", to: Route::Home {}, "Community" }
                }
                div { class: "header-right",
                    if show_admin_panel {
                        span { class: "header-icon", "🔔" }
                        span { class: "header-icon", "👤" }
                        button {
                            class: "logout-btn-header",
                            onclick: move |_| flash.logout(navigator),
                            "Logout"
                        }
                    }
                    if show_user_icon {
                        Link { class: "header-icon", to: Route::Profile {}, "👤" }
                    }
                }
            }
            div { class: "header-line" }
        }
    }
}
