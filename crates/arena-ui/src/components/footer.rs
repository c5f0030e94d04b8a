use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "cyber-footer",
            div { class: "footer-container",
                div { class: "footer-left",
                    span { "About | Privacy | Terms | Contact" }
                }
                div { class: "footer-center",
                    span { "© 2025: CyberArena" }
                }
                div { class: "footer-right",
                    span { class: "social-icon", "📘" }
                    span { class: "social-icon", "🐦" }
                    span { class: "social-icon", "📷" }
                }
            }
        }
    }
}
