//! Profile page: account info, password change and tab navigation.

use arena_core::profile::{ProfileEditor, ProfileTab};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::Flash;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::toast::Toast;

#[component]
pub fn Profile() -> Element {
    let mut editor = use_signal(ProfileEditor::default);
    let navigator = use_navigator();
    let flash = use_context::<Flash>();

    let state = editor.read();
    let active_tab = state.active_tab;
    let account = state.account.clone();
    let password = state.password.clone();
    let notice = state.notice.clone();
    drop(state);

    let on_field = move |(name, value): (String, String)| editor.write().set_field(&name, value);

    rsx! {
        div { class: "cyber-page",
            Header {}
            div { class: "page-content-wrapper",
                div { class: "profile-container",
                    button {
                        class: "go-back-btn",
                        onclick: move |_| navigator.go_back(),
                        span { "←" }
                        " Go Back"
                    }

                    div { class: "profile-layout",
                        // Sidebar
                        aside { class: "profile-sidebar",
                            div { class: "profile-avatar", "👤" }
                            h3 { class: "profile-username", "{account.username}" }
                            nav { class: "profile-tabs",
                                for tab in ProfileTab::ALL {
                                    button {
                                        key: "{tab.label()}",
                                        class: if tab == active_tab { "profile-tab active" } else { "profile-tab" },
                                        onclick: move |_| editor.write().select_tab(tab),
                                        "{tab.label()}"
                                    }
                                }
                            }
                            button {
                                class: "logout-btn",
                                onclick: move |_| flash.logout(navigator),
                                "Logout"
                            }
                        }

                        main { class: "profile-main",
                            if active_tab == ProfileTab::Profile {
                                section { class: "profile-section",
                                    h2 { class: "section-title-uppercase", "ACCOUNT INFO" }
                                    FormField { label: "Username", name: "username", value: account.username.clone(), on_input: on_field }
                                    FormField { label: "Email", name: "email", value: account.email.clone(), kind: "email", on_input: on_field }
                                    FormField { label: "Age", name: "age", value: account.age.clone(), kind: "number", on_input: on_field }
                                    FormField {
                                        label: "Current Password",
                                        name: "currentPassword",
                                        value: account.current_password.clone(),
                                        kind: "password",
                                        on_input: on_field,
                                    }
                                }
                                section { class: "profile-section",
                                    h2 { class: "section-title-uppercase", "CHANGE PASSWORD" }
                                    FormField {
                                        label: "New Password",
                                        name: "newPassword",
                                        value: password.new_password.clone(),
                                        kind: "password",
                                        on_input: on_field,
                                    }
                                    FormField {
                                        label: "Confirm Password",
                                        name: "confirmPassword",
                                        value: password.confirm_password.clone(),
                                        kind: "password",
                                        on_input: on_field,
                                    }
                                }
                                button {
                                    class: "btn btn-primary save-btn",
                                    onclick: move |_| {
                                        if let Err(err) = editor.write().save() {
                                            debug!("profile not saved: {err}");
                                        }
                                    },
                                    "Save Changes"
                                }
                            } else {
                                section { class: "profile-section",
                                    h2 { class: "section-title-uppercase", "{active_tab.label()}" }
                                    p { class: "subtitle", "Nothing to configure here yet." }
                                }
                            }
                        }
                    }
                }
            }
            Footer {}

            if let Some(notice) = notice {
                Toast {
                    notice,
                    on_close: move |_| editor.write().dismiss_notice(),
                }
            }
        }
    }
}

/// Labelled input that reports `(name, value)` on every keystroke.
#[component]
fn FormField(
    label: &'static str,
    name: &'static str,
    value: String,
    #[props(default = "text")] kind: &'static str,
    on_input: EventHandler<(String, String)>,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: name, "{label}" }
            input {
                id: name,
                class: "cyber-input",
                r#type: kind,
                name,
                value,
                oninput: move |e| on_input.call((name.to_string(), e.value())),
            }
        }
    }
}
