//! Admin dashboard: stats cards and the pending-games moderation table.

use arena_core::admin::{AdminDashboard, AdminTab, group_thousands};
use dioxus::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::pagination::Pagination;
use crate::components::toast::Toast;

#[component]
pub fn Admin() -> Element {
    let mut dashboard = use_signal(AdminDashboard::default);

    let state = dashboard.read();
    let active_tab = state.active_tab;
    let stats = state.stats;
    let search = state.search.clone();
    let page = state.page;
    let rows: Vec<_> = state.visible().into_iter().cloned().collect();
    let pagination = state.pagination();
    let notice = state.notice.clone();
    drop(state);

    let stat_cards = [
        ("Total Games", group_thousands(stats.total_games.into()), "🎮"),
        ("Total Developers", group_thousands(stats.total_developers.into()), "👥"),
        ("Active Games", group_thousands(stats.active_games.into()), "🟢"),
        ("Earnings", format!("${}", group_thousands(stats.earnings)), "💰"),
        ("Games Accepted", group_thousands(stats.games_accepted.into()), "✅"),
        ("Games Rejected", group_thousands(stats.games_rejected.into()), "⛔"),
    ];

    rsx! {
        div { class: "cyber-page",
            Header { show_admin_panel: true }
            div { class: "admin-layout",
                aside { class: "admin-sidebar",
                    for tab in AdminTab::ALL {
                        button {
                            key: "{tab.label()}",
                            class: if tab == active_tab { "admin-tab active" } else { "admin-tab" },
                            onclick: move |_| dashboard.write().select_tab(tab),
                            "{tab.label()}"
                        }
                    }
                }

                main { class: "admin-main",
                    h1 { class: "gradient-title", "{active_tab.label()}" }

                    div { class: "stats-grid",
                        for (title, value, icon) in stat_cards {
                            div { key: "{title}", class: "stat-card",
                                span { class: "stat-icon", "{icon}" }
                                div {
                                    p { class: "stat-title", "{title}" }
                                    p { class: "stat-value", "{value}" }
                                }
                            }
                        }
                    }

                    section { class: "pending-section",
                        div { class: "pending-header",
                            h2 { class: "section-title-uppercase", "PENDING GAMES" }
                            input {
                                class: "cyber-input",
                                r#type: "search",
                                placeholder: "Search games or developers",
                                value: "{search}",
                                oninput: move |e| dashboard.write().set_search(e.value()),
                            }
                        }

                        if rows.is_empty() {
                            p { class: "subtitle", "No pending games" }
                        } else {
                            table { class: "pending-table",
                                thead {
                                    tr {
                                        th { "Game" }
                                        th { "Developer" }
                                        th { "Uploaded" }
                                        th { "Actions" }
                                    }
                                }
                                tbody {
                                    for game in rows {
                                        tr { key: "{game.id}",
                                            td {
                                                span { class: "pending-thumb", "{game.thumbnail}" }
                                                " {game.name}"
                                            }
                                            td { "{game.developer}" }
                                            td { "{game.uploaded}" }
                                            td {
                                                button {
                                                    class: "btn approve-btn",
                                                    onclick: move |_| {
                                                        dashboard.write().approve(game.id);
                                                    },
                                                    "Approve"
                                                }
                                                button {
                                                    class: "btn deny-btn",
                                                    onclick: move |_| {
                                                        dashboard.write().deny(game.id);
                                                    },
                                                    "Deny"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        if let Some(view) = pagination {
                            Pagination {
                                view,
                                on_prev: move |_| dashboard.write().set_page(i64::from(page) - 1),
                                on_next: move |_| dashboard.write().set_page(i64::from(page) + 1),
                            }
                        }
                    }
                }
            }
            Footer {}

            if let Some(notice) = notice {
                Toast {
                    notice,
                    on_close: move |_| dashboard.write().dismiss_notice(),
                }
            }
        }
    }
}
