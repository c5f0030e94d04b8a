//! Admin dashboard state: tabs, headline stats, and pending-game moderation.

use crate::listing::PaginationView;
use crate::model::{Notice, PendingGame};

/// Pending games shown per table page.
pub const PENDING_PER_PAGE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Home,
    ManageGames,
    ManageDevelopers,
    Reports,
    Settings,
}

impl AdminTab {
    pub const ALL: [AdminTab; 5] = [
        AdminTab::Home,
        AdminTab::ManageGames,
        AdminTab::ManageDevelopers,
        AdminTab::Reports,
        AdminTab::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Home => "Home",
            AdminTab::ManageGames => "Manage Games",
            AdminTab::ManageDevelopers => "Manage Developers",
            AdminTab::Reports => "Reports",
            AdminTab::Settings => "Settings",
        }
    }
}

/// Headline numbers on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_games: u32,
    pub total_developers: u32,
    pub active_games: u32,
    pub earnings: u64,
    pub games_accepted: u32,
    pub games_rejected: u32,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            total_games: 2540,
            total_developers: 1875,
            active_games: 2200,
            earnings: 25450,
            games_accepted: 350,
            games_rejected: 24,
        }
    }
}

/// Format a whole number with thousands separators (`25450` → `25,450`).
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// The submissions queue shown on first load.
pub fn sample_pending_games() -> Vec<PendingGame> {
    [
        (1, "Shadow Realms", "PixelForge Studios", "1 March 2023, 7:30 am", "🌌"),
        (2, "Retro Racing 3d", "IndiePixel Studios", "4 March 2023, 7:50 pm", "🏎️"),
        (3, "Mystic Quest", "Luna Games", "4 March 2023, 7:50 pm", "⚔️"),
        (4, "Pixel Adventure", "RetroSoft Games", "1 March 2023, 7:30 am", "🎮"),
        (5, "Neon Drift", "IndiePixel Studios", "6 March 2023, 9:10 am", "🌃"),
        (6, "Glyph Garden", "Quietcraft", "7 March 2023, 2:45 pm", "🌿"),
        (7, "Iron Dominion", "Ironforge Interactive", "8 March 2023, 11:05 am", "🏰"),
        (8, "Hoop City", "Courtside Games", "9 March 2023, 6:20 pm", "🏀"),
        (9, "Sunken Archive", "Luna Games", "10 March 2023, 8:00 am", "📜"),
    ]
    .into_iter()
    .map(|(id, name, developer, uploaded, thumbnail)| PendingGame {
        id,
        name: name.to_string(),
        developer: developer.to_string(),
        uploaded: uploaded.to_string(),
        thumbnail: thumbnail.to_string(),
    })
    .collect()
}

/// State behind the admin page.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboard {
    pub active_tab: AdminTab,
    pub stats: DashboardStats,
    pub pending: Vec<PendingGame>,
    pub search: String,
    pub page: u32,
    pub notice: Option<Notice>,
}

impl Default for AdminDashboard {
    fn default() -> Self {
        Self::new(sample_pending_games())
    }
}

impl AdminDashboard {
    pub fn new(pending: Vec<PendingGame>) -> Self {
        Self {
            active_tab: AdminTab::Home,
            stats: DashboardStats::default(),
            pending,
            search: String::new(),
            page: 1,
            notice: None,
        }
    }

    pub fn select_tab(&mut self, tab: AdminTab) {
        self.active_tab = tab;
    }

    /// Pending games matching the search box (name or developer,
    /// case-insensitive).
    pub fn filtered(&self) -> Vec<&PendingGame> {
        let needle = self.search.trim().to_lowercase();
        self.pending
            .iter()
            .filter(|g| {
                needle.is_empty()
                    || g.name.to_lowercase().contains(&needle)
                    || g.developer.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn total_pages(&self) -> u32 {
        (self.filtered().len().div_ceil(PENDING_PER_PAGE).max(1)) as u32
    }

    /// Rows on the current table page.
    pub fn visible(&self) -> Vec<&PendingGame> {
        let start = (self.page as usize - 1) * PENDING_PER_PAGE;
        self.filtered()
            .into_iter()
            .skip(start)
            .take(PENDING_PER_PAGE)
            .collect()
    }

    pub fn pagination(&self) -> Option<PaginationView> {
        PaginationView::new(self.page, self.total_pages())
    }

    /// Changing the search returns to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Move to page `n`, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, n: i64) {
        let max = i64::from(self.total_pages());
        self.page = u32::try_from(n.clamp(1, max)).unwrap_or(1);
    }

    /// Accept a submission. Returns `false` if `id` is no longer pending.
    pub fn approve(&mut self, id: u32) -> bool {
        if !self.remove(id) {
            return false;
        }
        self.stats.games_accepted += 1;
        self.stats.total_games += 1;
        self.stats.active_games += 1;
        self.notice = Some(Notice::success("Game approved successfully!"));
        true
    }

    /// Reject a submission. Returns `false` if `id` is no longer pending.
    pub fn deny(&mut self, id: u32) -> bool {
        if !self.remove(id) {
            return false;
        }
        self.stats.games_rejected += 1;
        self.notice = Some(Notice::info("Game denied"));
        true
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn remove(&mut self, id: u32) -> bool {
        let before = self.pending.len();
        self.pending.retain(|g| g.id != id);
        let removed = self.pending.len() != before;
        if removed {
            // The last row of the last page may have gone.
            self.set_page(i64::from(self.page));
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NoticeKind;

    #[test]
    fn approve_updates_counters_and_removes_row() {
        let mut admin = AdminDashboard::default();
        assert!(admin.approve(2));
        assert_eq!(admin.stats.games_accepted, 351);
        assert_eq!(admin.stats.total_games, 2541);
        assert_eq!(admin.stats.active_games, 2201);
        assert_eq!(admin.stats.games_rejected, 24);
        assert!(admin.pending.iter().all(|g| g.id != 2));
        assert_eq!(admin.notice.as_ref().unwrap().kind, NoticeKind::Success);
    }

    #[test]
    fn deny_only_counts_rejection() {
        let mut admin = AdminDashboard::default();
        assert!(admin.deny(1));
        assert_eq!(admin.stats.games_rejected, 25);
        assert_eq!(admin.stats.total_games, 2540);
        assert_eq!(admin.notice.as_ref().unwrap().message, "Game denied");
    }

    #[test]
    fn acting_twice_on_the_same_game_is_a_no_op() {
        let mut admin = AdminDashboard::default();
        assert!(admin.approve(3));
        assert!(!admin.approve(3));
        assert!(!admin.deny(3));
        assert_eq!(admin.stats.games_accepted, 351);
        assert_eq!(admin.stats.games_rejected, 24);
    }

    #[test]
    fn table_paginates_and_clamps() {
        let mut admin = AdminDashboard::default();
        assert_eq!(admin.total_pages(), 3);
        assert_eq!(admin.visible().len(), 4);

        admin.set_page(10);
        assert_eq!(admin.page, 3);
        assert_eq!(admin.visible().len(), 1);
        assert!(admin.pagination().unwrap().next_disabled);

        // Removing the only row on the last page pulls the view back.
        let last_id = admin.visible()[0].id;
        admin.deny(last_id);
        assert_eq!(admin.total_pages(), 2);
        assert_eq!(admin.page, 2);

        admin.set_page(-1);
        assert_eq!(admin.page, 1);
        assert!(admin.pagination().unwrap().prev_disabled);
    }

    #[test]
    fn search_filters_and_resets_page() {
        let mut admin = AdminDashboard::default();
        admin.set_page(2);
        admin.set_search("luna");
        assert_eq!(admin.page, 1);
        let names: Vec<&str> = admin.visible().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Mystic Quest", "Sunken Archive"]);
        assert_eq!(admin.pagination(), None);

        admin.set_search("RACING");
        assert_eq!(admin.visible().len(), 1);
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(25450), "25,450");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
