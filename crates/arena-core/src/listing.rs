//! Framework-agnostic listing controller.
//!
//! Owns a [`ListingState`] and turns filter/pagination intent into
//! [`FetchTicket`]s. Frontends only need to:
//!
//! 1. Run the fetch described by each ticket the controller hands out.
//! 2. Feed the outcome back through [`ListingController::apply`].
//!
//! Fetches may resolve in any order. Every ticket carries a sequence number
//! and only the most recently dispatched one is ever applied; older results
//! are discarded on arrival.

use crate::model::GameSummary;
use crate::protocol::ListGamesParams;
use crate::source::{FetchError, ListingPage};

/// Fixed number of games per page.
pub const PAGE_SIZE: u32 = 12;

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// The current page/filter selection driving what is fetched.
///
/// An empty `genre` or `keyword` means "no filter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub page: u32,
    pub limit: u32,
    pub genre: String,
    pub keyword: String,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PAGE_SIZE,
            genre: String::new(),
            keyword: String::new(),
        }
    }
}

impl ListingQuery {
    /// Request parameters for this query. Empty filters are omitted.
    pub fn params(&self) -> ListGamesParams {
        ListGamesParams {
            page: self.page,
            limit: self.limit,
            genre: non_empty(&self.genre),
            keyword: non_empty(&self.keyword),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Which filter a [`ListingCommand::SetFilter`] targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Genre,
    Keyword,
}

impl FilterKey {
    /// Look up a filter by the name used in form fields.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "genre" => Some(Self::Genre),
            "keyword" => Some(Self::Keyword),
            _ => None,
        }
    }
}

/// User intent coming from a listing view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingCommand {
    SetFilter { key: FilterKey, value: String },
    SetPage(i64),
    NextPage,
    PrevPage,
    Retry,
    DismissError,
}

/// A dispatched fetch: the parameters to request and the sequence number
/// its result must be applied with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub params: ListGamesParams,
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Coarse view state derived from [`ListingState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    Loading,
    Ready,
    Empty,
    Error,
}

/// Previous/Next control state. Only exists when there is more than one
/// page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    pub page: u32,
    pub total_pages: u32,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl PaginationView {
    /// Returns `None` when `total_pages <= 1`: a single page renders no
    /// controls at all.
    pub fn new(page: u32, total_pages: u32) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }
        Some(Self {
            page,
            total_pages,
            prev_disabled: page == 1,
            next_disabled: page == total_pages,
        })
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

/// Everything a listing view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    pub query: ListingQuery,
    pub items: Vec<GameSummary>,
    /// Always at least 1.
    pub total_pages: u32,
    pub loading: bool,
    /// Message of the last failed fetch while its notification is visible.
    pub error: Option<String>,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            query: ListingQuery::default(),
            items: Vec::new(),
            total_pages: 1,
            loading: false,
            error: None,
        }
    }
}

impl ListingState {
    pub fn status(&self) -> ListingStatus {
        if self.loading {
            ListingStatus::Loading
        } else if self.error.is_some() {
            ListingStatus::Error
        } else if self.items.is_empty() {
            ListingStatus::Empty
        } else {
            ListingStatus::Ready
        }
    }

    /// State shown before the first fetch settles: `query` is about to be
    /// requested, so the view starts out loading rather than empty.
    pub fn initial(query: ListingQuery) -> Self {
        Self {
            query,
            loading: true,
            ..Self::default()
        }
    }

    /// Loading with nothing to show yet, for a full-screen loader.
    pub fn is_initial_load(&self) -> bool {
        self.loading && self.items.is_empty()
    }

    pub fn pagination(&self) -> Option<PaginationView> {
        PaginationView::new(self.query.page, self.total_pages)
    }
}

/// Result of [`ListingController::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// New items and page count are in place.
    Updated,
    /// The fetch failed; previous data is untouched and the error is set.
    Failed,
    /// A newer fetch was dispatched since; the result was discarded.
    Stale,
    /// The result was applied but the current page fell outside the new
    /// page count. The page was clamped and this follow-up must be run.
    Refetch(FetchTicket),
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Owns the listing state and the dispatch sequence counter.
#[derive(Debug, Clone, Default)]
pub struct ListingController {
    latest_seq: u64,
    pub state: ListingState,
}

impl ListingController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing query, e.g. one given on the command line.
    pub fn with_query(query: ListingQuery) -> Self {
        Self {
            latest_seq: 0,
            state: ListingState {
                query,
                ..ListingState::default()
            },
        }
    }

    /// Sequence number of the most recently dispatched fetch (0 before the
    /// first one).
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Dispatch a fetch for the current query.
    pub fn refresh(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        self.state.loading = true;
        self.state.error = None;
        let ticket = FetchTicket {
            seq: self.latest_seq,
            params: self.state.query.params(),
        };
        tracing::debug!(seq = ticket.seq, page = ticket.params.page, "dispatching listing fetch");
        ticket
    }

    /// Explicit retry after a failure. Same as [`Self::refresh`].
    pub fn retry(&mut self) -> FetchTicket {
        self.refresh()
    }

    /// Update one filter. Always resets to page 1 and dispatches a fetch,
    /// even when the value did not change.
    pub fn set_filter(&mut self, key: FilterKey, value: impl Into<String>) -> FetchTicket {
        let value = value.into();
        match key {
            FilterKey::Genre => self.state.query.genre = value,
            FilterKey::Keyword => self.state.query.keyword = value,
        }
        self.state.query.page = 1;
        self.refresh()
    }

    /// Like [`Self::set_filter`] but keyed by form field name. Unknown names
    /// change no filter but still reset the page.
    pub fn set_filter_by_name(&mut self, name: &str, value: impl Into<String>) -> FetchTicket {
        match FilterKey::from_name(name) {
            Some(key) => self.set_filter(key, value),
            None => {
                tracing::debug!(name, "ignoring unknown filter key");
                self.state.query.page = 1;
                self.refresh()
            }
        }
    }

    /// Move to page `n`, clamped into `[1, total_pages]`. Returns `None` when
    /// the clamped page equals the current one.
    pub fn set_page(&mut self, n: i64) -> Option<FetchTicket> {
        let target = clamp_page(n, self.state.total_pages);
        if target == self.state.query.page {
            return None;
        }
        self.state.query.page = target;
        Some(self.refresh())
    }

    pub fn next_page(&mut self) -> Option<FetchTicket> {
        self.set_page(i64::from(self.state.query.page) + 1)
    }

    pub fn prev_page(&mut self) -> Option<FetchTicket> {
        self.set_page(i64::from(self.state.query.page) - 1)
    }

    /// Hide the error notification. Loaded data is unaffected.
    pub fn dismiss_error(&mut self) {
        self.state.error = None;
    }

    /// Apply a [`ListingCommand`], returning the fetch to run, if any.
    pub fn handle(&mut self, command: ListingCommand) -> Option<FetchTicket> {
        match command {
            ListingCommand::SetFilter { key, value } => Some(self.set_filter(key, value)),
            ListingCommand::SetPage(n) => self.set_page(n),
            ListingCommand::NextPage => self.next_page(),
            ListingCommand::PrevPage => self.prev_page(),
            ListingCommand::Retry => Some(self.retry()),
            ListingCommand::DismissError => {
                self.dismiss_error();
                None
            }
        }
    }

    /// Feed back the outcome of the fetch dispatched with sequence `seq`.
    pub fn apply(&mut self, seq: u64, result: Result<ListingPage, FetchError>) -> Applied {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "discarding stale listing result");
            return Applied::Stale;
        }

        self.state.loading = false;
        match result {
            Ok(page) => {
                self.state.items = page.items;
                self.state.total_pages = page.total_pages.max(1);
                if self.state.query.page > self.state.total_pages {
                    self.state.query.page = self.state.total_pages;
                    return Applied::Refetch(self.refresh());
                }
                Applied::Updated
            }
            Err(err) => {
                tracing::warn!(seq, error = %err, "listing fetch failed");
                self.state.error = Some(err.message().to_string());
                Applied::Failed
            }
        }
    }
}

fn clamp_page(n: i64, total_pages: u32) -> u32 {
    let max = i64::from(total_pages.max(1));
    // In range after the clamp, so the conversion cannot fail.
    u32::try_from(n.clamp(1, max)).unwrap_or(1)
}
