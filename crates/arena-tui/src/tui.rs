//! Ratatui TUI frontend for the game browser.
//!
//! Pure UI module: terminal lifecycle, rendering, and input → command mapping.
//! Listing state lives in [`arena_core::listing`] and all networking in
//! [`arena_client`]. This module has no networking dependencies.

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{self, Stdout};

use arena_core::card::GameCardView;
use arena_core::listing::{FilterKey, ListingCommand, ListingState, ListingStatus};
use arena_core::model::{GameDetails, Genre};
use arena_core::source::FetchError;

// ---------------------------------------------------------------------------
// UserIntent: result of processing user input
// ---------------------------------------------------------------------------

/// The result of processing a user input event.
#[derive(Debug, PartialEq)]
pub enum UserIntent {
    /// No action needed (e.g. the event was purely cosmetic).
    None,
    /// The user wants to quit the application.
    Quit,
    /// Forward a command to the listing session.
    Send(ListingCommand),
    /// Fetch and show the details of the game with this id.
    ShowDetails(String),
}

// ---------------------------------------------------------------------------
// TUI-only state
// ---------------------------------------------------------------------------

/// What the details popup shows.
#[derive(Debug, Clone, PartialEq)]
enum DetailsPopup {
    Loaded(GameDetails),
    NotFound,
    Failed(String),
}

/// UI-layer state that lives alongside (but separate from) the listing state.
#[derive(Debug, Default)]
struct TuiState {
    /// Highlighted row in the game list
    selected: usize,
    /// Keyword being typed, `Some` while the search box has focus
    keyword_input: Option<String>,
    /// Details popup, if open
    details: Option<DetailsPopup>,
    /// Show help popup
    show_help: bool,
}

impl TuiState {
    fn clamp_selection(&mut self, listing: &ListingState) {
        self.selected = self.selected.min(listing.items.len().saturating_sub(1));
    }

    fn has_popup(&self) -> bool {
        self.show_help || self.details.is_some()
    }
}

/// Genre after `current` in filter order; wraps around through "all genres".
fn next_genre(current: &str) -> String {
    let next = match Genre::parse(current) {
        None => Genre::ALL.first(),
        Some(genre) => Genre::ALL
            .iter()
            .position(|g| *g == genre)
            .and_then(|i| Genre::ALL.get(i + 1)),
    };
    next.map(|g| g.as_str().to_string()).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Key handling
// ---------------------------------------------------------------------------

fn handle_key(tui: &mut TuiState, key: KeyEvent, listing: &ListingState) -> UserIntent {
    // Typing into the search box swallows every key.
    if let Some(input) = tui.keyword_input.as_mut() {
        return match key.code {
            KeyCode::Esc => {
                tui.keyword_input = None;
                UserIntent::None
            }
            KeyCode::Enter => {
                let value = tui.keyword_input.take().unwrap_or_default();
                tui.selected = 0;
                UserIntent::Send(ListingCommand::SetFilter {
                    key: FilterKey::Keyword,
                    value: value.trim().to_string(),
                })
            }
            KeyCode::Backspace => {
                input.pop();
                UserIntent::None
            }
            KeyCode::Char(c) => {
                input.push(c);
                UserIntent::None
            }
            _ => UserIntent::None,
        };
    }

    if tui.has_popup() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::F(1)) {
            tui.show_help = false;
            tui.details = None;
        }
        return UserIntent::None;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => UserIntent::Quit,
        KeyCode::F(1) | KeyCode::Char('?') => {
            tui.show_help = true;
            UserIntent::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            tui.selected = tui.selected.saturating_sub(1);
            UserIntent::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            tui.selected = tui.selected.saturating_add(1);
            tui.clamp_selection(listing);
            UserIntent::None
        }
        KeyCode::Left | KeyCode::Char('p') => {
            tui.selected = 0;
            UserIntent::Send(ListingCommand::PrevPage)
        }
        KeyCode::Right | KeyCode::Char('n') => {
            tui.selected = 0;
            UserIntent::Send(ListingCommand::NextPage)
        }
        KeyCode::Char('g') => {
            tui.selected = 0;
            UserIntent::Send(ListingCommand::SetFilter {
                key: FilterKey::Genre,
                value: next_genre(&listing.query.genre),
            })
        }
        KeyCode::Char('/') => {
            tui.keyword_input = Some(listing.query.keyword.clone());
            UserIntent::None
        }
        KeyCode::Char('r') => UserIntent::Send(ListingCommand::Retry),
        KeyCode::Char('x') => UserIntent::Send(ListingCommand::DismissError),
        KeyCode::Enter => match listing.items.get(tui.selected) {
            Some(game) => UserIntent::ShowDetails(game.id.clone()),
            None => UserIntent::None,
        },
        _ => UserIntent::None,
    }
}

// ---------------------------------------------------------------------------
// Public API: Tui struct
// ---------------------------------------------------------------------------

/// Owns the ratatui terminal and all UI-layer state.
///
/// The client orchestrator ([`crate::client`]) drives this struct:
/// call [`Tui::render`] each frame, [`Tui::poll_and_handle_input`] to
/// process keyboard events, and [`Tui::show_details`] when a details fetch
/// settles.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: TuiState,
}

impl Tui {
    /// Set up the terminal (raw mode, alternate screen) and return a ready `Tui`.
    pub fn setup() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            state: TuiState::default(),
        })
    }

    /// Restore the terminal to its original state.
    pub fn teardown(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Draw the current frame. The list selection is clamped to the items
    /// on screen first.
    pub fn render(&mut self, listing: &ListingState) -> io::Result<()> {
        self.state.clamp_selection(listing);
        self.terminal.draw(|f| ui(f, listing, &self.state))?;
        Ok(())
    }

    /// Poll for a keyboard event and, if one is available, translate it into
    /// a [`UserIntent`]. Never blocks.
    pub fn poll_and_handle_input(&mut self, listing: &ListingState) -> io::Result<UserIntent> {
        if !event::poll(std::time::Duration::from_millis(0))? {
            return Ok(UserIntent::None);
        }
        let Event::Key(key) = event::read()? else {
            return Ok(UserIntent::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(UserIntent::None);
        }
        Ok(handle_key(&mut self.state, key, listing))
    }

    /// Open the details popup with the outcome of a details fetch.
    pub fn show_details(&mut self, result: Result<Option<GameDetails>, FetchError>) {
        self.state.details = Some(match result {
            Ok(Some(details)) => DetailsPopup::Loaded(details),
            Ok(None) => DetailsPopup::NotFound,
            Err(e) => DetailsPopup::Failed(e.message().to_string()),
        });
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn ui(frame: &mut Frame, listing: &ListingState, tui: &TuiState) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filters
            Constraint::Min(8),    // Games
            Constraint::Length(1), // Pagination
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_filters(frame, listing, tui, main_layout[0]);

    let content_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Game list
            Constraint::Percentage(45), // Selected card
        ])
        .split(main_layout[1]);

    render_games(frame, listing, tui, content_layout[0]);
    render_card(frame, listing, tui, content_layout[1]);

    let page_line = match listing.pagination() {
        Some(view) => Line::from(vec![
            Span::styled(
                "◀ Prev",
                dim_if(view.prev_disabled, Style::default().fg(Color::Cyan)),
            ),
            Span::raw(format!("   {}   ", view.label())),
            Span::styled(
                "Next ▶",
                dim_if(view.next_disabled, Style::default().fg(Color::Cyan)),
            ),
        ]),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(page_line).centered(), main_layout[2]);

    // Status bar
    let (status_text, status_color) = match listing.status() {
        ListingStatus::Loading => ("● Loading", Color::Yellow),
        ListingStatus::Ready => ("● Ready", Color::Green),
        ListingStatus::Empty => ("● No games", Color::DarkGray),
        ListingStatus::Error => ("● Error", Color::Red),
    };
    let mut status_spans = vec![
        Span::styled(status_text, Style::default().fg(status_color)),
        Span::raw(" | "),
        Span::styled("F1", Style::default().fg(Color::Cyan).bold()),
        Span::raw(": Help | "),
        Span::styled("ESC", Style::default().fg(Color::Cyan).bold()),
        Span::raw(": Quit"),
    ];
    if let Some(message) = &listing.error {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        ));
        status_spans.push(Span::raw(" (r: retry, x: dismiss)"));
    }
    frame.render_widget(Paragraph::new(Line::from(status_spans)), main_layout[3]);

    if let Some(details) = &tui.details {
        render_details_popup(frame, details);
    }
    if tui.show_help {
        render_help_popup(frame);
    }
}

fn dim_if(disabled: bool, style: Style) -> Style {
    if disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        style
    }
}

fn render_filters(frame: &mut Frame, listing: &ListingState, tui: &TuiState, area: Rect) {
    let genre = Genre::parse(&listing.query.genre)
        .map(Genre::label)
        .unwrap_or("All genres");

    let keyword_span = match &tui.keyword_input {
        Some(input) => Span::styled(
            format!("{input}▏"),
            Style::default().fg(Color::Yellow),
        ),
        None if listing.query.keyword.is_empty() => {
            Span::styled("(none)", Style::default().fg(Color::DarkGray))
        }
        None => Span::raw(listing.query.keyword.as_str()),
    };

    let line = Line::from(vec![
        Span::styled("Genre: ", Style::default().fg(Color::Cyan).bold()),
        Span::raw(genre),
        Span::raw("   "),
        Span::styled("Search: ", Style::default().fg(Color::Cyan).bold()),
        keyword_span,
    ]);

    let filters = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Discover Games ")
            .title_style(Style::default().fg(Color::Magenta).bold()),
    );
    frame.render_widget(filters, area);
}

fn render_games(frame: &mut Frame, listing: &ListingState, tui: &TuiState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Games ")
        .title_style(Style::default().fg(Color::Cyan).bold());

    if listing.is_initial_load() {
        frame.render_widget(Paragraph::new("Loading games...").block(block), area);
        return;
    }
    if listing.items.is_empty() {
        let text = Text::from(vec![
            Line::from("No games found").bold(),
            Line::from("Try adjusting your filters or check back later")
                .style(Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    let items: Vec<ListItem> = listing
        .items
        .iter()
        .map(|game| {
            let card = GameCardView::from(game);
            ListItem::new(Line::from(vec![
                Span::raw(card.title.clone()),
                Span::styled(
                    format!("  [{}]", card.genre_label()),
                    Style::default().fg(Color::Magenta),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("▶ ");
    let mut list_state = ListState::default().with_selected(Some(tui.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_card(frame: &mut Frame, listing: &ListingState, tui: &TuiState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Game ")
        .title_style(Style::default().fg(Color::Cyan).bold());

    let Some(game) = listing.items.get(tui.selected) else {
        frame.render_widget(block, area);
        return;
    };
    let card = GameCardView::from(game);
    let text = Text::from(vec![
        Line::from(card.title.clone()).bold(),
        Line::from(""),
        Line::from(vec![
            Span::styled("Genre   ", Style::default().fg(Color::DarkGray)),
            Span::raw(card.genre_label()),
        ]),
        Line::from(vec![
            Span::styled("Rating  ", Style::default().fg(Color::DarkGray)),
            Span::styled(card.rating_label(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled("Image   ", Style::default().fg(Color::DarkGray)),
            Span::raw(card.thumbnail.clone()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: Play Now",
            Style::default().fg(Color::Cyan),
        )),
    ]);
    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn render_details_popup(frame: &mut Frame, details: &DetailsPopup) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let (title, text) = match details {
        DetailsPopup::Loaded(game) => (
            format!(" {} ", game.name),
            Text::from(vec![
                Line::from(vec![
                    Span::styled("Developed by: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!("{} (@{})", game.developer.name, game.developer.username),
                        Style::default().fg(Color::Cyan),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Rating: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("★ {}", game.rating), Style::default().fg(Color::Yellow)),
                ]),
                Line::from(""),
                Line::from(game.description.clone()),
            ]),
        ),
        DetailsPopup::NotFound => (" Game ".to_string(), Text::from("Game not found")),
        DetailsPopup::Failed(message) => (
            " Error ".to_string(),
            Text::from(Line::from(message.clone()).style(Style::default().fg(Color::Red))),
        ),
    };

    let popup = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title)
            .title_style(Style::default().fg(Color::Cyan).bold())
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(popup, area);
}

fn render_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let help_text = Text::from(vec![
        Line::from(vec![Span::styled(
            "CONTROLS",
            Style::default().fg(Color::Yellow).bold(),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  BROWSE",
            Style::default().fg(Color::Cyan).bold(),
        )]),
        Line::from("  Up/Down       Select a game"),
        Line::from("  Enter         Show game details"),
        Line::from("  Left/Right    Previous / next page"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  FILTER",
            Style::default().fg(Color::Cyan).bold(),
        )]),
        Line::from("  g             Cycle genre"),
        Line::from("  /             Search titles (Enter to apply)"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  SYSTEM",
            Style::default().fg(Color::Cyan).bold(),
        )]),
        Line::from("  r / x         Retry / dismiss an error"),
        Line::from("  F1            Toggle this help"),
        Line::from("  ESC           Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press ESC or F1 to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ]);

    let help = Paragraph::new(help_text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help ")
            .title_style(Style::default().fg(Color::Cyan).bold())
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(help, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    use arena_core::catalog::Catalog;
    use arena_core::listing::ListingQuery;
    use arena_core::protocol::ListGamesParams;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn first_page() -> ListingState {
        let page = Catalog::demo().query(&ListGamesParams {
            page: 1,
            limit: 12,
            genre: None,
            keyword: None,
        });
        ListingState {
            query: ListingQuery::default(),
            items: page.items,
            total_pages: page.total_pages,
            loading: false,
            error: None,
        }
    }

    fn screen_text(listing: &ListingState, tui: &TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, listing, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn genre_cycles_through_all_and_back() {
        assert_eq!(next_genre(""), "action");
        assert_eq!(next_genre("action"), "adventure");
        assert_eq!(next_genre("other"), "");
        assert_eq!(next_genre("nonsense"), "action");
    }

    #[test]
    fn paging_keys_send_commands() {
        let listing = first_page();
        let mut tui = TuiState::default();
        assert_eq!(
            handle_key(&mut tui, key(KeyCode::Right), &listing),
            UserIntent::Send(ListingCommand::NextPage)
        );
        assert_eq!(
            handle_key(&mut tui, key(KeyCode::Char('p')), &listing),
            UserIntent::Send(ListingCommand::PrevPage)
        );
        assert_eq!(
            handle_key(&mut tui, key(KeyCode::Char('g')), &listing),
            UserIntent::Send(ListingCommand::SetFilter {
                key: FilterKey::Genre,
                value: "action".to_string(),
            })
        );
    }

    #[test]
    fn search_box_collects_keyword_until_enter() {
        let listing = first_page();
        let mut tui = TuiState::default();

        assert_eq!(handle_key(&mut tui, key(KeyCode::Char('/')), &listing), UserIntent::None);
        for c in "zeldq".chars() {
            handle_key(&mut tui, key(KeyCode::Char(c)), &listing);
        }
        // 'q' is typed, not quit.
        assert_eq!(tui.keyword_input.as_deref(), Some("zeldq"));
        handle_key(&mut tui, key(KeyCode::Backspace), &listing);

        assert_eq!(
            handle_key(&mut tui, key(KeyCode::Enter), &listing),
            UserIntent::Send(ListingCommand::SetFilter {
                key: FilterKey::Keyword,
                value: "zeld".to_string(),
            })
        );
        assert_eq!(tui.keyword_input, None);
    }

    #[test]
    fn selection_stays_on_screen_and_enter_opens_details() {
        let listing = first_page();
        let mut tui = TuiState::default();
        for _ in 0..20 {
            handle_key(&mut tui, key(KeyCode::Down), &listing);
        }
        assert_eq!(tui.selected, 11);

        assert_eq!(
            handle_key(&mut tui, key(KeyCode::Enter), &listing),
            UserIntent::ShowDetails(listing.items[11].id.clone())
        );
    }

    #[test]
    fn popups_swallow_keys_until_closed() {
        let listing = first_page();
        let mut tui = TuiState::default();
        handle_key(&mut tui, key(KeyCode::F(1)), &listing);
        assert!(tui.show_help);
        assert_eq!(handle_key(&mut tui, key(KeyCode::Char('q')), &listing), UserIntent::None);
        assert_eq!(handle_key(&mut tui, key(KeyCode::Esc), &listing), UserIntent::None);
        assert!(!tui.show_help);
        assert_eq!(handle_key(&mut tui, key(KeyCode::Esc), &listing), UserIntent::Quit);
    }

    #[test]
    fn renders_page_label_and_error() {
        let mut listing = first_page();
        let screen = screen_text(&listing, &TuiState::default());
        assert!(screen.contains("Page 1 of 3"));
        assert!(screen.contains("Stellar Blade"));

        listing.error = Some("Failed to fetch games".to_string());
        let screen = screen_text(&listing, &TuiState::default());
        assert!(screen.contains("Failed to fetch games"));
    }

    #[test]
    fn first_frame_shows_loading_not_empty_state() {
        let listing = ListingState::initial(ListingQuery::default());
        let screen = screen_text(&listing, &TuiState::default());
        assert!(screen.contains("Loading games..."));
        assert!(!screen.contains("No games found"));
    }

    #[test]
    fn renders_empty_state_without_pagination() {
        let listing = ListingState::default();
        let screen = screen_text(&listing, &TuiState::default());
        assert!(screen.contains("No games found"));
        assert!(!screen.contains("Page 1 of 1"));
    }
}
