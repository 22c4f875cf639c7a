//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        detail::{Detail, DetailContent, DetailState},
        help::HelpPopup,
        query_bar::{QueryBar, QueryBarState},
        results::{Results, ResultsState},
        tab_bar::TabBar,
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use risq_core::{
    config::Config, docs, feedback::FeedbackLog, search, Dataset, Fragment, Hit, Section, Snippet,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus + tab types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Query,
    Results,
    Detail,
    /// Vim-style `:` command line is active.
    Command,
}

/// Which query mode a tab runs — mirrors the original form's two tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKind {
    /// Exact RISQ-number lookup.
    Number,
    /// Free-text keyword search.
    Keyword,
}

pub struct TabState {
    pub label: String,
    pub kind: TabKind,
    pub query: QueryBarState,
    pub results: ResultsState,
    pub detail: DetailState,
}

impl TabState {
    fn new(label: &str, kind: TabKind) -> Self {
        Self {
            label: label.to_string(),
            kind,
            query: QueryBarState::default(),
            results: ResultsState::default(),
            detail: DetailState::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub dataset: Dataset,
    pub feedback: FeedbackLog,
    pub tabs: Vec<TabState>,
    pub active_tab: usize,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(dataset: Dataset, config: Config, theme: Theme) -> Self {
        let feedback = FeedbackLog::new(config.data.feedback_file.clone());

        let state = AppState {
            dataset,
            feedback,
            tabs: vec![
                TabState::new("1:number", TabKind::Number),
                TabState::new("2:keyword", TabKind::Keyword),
            ],
            active_tab: 0,
            focus: Focus::Query,
            prev_focus: Focus::Query,
            theme,
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
        };

        App { state }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(
                                focus = ?self.state.focus,
                                event = ?ev,
                                "key event"
                            );
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => {
                    let input = s.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            execute_command(s, cmd);
                            // Execution failures (feedback I/O) land in
                            // command_bar.error; keep the bar open to show
                            // them.
                            if s.command_bar.error.is_none() {
                                s.command_bar.clear();
                                s.focus = s.prev_focus;
                            }
                        }
                        Err(msg) if msg.is_empty() => {
                            // Empty input — just close
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                other => s.command_bar.handle(&other),
            }
            return;
        }

        match event {
            // Toggle help (only when not typing in the query bar)
            AppEvent::Char('?') if s.focus != Focus::Query => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            // Enter command mode with `:` (not from the query bar)
            AppEvent::Char(':') if s.focus != Focus::Query => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            // Return focus from query bar
            AppEvent::Escape => {
                if s.focus == Focus::Query {
                    tracing::debug!("focus: Query -> Results");
                    s.focus = Focus::Results;
                }
            }

            // Tab-cycle focus: Query → Results → Detail → Query
            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::Query => Focus::Results,
                    Focus::Results => Focus::Detail,
                    Focus::Detail | Focus::Command => Focus::Query,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            // Jump to query bar
            AppEvent::QueryFocus => {
                tracing::debug!("focus -> Query");
                s.focus = Focus::Query;
            }

            // Switch between the number and keyword tabs
            AppEvent::TabNext | AppEvent::TabPrev => {
                s.active_tab = (s.active_tab + 1) % s.tabs.len();
                tracing::debug!(tab = %s.tabs[s.active_tab].label, "tab switched");
            }

            AppEvent::Enter => match s.focus {
                Focus::Query => run_query(s),
                Focus::Results => open_selected(s),
                _ => {}
            },

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Query | Focus::Command)
}

// ---------------------------------------------------------------------------
// Query execution
// ---------------------------------------------------------------------------

/// Run the active tab's query against the dataset.
fn run_query(s: &mut AppState) {
    let tab = &mut s.tabs[s.active_tab];
    let input = tab.query.input.trim().to_string();
    if input.is_empty() {
        // Empty input short-circuits before any scanning.
        return;
    }

    match tab.kind {
        TabKind::Number => match s.dataset.get(&input) {
            Some(record) => {
                tracing::debug!(no = %input, "number lookup hit");
                let documents = document_names(s, &input);
                let tab = &mut s.tabs[s.active_tab];
                tab.results.set_hits(input.clone(), vec![lookup_row(record)]);
                tab.detail.show(DetailContent::Record {
                    record: record.clone(),
                    keyword: String::new(),
                    documents,
                });
                s.focus = Focus::Detail;
            }
            None => {
                tracing::debug!(no = %input, "number lookup miss");
                tab.results.set_hits(input.clone(), Vec::new());
                tab.detail.show(DetailContent::NotFound(input));
            }
        },
        TabKind::Keyword => {
            let hits = search::keyword_search(&s.dataset, &input);
            let any = !hits.is_empty();
            tab.results.set_hits(input, hits);
            if any {
                open_selected(s);
                s.focus = Focus::Results;
            }
        }
    }
}

/// Expand the result under the cursor into the detail pane.
fn open_selected(s: &mut AppState) {
    let tab = &mut s.tabs[s.active_tab];
    let Some(hit) = tab.results.selected() else { return };
    let no = hit.no.clone();

    let Some(record) = s.dataset.get(&no).cloned() else {
        // Hits always come from the dataset, so this cannot happen.
        return;
    };
    let keyword = match tab.kind {
        TabKind::Number => String::new(),
        TabKind::Keyword => tab.results.queried.clone().unwrap_or_default(),
    };
    let documents = document_names(s, &no);
    let tab = &mut s.tabs[s.active_tab];
    tab.detail.show(DetailContent::Record { record, keyword, documents });
}

fn document_names(s: &AppState, no: &str) -> Vec<String> {
    docs::list_documents(&s.config.data.docs_dir, no)
        .into_iter()
        .map(|d| d.name)
        .collect()
}

/// A result row for an exact-number lookup: one line carrying the record's
/// description, no keyword highlighting.
fn lookup_row(record: &risq_core::Record) -> Hit {
    Hit {
        no: record.no.clone(),
        section: Section::Description,
        snippet: Snippet {
            text: record.description.clone(),
            ..Default::default()
        },
        fragments: vec![Fragment::plain(record.description.clone())],
    }
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    let tab = &mut s.tabs[s.active_tab];
    match s.focus {
        Focus::Query => tab.query.handle(&event),
        Focus::Results => tab.results.handle(&event),
        Focus::Detail => tab.detail.handle(&event),
        Focus::Command => {} // handled before dispatch, should not reach here
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line tab bar | body | 3-line query bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .split(area);

    // Horizontal body split: results (fill) | detail pane
    let pct = state.config.ui.detail_pane_width_pct;
    let horiz = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Percentage(pct)])
        .split(vert[1]);

    let tab = &state.tabs[state.active_tab];
    let (title, placeholder, empty_message) = match tab.kind {
        TabKind::Number => (
            "RISQ number",
            "press / and enter a RISQ number, e.g. 4.16",
            "no data for this RISQ number",
        ),
        TabKind::Keyword => (
            "Keyword",
            "press / and enter a keyword, e.g. safety officer",
            "no matching items",
        ),
    };

    frame.render_widget(TabBar::new(&state.tabs, state.active_tab, &state.theme), vert[0]);
    frame.render_widget(
        Results::new(
            &tab.results,
            state.focus == Focus::Results,
            &state.theme,
            state.config.ui.show_section_labels,
            empty_message,
        ),
        horiz[0],
    );
    frame.render_widget(
        Detail::new(
            &tab.detail,
            state.focus == Focus::Detail,
            &state.theme,
            state.config.ui.show_section_labels,
        ),
        horiz[1],
    );
    frame.render_widget(
        QueryBar::new(
            &tab.query,
            state.focus == Focus::Query,
            &state.theme,
            title,
            placeholder,
        ),
        vert[2],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom() - 1, height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return; // cursor is set; skip query-bar cursor below
    }

    // Position the terminal cursor when the query bar is focused
    if state.focus == Focus::Query {
        let qb = QueryBar::new(&tab.query, true, &state.theme, title, placeholder);
        let (cx, cy) = qb.cursor_position(vert[2]);
        frame.set_cursor_position((cx, cy));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
