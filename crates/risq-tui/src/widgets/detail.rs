//! Detail widget — the expandable full-record view on the right.
//!
//! Shows every text field of the selected record through
//! [`risq_core::search::detail_lines`]: keyword occurrences highlighted,
//! paragraph breaks after sentence-ending periods, Hangul lines styled
//! differently from English ones. The record's document attachments are
//! listed at the bottom. The same pane doubles as the viewer for the
//! accumulated feedback log (`:feedback`).

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use risq_core::{search, Record, Section};

const PAGE_STEP: usize = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// What the detail pane is currently showing.
#[derive(Debug, Default)]
pub enum DetailContent {
    /// Nothing selected yet.
    #[default]
    Empty,
    /// Identifier lookup missed; holds the identifier that was queried.
    NotFound(String),
    /// A record, with the keyword to highlight (empty for identifier
    /// lookups) and its document attachment names.
    Record {
        record: Record,
        keyword: String,
        documents: Vec<String>,
    },
    /// The accumulated feedback log, `None` when no feedback exists yet.
    Feedback(Option<String>),
}

#[derive(Debug)]
pub struct DetailState {
    pub content: DetailContent,
    /// Number of lines scrolled off the top.
    pub scroll: usize,
    /// Cached from the last render for scroll clamping.
    last_line_count: Cell<usize>,
    last_height: Cell<usize>,
}

impl Default for DetailState {
    fn default() -> Self {
        Self {
            content: DetailContent::Empty,
            scroll: 0,
            last_line_count: Cell::new(0),
            last_height: Cell::new(20),
        }
    }
}

impl DetailState {
    /// Replace the content and reset the scroll position.
    pub fn show(&mut self, content: DetailContent) {
        self.content = content;
        self.scroll = 0;
    }

    fn max_scroll(&self) -> usize {
        self.last_line_count
            .get()
            .saturating_sub(self.last_height.get().max(1))
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
            }
            AppEvent::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(PAGE_STEP);
            }
            AppEvent::ScrollDown => {
                self.scroll = (self.scroll + PAGE_STEP).min(self.max_scroll());
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Detail<'a> {
    state: &'a DetailState,
    focused: bool,
    theme: &'a Theme,
    show_section_labels: bool,
}

impl<'a> Detail<'a> {
    pub fn new(
        state: &'a DetailState,
        focused: bool,
        theme: &'a Theme,
        show_section_labels: bool,
    ) -> Self {
        Self { state, focused, theme, show_section_labels }
    }

    fn build_lines(&self) -> Vec<Line<'static>> {
        match &self.state.content {
            DetailContent::Empty => vec![Line::from(Span::styled(
                "select a result to expand it".to_string(),
                self.theme.muted,
            ))],
            DetailContent::NotFound(no) => vec![Line::from(Span::styled(
                format!("no data for RISQ {no}"),
                self.theme.muted,
            ))],
            DetailContent::Record { record, keyword, documents } => {
                self.build_record_lines(record, keyword, documents)
            }
            DetailContent::Feedback(log) => self.build_feedback_lines(log.as_deref()),
        }
    }

    fn build_record_lines(
        &self,
        record: &Record,
        keyword: &str,
        documents: &[String],
    ) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            format!("RISQ {}", record.no),
            self.theme.record_no,
        ))];

        for section in Section::ALL {
            let field = section.field_of(record);
            if field.is_empty() {
                continue;
            }
            lines.push(Line::default());
            if self.show_section_labels {
                lines.push(Line::from(Span::styled(
                    section.to_string(),
                    self.theme.section_style(section),
                )));
            }
            for detail in search::detail_lines(field, keyword) {
                let base = if detail.hangul { self.theme.hangul } else { Style::default() };
                let mut spans = vec![Span::raw("  ")];
                spans.extend(detail.fragments.into_iter().map(|fragment| {
                    let style = if fragment.hit { self.theme.search_highlight } else { base };
                    Span::styled(fragment.text, style)
                }));
                lines.push(Line::from(spans));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Documents".to_string(),
            self.theme.record_no,
        )));
        if documents.is_empty() {
            lines.push(Line::from(Span::styled(
                "  no documents".to_string(),
                self.theme.muted,
            )));
        } else {
            for name in documents {
                lines.push(Line::from(format!("  - {name}")));
            }
        }

        lines
    }

    fn build_feedback_lines(&self, log: Option<&str>) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            "Feedback log".to_string(),
            self.theme.record_no,
        ))];
        lines.push(Line::default());
        match log {
            None => lines.push(Line::from(Span::styled(
                "no feedback yet".to_string(),
                self.theme.muted,
            ))),
            Some(content) => {
                for line in content.lines() {
                    lines.push(Line::from(line.to_string()));
                }
            }
        }
        lines
    }
}

impl Widget for Detail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().title("Detail").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = self.build_lines();
        let height = inner.height as usize;

        // Cache for handle() — draw always runs before the next handle()
        self.state.last_line_count.set(lines.len());
        self.state.last_height.set(height);

        let start = self.state.scroll.min(lines.len().saturating_sub(1));
        let end = (start + height).min(lines.len());
        let visible: Vec<Line<'static>> = lines[start..end].to_vec();

        Paragraph::new(visible).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
