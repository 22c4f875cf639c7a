//! Results widget — the scrollable match list on the left.
//!
//! Each row is one [`Hit`]: record identifier, section label, and the
//! sentence-bounded snippet with keyword occurrences highlighted. Ellipsis
//! markers appear on snippet sides that were clipped.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one row |
//! | `↓` / `j` | Move cursor down one row |
//! | `PageUp` / `Ctrl+u` | Scroll up one page |
//! | `PageDown` / `Ctrl+d` | Scroll down one page |
//! | `Enter` | Open the selected record in the detail pane (App shell) |

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};
use risq_core::Hit;

const PAGE_STEP: usize = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

pub struct ResultsState {
    pub hits: Vec<Hit>,
    /// Absolute index into `hits` of the highlighted row.
    pub cursor: usize,
    /// Index of the first visible row.
    pub scroll_offset: usize,
    /// The query that produced `hits`; `None` until the first query runs.
    /// Distinguishes the initial blank pane from a genuine empty result.
    pub queried: Option<String>,
    /// Cached from the last render so `handle()` can do cursor-aware scrolling.
    last_height: Cell<usize>,
}

impl Default for ResultsState {
    fn default() -> Self {
        Self {
            hits: Vec::new(),
            cursor: 0,
            scroll_offset: 0,
            queried: None,
            last_height: Cell::new(20),
        }
    }
}

impl ResultsState {
    /// Replace the hit list after a query ran. Resets cursor and scroll.
    pub fn set_hits(&mut self, query: impl Into<String>, hits: Vec<Hit>) {
        self.hits = hits;
        self.cursor = 0;
        self.scroll_offset = 0;
        self.queried = Some(query.into());
    }

    /// The hit under the cursor, if any.
    pub fn selected(&self) -> Option<&Hit> {
        self.hits.get(self.cursor)
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Keep the cursor inside the visible window, moving the window if needed.
    fn clamp_scroll(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + self.height() {
            self.scroll_offset = self.cursor + 1 - self.height();
        }
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        let total = self.hits.len();
        if total == 0 {
            return;
        }

        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                self.clamp_scroll();
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < total {
                    self.cursor += 1;
                }
                self.clamp_scroll();
            }
            AppEvent::ScrollUp => {
                self.cursor = self.cursor.saturating_sub(PAGE_STEP);
                self.clamp_scroll();
            }
            AppEvent::ScrollDown => {
                self.cursor = (self.cursor + PAGE_STEP).min(total - 1);
                self.clamp_scroll();
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Results<'a> {
    state: &'a ResultsState,
    focused: bool,
    theme: &'a Theme,
    /// Whether to render the section label column.
    show_section_labels: bool,
    /// Shown when a query ran but produced no hits.
    empty_message: &'a str,
}

impl<'a> Results<'a> {
    pub fn new(
        state: &'a ResultsState,
        focused: bool,
        theme: &'a Theme,
        show_section_labels: bool,
        empty_message: &'a str,
    ) -> Self {
        Self { state, focused, theme, show_section_labels, empty_message }
    }
}

impl Widget for Results<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let title = match self.state.queried {
            Some(_) => format!("Results ({})", self.state.hits.len()),
            None => "Results".to_string(),
        };
        let block = Block::bordered().title(title).border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        // Cache for handle() — draw always runs before the next handle()
        self.state.last_height.set(height);

        // Empty states: no query yet vs a query with zero hits.
        if self.state.hits.is_empty() {
            let msg = match self.state.queried {
                None => "press / and type a query",
                Some(_) => self.empty_message,
            };
            Paragraph::new(Line::from(Span::styled(msg.to_string(), self.theme.muted)))
                .render(inner, buf);
            return;
        }

        let total = self.state.hits.len();
        let start = self.state.scroll_offset.min(total.saturating_sub(1));
        let end = (start + height).min(total);

        let lines: Vec<Line<'static>> = self.state.hits[start..end]
            .iter()
            .enumerate()
            .map(|(row, hit)| {
                let mut line = render_hit(hit, self.show_section_labels, self.theme);
                if self.focused && start + row == self.state.cursor {
                    line = line.patch_style(Style::default().add_modifier(Modifier::REVERSED));
                }
                line
            })
            .collect();

        // Split inner into text (fill) + 1-column scrollbar strip.
        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        Paragraph::new(lines).render(text_area, buf);

        let mut sb_state = ScrollbarState::new(total)
            .position(start)
            .viewport_content_length(height);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Row rendering
// ---------------------------------------------------------------------------

fn render_hit(hit: &Hit, show_section: bool, theme: &Theme) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    spans.push(Span::styled(format!("{:<6} ", hit.no), theme.record_no));

    if show_section {
        spans.push(Span::styled(
            format!("{:<11} ", hit.section.to_string()),
            theme.section_style(hit.section),
        ));
    }

    spans.push(Span::styled(
        "│ ".to_string(),
        Style::default().add_modifier(Modifier::DIM),
    ));

    if hit.snippet.clipped_start {
        spans.push(Span::styled("… ".to_string(), theme.muted));
    }
    for fragment in &hit.fragments {
        let style = if fragment.hit {
            theme.search_highlight
        } else {
            Style::default()
        };
        spans.push(Span::styled(fragment.text.clone(), style));
    }
    if hit.snippet.clipped_end {
        spans.push(Span::styled(" …".to_string(), theme.muted));
    }

    Line::from(spans)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
