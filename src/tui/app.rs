//! Application state machine and event loop (Elm architecture).
//!
//! Two live phases: `Loading` (initial, no controls wired) and `Ready`
//! (filter + render on every input). `Failed` is terminal — any fetch,
//! parse, or format error leaves only quit.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::corpus::filter::{filter, FilterState};
use crate::corpus::Record;

use super::events::AppEvent;
use super::facets::FacetPanel;
use super::layout::AppLayout;
use super::theme;
use super::views::entries;
use super::widgets::input_buffer::InputBuffer;

/// Which region has keyboard focus while the corpus is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusZone {
    /// Entry list — j/k scroll, `/` to search, Tab to facets.
    List,
    /// Search bar is active — typing edits the query.
    Search,
    /// Facet panel — j/k move selection, Enter applies.
    Facets,
}

/// What a globally-bound key did with the input.
enum KeyOutcome {
    Quit,
    Consumed,
    Ignored,
}

/// Load-phase state machine.
enum Phase {
    Loading,
    Ready(ReadyState),
    /// Terminal; the message is rendered in place of the entry list.
    Failed(String),
}

/// Everything that only exists once the corpus has loaded.
///
/// `records` is written once here and read-only afterwards; every filter
/// pass reads the three filter fields fresh from the live widgets.
struct ReadyState {
    records: Vec<Record>,
    facets: FacetPanel,
    search: InputBuffer,
    category: String,
    only_annotated: bool,
    focus: FocusZone,
    scroll: usize,
    /// Rendered lines for the current match set, rebuilt on every filter pass.
    lines: Vec<Line<'static>>,
    match_count: usize,
    /// True when the search input changed but no filter pass ran yet.
    search_pending: bool,
    /// Timestamp of the last search edit.
    last_search_edit: Option<Instant>,
}

impl ReadyState {
    fn new(records: Vec<Record>) -> Self {
        let facets = FacetPanel::build(&records);
        let mut state = Self {
            records,
            facets,
            search: InputBuffer::new(),
            category: String::new(),
            only_annotated: false,
            focus: FocusZone::List,
            scroll: 0,
            lines: Vec::new(),
            match_count: 0,
            search_pending: false,
            last_search_edit: None,
        };
        // Initial pass with the default (identity) filter state
        state.refresh();
        state
    }

    /// Current filter state, read fresh from the live control values.
    fn filter_state(&self) -> FilterState {
        FilterState {
            query: self.search.text().to_string(),
            category: self.category.clone(),
            only_annotated: self.only_annotated,
        }
    }

    /// One filter + render pass.
    fn refresh(&mut self) {
        let state = self.filter_state();
        let (lines, count) = {
            let matches = filter(&self.records, &state);
            (entries::entry_lines(&matches), matches.len())
        };
        self.lines = lines;
        self.match_count = count;
        if self.scroll >= self.lines.len() {
            self.scroll = self.lines.len().saturating_sub(1);
        }
    }

    /// Mark the search input dirty, (re)starting the debounce window.
    fn mark_search_dirty(&mut self) {
        self.search_pending = true;
        self.last_search_edit = Some(Instant::now());
    }

    /// Run a pending debounced search pass once the quiet period elapsed.
    fn poll_debounce(&mut self, window: Duration) {
        if self.search_pending
            && self
                .last_search_edit
                .is_some_and(|ts| ts.elapsed() >= window)
        {
            self.search_pending = false;
            self.refresh();
        }
    }

    fn scroll_down(&mut self, step: usize) {
        // Paragraph::scroll takes a u16 offset, so the cursor never needs to
        // go past that even for very long renders.
        let max = self.lines.len().saturating_sub(1).min(u16::MAX as usize);
        self.scroll = self.scroll.saturating_add(step).min(max);
    }

    fn scroll_up(&mut self, step: usize) {
        self.scroll = self.scroll.saturating_sub(step);
    }
}

/// Central application state.
pub struct AppState {
    running: bool,
    phase: Phase,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    search_debounce: Duration,
}

impl AppState {
    pub fn new(event_rx: mpsc::UnboundedReceiver<AppEvent>, config: &AppConfig) -> Self {
        Self {
            running: true,
            phase: Phase::Loading,
            event_rx,
            search_debounce: Duration::from_millis(config.tui.search_debounce_ms),
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.handle_event(AppEvent::Tick);
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {
                if let Phase::Ready(ref mut ready) = self.phase {
                    ready.poll_debounce(self.search_debounce);
                }
            }
            AppEvent::Input(crossterm_event) => self.handle_input(&crossterm_event),
            AppEvent::CorpusLoaded(records) => {
                log::info!("Corpus ready: {} records", records.len());
                self.phase = Phase::Ready(ReadyState::new(records));
            }
            AppEvent::LoadFailed(message) => {
                log::error!("Corpus load failed: {message}");
                self.phase = Phase::Failed(message);
            }
        }
    }

    fn handle_input(&mut self, event: &Event) {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return;
        };

        // Ctrl+C always quits
        if *modifiers == KeyModifiers::CONTROL && *code == KeyCode::Char('c') {
            self.running = false;
            return;
        }

        match &mut self.phase {
            // No controls are wired before the corpus arrives
            Phase::Loading | Phase::Failed(_) => {
                if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
                    self.running = false;
                }
            }
            Phase::Ready(ready) => match ready.focus {
                FocusZone::Search => Self::handle_search_key(ready, *code),
                _ => match Self::handle_global_key(ready, *code) {
                    KeyOutcome::Quit => self.running = false,
                    KeyOutcome::Consumed => {}
                    KeyOutcome::Ignored => Self::handle_browse_key(ready, *code),
                },
            },
        }
    }

    /// Keys that apply in both List and Facets zones.
    fn handle_global_key(ready: &mut ReadyState, code: KeyCode) -> KeyOutcome {
        match code {
            KeyCode::Char('q') => KeyOutcome::Quit,
            KeyCode::Char('/') => {
                ready.focus = FocusZone::Search;
                KeyOutcome::Consumed
            }
            KeyCode::Tab => {
                ready.focus = match ready.focus {
                    FocusZone::Facets => FocusZone::List,
                    _ => FocusZone::Facets,
                };
                KeyOutcome::Consumed
            }
            KeyCode::Char('t') => {
                ready.only_annotated = !ready.only_annotated;
                ready.refresh();
                KeyOutcome::Consumed
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// List scrolling and facet selection.
    fn handle_browse_key(ready: &mut ReadyState, code: KeyCode) {
        match ready.focus {
            FocusZone::List => match code {
                KeyCode::Char('j') | KeyCode::Down => ready.scroll_down(1),
                KeyCode::Char('k') | KeyCode::Up => ready.scroll_up(1),
                KeyCode::PageDown => ready.scroll_down(10),
                KeyCode::PageUp => ready.scroll_up(10),
                KeyCode::Home => ready.scroll = 0,
                _ => {}
            },
            FocusZone::Facets => match code {
                KeyCode::Char('j') | KeyCode::Down => ready.facets.select_next(),
                KeyCode::Char('k') | KeyCode::Up => ready.facets.select_prev(),
                KeyCode::Enter => {
                    // Same pass the category selector change would run
                    ready.category = ready.facets.selected_value().to_string();
                    ready.refresh();
                }
                KeyCode::Esc => ready.focus = FocusZone::List,
                _ => {}
            },
            FocusZone::Search => {}
        }
    }

    /// Search-bar editing; every edit restarts the debounce window.
    fn handle_search_key(ready: &mut ReadyState, code: KeyCode) {
        match code {
            KeyCode::Esc => ready.focus = FocusZone::List,
            KeyCode::Enter => {
                // Apply immediately, canceling any pending debounced pass
                ready.search_pending = false;
                ready.refresh();
                ready.focus = FocusZone::List;
            }
            KeyCode::Backspace => {
                ready.search.backspace();
                ready.mark_search_dirty();
            }
            KeyCode::Left => ready.search.move_left(),
            KeyCode::Right => ready.search.move_right(),
            KeyCode::Home => ready.search.move_home(),
            KeyCode::End => ready.search.move_end(),
            KeyCode::Char(c) => {
                ready.search.insert_char(c);
                ready.mark_search_dirty();
            }
            _ => {}
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let layout = AppLayout::compute(frame.area());

        match &self.phase {
            Phase::Loading => {
                Self::render_placeholder(frame, &layout, entries::loading_lines());
            }
            Phase::Failed(message) => {
                Self::render_placeholder(frame, &layout, entries::error_lines(message));
            }
            Phase::Ready(ready) => {
                if let Some(area) = layout.facets {
                    ready.facets.render(
                        frame,
                        area,
                        &ready.category,
                        ready.focus == FocusZone::Facets,
                    );
                }
                Self::render_search_bar(frame, layout.search, ready);
                Self::render_entries(frame, layout.entries, ready);
                Self::render_status(frame, layout.status, ready);
            }
        }
    }

    /// Loading / error states: a single placeholder in the entries region,
    /// inert search bar, no facet panel.
    fn render_placeholder(frame: &mut Frame, layout: &AppLayout, lines: Vec<Line<'static>>) {
        let search = Paragraph::new("").block(theme::block_default("Search"));
        frame.render_widget(search, layout.search);

        let body = Paragraph::new(lines).block(theme::block_default("Entries"));
        frame.render_widget(body, layout.entries);

        let hint = Line::from(vec![
            Span::styled(" granthika ", theme::heading()),
            Span::styled(" q:quit", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hint), layout.status);
    }

    fn render_search_bar(frame: &mut Frame, area: Rect, ready: &ReadyState) {
        let focused = ready.focus == FocusZone::Search;
        let block = if focused {
            theme::block_focused("Search")
        } else {
            theme::block_default("Search")
        };
        let input = Paragraph::new(Line::from(Span::styled(
            ready.search.text().to_string(),
            Style::default().fg(theme::TEXT),
        )))
        .block(block);
        frame.render_widget(input, area);

        if focused {
            frame.set_cursor_position((
                area.x + 1 + ready.search.cursor_column() as u16,
                area.y + 1,
            ));
        }
    }

    fn render_entries(frame: &mut Frame, area: Rect, ready: &ReadyState) {
        let block = if ready.focus == FocusZone::List {
            theme::block_focused("Entries")
        } else {
            theme::block_default("Entries")
        };
        let body = Paragraph::new(ready.lines.clone())
            .block(block)
            .scroll((u16::try_from(ready.scroll).unwrap_or(u16::MAX), 0));
        frame.render_widget(body, area);
    }

    fn render_status(frame: &mut Frame, area: Rect, ready: &ReadyState) {
        let mut spans = vec![
            Span::styled(" granthika ", theme::heading()),
            Span::styled(
                format!(" {}/{} entries ", ready.match_count, ready.records.len()),
                theme::muted(),
            ),
        ];
        if !ready.category.is_empty() {
            spans.push(Span::styled(
                format!(" [{}] ", ready.category),
                Style::default().fg(theme::ACCENT),
            ));
        }
        if ready.only_annotated {
            spans.push(Span::styled(" [टीका only] ", Style::default().fg(theme::ACCENT)));
        }
        spans.push(Span::styled(
            " /:search  Tab:facets  t:annotated  j/k:scroll  q:quit",
            theme::key_hint(),
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
