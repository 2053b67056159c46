//! Root layout computation: facet sidebar + search bar + entry list + status.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the facet sidebar.
pub const FACETS_WIDTH: u16 = 28;
/// Hide the facet sidebar below this terminal width.
pub const HIDE_FACETS_THRESHOLD: u16 = 56;
/// Height of the search bar (one text row plus borders).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Computed layout regions for a single frame.
pub struct AppLayout {
    /// Facet sidebar (None when the terminal is too narrow).
    pub facets: Option<Rect>,
    /// Search input bar.
    pub search: Rect,
    /// Entry list area.
    pub entries: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

impl AppLayout {
    /// Compute layout regions from the terminal area.
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Min(1),    // Content (facets + main column)
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        let content = rows[0];
        let status = rows[1];

        let (facets, main) = if area.width < HIDE_FACETS_THRESHOLD {
            (None, content)
        } else {
            let cols = Layout::horizontal([
                Constraint::Length(FACETS_WIDTH),
                Constraint::Min(1),
            ])
            .split(content);
            (Some(cols[0]), cols[1])
        };

        let main_rows = Layout::vertical([
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Min(1),
        ])
        .split(main);

        AppLayout {
            facets,
            search: main_rows[0],
            entries: main_rows[1],
            status,
        }
    }
}
