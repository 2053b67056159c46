//! Category facet panel: one row per distinct category with a live count.
//!
//! Built once after the corpus loads. The "All" row always comes first and
//! shows the unconditional record count; Enter on a row sets the category
//! filter exactly like the category selector change it stands in for.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::corpus::categories::{categories, count_in_category};
use crate::corpus::Record;

use super::theme;

/// One category shortcut with its record count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facet {
    /// Trimmed category value; `""` means "no category".
    pub value: String,
    pub count: usize,
}

impl Facet {
    pub fn label(&self) -> String {
        let name = if self.value.is_empty() {
            "(no category)"
        } else {
            &self.value
        };
        format!("{name} ({})", self.count)
    }
}

/// Facet panel state: the derived category index plus a selection cursor.
pub struct FacetPanel {
    facets: Vec<Facet>,
    /// Selected row; 0 is the "All" row, 1.. index into `facets`.
    selected: usize,
    /// Unconditional record count for the "All" row.
    total: usize,
}

impl FacetPanel {
    /// Derive the facet list from the loaded corpus.
    pub fn build(records: &[Record]) -> Self {
        let facets = categories(records)
            .into_iter()
            .map(|value| Facet {
                count: count_in_category(records, &value),
                value,
            })
            .collect();
        Self {
            facets,
            selected: 0,
            total: records.len(),
        }
    }

    /// Rows including the leading "All" entry.
    pub fn len(&self) -> usize {
        self.facets.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false // the "All" row always exists
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.len();
    }

    pub fn select_prev(&mut self) {
        if self.selected == 0 {
            self.selected = self.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Category filter value of the selected row (`""` for "All").
    pub fn selected_value(&self) -> &str {
        match self.selected {
            0 => "",
            n => &self.facets[n - 1].value,
        }
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    /// Render the panel. `active` is the category filter currently applied.
    pub fn render(&self, frame: &mut Frame, area: Rect, active: &str, focused: bool) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(" Categories", theme::heading())));

        for (idx, label, value) in &self.rows() {
            if lines.len() >= area.height as usize {
                break;
            }
            let is_active = value == active;
            let is_selected = focused && *idx == self.selected;

            let (prefix, style) = if is_selected {
                ("▸ ", theme::highlight())
            } else if is_active {
                ("  ", Style::default().fg(theme::ACCENT))
            } else {
                ("  ", theme::muted())
            };

            let padded = format!("{:<width$}", format!("{prefix}{label}"), width = area.width as usize);
            lines.push(Line::from(Span::styled(padded, style)));
        }

        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(theme::BG_SURFACE)),
            area,
        );
    }

    /// (row index, label, category value) for every row, "All" first.
    fn rows(&self) -> Vec<(usize, String, String)> {
        let all = std::iter::once((0, format!("All ({})", self.total), String::new()));
        let rest = self
            .facets
            .iter()
            .enumerate()
            .map(|(i, f)| (i + 1, f.label(), f.value.clone()));
        all.chain(rest).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::record;

    fn panel() -> FacetPanel {
        FacetPanel::build(&[
            record(1, "nyaya", "", "", ""),
            record(2, "", "", "", ""),
            record(3, "nyaya", "", "", ""),
        ])
    }

    #[test]
    fn test_all_row_first_with_total() {
        let p = panel();
        let rows = p.rows();
        assert_eq!(rows[0].1, "All (3)");
        assert_eq!(rows[0].2, "");
    }

    #[test]
    fn test_facet_labels_and_counts() {
        let p = panel();
        let labels: Vec<String> = p.facets().iter().map(Facet::label).collect();
        assert_eq!(labels, ["(no category) (1)", "nyaya (2)"]);
    }

    #[test]
    fn test_selection_wraps() {
        let mut p = panel();
        assert_eq!(p.selected_value(), "");
        p.select_next();
        assert_eq!(p.selected_value(), ""); // "(no category)" facet
        p.select_next();
        assert_eq!(p.selected_value(), "nyaya");
        p.select_next();
        assert_eq!(p.selected_value(), ""); // wrapped to "All"
        p.select_prev();
        assert_eq!(p.selected_value(), "nyaya");
    }

    #[test]
    fn test_empty_corpus_still_has_all_row() {
        let p = FacetPanel::build(&[]);
        assert_eq!(p.len(), 1);
        assert_eq!(p.rows()[0].1, "All (0)");
    }
}
