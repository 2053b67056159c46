//! Entry list renderer — pure functions from records (or load status) to lines.
//!
//! The caller fully replaces the previous contents on every pass; there is no
//! incremental diffing. Body text goes through plain spans; annotations go
//! through the trusted markup renderer.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::corpus::Record;
use crate::tui::theme;
use crate::tui::widgets::markup::markup_to_lines;

/// Placeholder shown while the fetch is outstanding.
pub fn loading_lines() -> Vec<Line<'static>> {
    vec![Line::from(Span::styled("Loading…", theme::dim()))]
}

/// Single error node replacing the entry list on a fatal load failure.
pub fn error_lines(message: &str) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        format!("Error loading data: {message}"),
        Style::default().fg(theme::ERROR),
    ))]
}

/// Render the filtered record list, one block of lines per record.
pub fn entry_lines(records: &[&Record]) -> Vec<Line<'static>> {
    if records.is_empty() {
        return vec![Line::from(Span::styled("No entries found.", theme::dim()))];
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    for record in records {
        push_entry(record, &mut lines);
        lines.push(Line::raw(""));
    }
    // Drop the trailing separator
    lines.pop();
    lines
}

fn push_entry(record: &Record, lines: &mut Vec<Line<'static>>) {
    // Meta row: id, then category when present
    let mut meta: Vec<Span<'static>> = vec![Span::styled(
        format!("ID: {}", record.id_display()),
        theme::muted(),
    )];
    if !record.category.is_empty() {
        meta.push(Span::styled(
            format!("  Category: {}", record.category),
            theme::muted(),
        ));
    }
    lines.push(Line::from(meta));

    // Topic
    if record.topic.is_empty() {
        lines.push(Line::from(Span::styled("(no topic)", theme::dim())));
    } else {
        lines.push(Line::from(Span::styled(record.topic.clone(), theme::title())));
    }

    // Body text — plain, untrusted path; empty shows nothing
    for text_line in record.text.lines() {
        lines.push(Line::from(Span::styled(
            text_line.to_string(),
            Style::default().fg(theme::TEXT),
        )));
    }

    // Annotation — trusted markup path. The hint appears only for the
    // exactly-empty string; a whitespace-only annotation counts as present
    // and renders nothing visible.
    if record.annotation.is_empty() {
        lines.push(Line::from(Span::styled("No टीका", theme::dim())));
    } else if !record.annotation.trim().is_empty() {
        lines.push(Line::from(Span::styled("टीका:", theme::heading())));
        lines.extend(markup_to_lines(&record.annotation));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::record;

    fn text_of(lines: &[Line<'static>]) -> String {
        lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_empty_list_placeholder() {
        let lines = entry_lines(&[]);
        assert_eq!(text_of(&lines), "No entries found.");
    }

    #[test]
    fn test_loading_placeholder() {
        assert_eq!(text_of(&loading_lines()), "Loading…");
    }

    #[test]
    fn test_error_message_format() {
        let lines = error_lines("failed to fetch data: status 404");
        assert_eq!(
            text_of(&lines),
            "Error loading data: failed to fetch data: status 404"
        );
    }

    #[test]
    fn test_entry_shows_id_category_topic_text() {
        let r = record(5, "nyaya", "pramana", "the means of knowledge", "");
        let text = text_of(&entry_lines(&[&r]));
        assert!(text.contains("ID: 5"));
        assert!(text.contains("Category: nyaya"));
        assert!(text.contains("pramana"));
        assert!(text.contains("the means of knowledge"));
    }

    #[test]
    fn test_empty_category_omitted() {
        let r = record(1, "", "topic", "", "");
        let text = text_of(&entry_lines(&[&r]));
        assert!(!text.contains("Category:"));
    }

    #[test]
    fn test_empty_topic_placeholder() {
        let r = record(1, "", "", "body", "");
        let text = text_of(&entry_lines(&[&r]));
        assert!(text.contains("(no topic)"));
    }

    #[test]
    fn test_annotation_rendered_as_markup() {
        let r = record(1, "", "t", "", "plain <b>bold</b>");
        let lines = entry_lines(&[&r]);
        let text = text_of(&lines);
        assert!(text.contains("टीका:"));
        assert!(text.contains("plain bold"));
        assert!(!text.contains("<b>"));
    }

    #[test]
    fn test_missing_annotation_hint() {
        let r = record(1, "", "t", "", "");
        let text = text_of(&entry_lines(&[&r]));
        assert!(text.contains("No टीका"));
    }

    #[test]
    fn test_whitespace_annotation_renders_nothing() {
        // Present but blank after trimming — neither hint nor markup block
        let r = record(1, "", "t", "", "   ");
        let text = text_of(&entry_lines(&[&r]));
        assert!(!text.contains("No टीका"));
        assert!(!text.contains("टीका:"));
    }

    #[test]
    fn test_one_block_per_record_with_separators() {
        let a = record(1, "", "first", "", "");
        let b = record(2, "", "second", "", "");
        let text = text_of(&entry_lines(&[&a, &b]));
        assert!(text.contains("first"));
        assert!(text.contains("second"));
        assert!(text.contains("\n\n")); // blank separator line
    }
}
