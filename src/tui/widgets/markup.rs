//! Trusted markup → ratatui Lines renderer.
//!
//! Annotation bodies come from a fixed, curated corpus and may carry simple
//! inline markup (`<b>`, `<i>`, `<br>`, `<p>`, character entities). They are
//! interpreted as rich text rather than escaped — the deliberate trusted
//! counterpart to the plain `Span::raw` path used for body text.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::tui::theme;

/// Convert trusted markup text to styled ratatui lines.
///
/// Unknown tags are dropped; their content is kept. Tag matching is
/// case-insensitive and ignores attributes.
pub fn markup_to_lines(raw: &str) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut style_stack: Vec<Style> = vec![Style::default().fg(theme::TEXT)];
    let mut buf = String::new();

    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '<' => {
                let mut tag = String::new();
                let mut terminated = false;
                for c in chars.by_ref() {
                    if c == '>' {
                        terminated = true;
                        break;
                    }
                    tag.push(c);
                }
                if !terminated {
                    // Stray '<' at end of input — keep it as text.
                    buf.push('<');
                    buf.push_str(&tag);
                    break;
                }
                flush_text(&mut buf, &mut spans, &style_stack);
                apply_tag(&tag, &mut style_stack, &mut spans, &mut lines);
            }
            '&' => buf.push_str(&read_entity(&mut chars)),
            '\n' => {
                flush_text(&mut buf, &mut spans, &style_stack);
                flush_line(&mut spans, &mut lines);
            }
            _ => buf.push(ch),
        }
    }

    flush_text(&mut buf, &mut spans, &style_stack);
    flush_line(&mut spans, &mut lines);

    // Trim trailing empty lines
    while lines.last().is_some_and(|l| l.to_string().is_empty()) {
        lines.pop();
    }

    lines
}

fn current_style(stack: &[Style]) -> Style {
    stack.last().copied().unwrap_or_default()
}

fn flush_text(buf: &mut String, spans: &mut Vec<Span<'static>>, stack: &[Style]) {
    if !buf.is_empty() {
        spans.push(Span::styled(std::mem::take(buf), current_style(stack)));
    }
}

fn flush_line(spans: &mut Vec<Span<'static>>, lines: &mut Vec<Line<'static>>) {
    if !spans.is_empty() {
        lines.push(Line::from(std::mem::take(spans)));
    }
}

/// Interpret one tag. `tag` is the text between `<` and `>`.
fn apply_tag(
    tag: &str,
    style_stack: &mut Vec<Style>,
    spans: &mut Vec<Span<'static>>,
    lines: &mut Vec<Line<'static>>,
) {
    // Strip attributes and self-closing slashes: "<br />" → "br".
    let name = tag
        .trim()
        .trim_end_matches('/')
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    match name.as_str() {
        "b" | "strong" => {
            let base = current_style(style_stack);
            style_stack.push(base.add_modifier(Modifier::BOLD));
        }
        "i" | "em" => {
            let base = current_style(style_stack);
            style_stack.push(base.add_modifier(Modifier::ITALIC));
        }
        "u" => {
            let base = current_style(style_stack);
            style_stack.push(base.add_modifier(Modifier::UNDERLINED));
        }
        "/b" | "/strong" | "/i" | "/em" | "/u" => {
            if style_stack.len() > 1 {
                style_stack.pop();
            }
        }
        "br" => flush_line(spans, lines),
        "p" => flush_line(spans, lines),
        "/p" => {
            flush_line(spans, lines);
            lines.push(Line::raw(""));
        }
        // Unknown tag — drop it, keep surrounding content.
        _ => {}
    }
}

/// Decode a character entity after a consumed `&`. Unrecognized sequences
/// come back verbatim, ampersand included.
fn read_entity(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut name = String::new();
    while name.len() < 6 {
        match chars.peek() {
            Some(';') => {
                let decoded = match name.as_str() {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" | "#39" => Some('\''),
                    "nbsp" => Some(' '),
                    _ => None,
                };
                if let Some(c) = decoded {
                    chars.next();
                    return c.to_string();
                }
                break;
            }
            Some(c) if c.is_ascii_alphanumeric() || *c == '#' => {
                name.push(*c);
                chars.next();
            }
            _ => break,
        }
    }
    format!("&{name}")
}
