//! Centralized Indigo & Saffron color theme for the granthika TUI.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

// ── Primary palette ─────────────────────────────────────────────────────────

/// Indigo — primary accent, headings, focused borders.
pub const PRIMARY: Color = Color::Rgb(0x5C, 0x6B, 0xC0);
/// Light indigo — highlights, secondary focus.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x7E, 0x8C, 0xE0);

// ── Accent ──────────────────────────────────────────────────────────────────

/// Saffron — selected items, topic headings.
pub const ACCENT: Color = Color::Rgb(0xF0, 0x9A, 0x3E);

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Surface — elevated panels, facet sidebar.
pub const BG_SURFACE: Color = Color::Rgb(0x17, 0x15, 0x24);

// ── Text ────────────────────────────────────────────────────────────────────

/// Primary text.
pub const TEXT: Color = Color::Rgb(0xDC, 0xDC, 0xDC);
/// Muted text — metadata labels, counts.
pub const TEXT_MUTED: Color = Color::Rgb(0x86, 0x86, 0x90);
/// Dim text — placeholders, faint hints.
pub const TEXT_DIM: Color = Color::Rgb(0x52, 0x52, 0x5C);

// ── Semantic ────────────────────────────────────────────────────────────────

/// Error — the fatal load-failure message.
pub const ERROR: Color = Color::Rgb(0xE5, 0x53, 0x4B);

// ── Style helpers ───────────────────────────────────────────────────────────

/// Topic headings and other prominent text.
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Section header style (facet panel heading).
pub fn heading() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Focused border style.
pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY)
}

/// Unfocused border style.
pub fn border_default() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Highlighted/selected item.
pub fn highlight() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Muted label text.
pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Dim text for placeholders and hints.
pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "[q]:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A bordered block with focused styling.
pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_focused())
}

/// A bordered block with default (unfocused) styling.
pub fn block_default(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_default())
}
