//! Terminal view layer built on ratatui.

pub mod app;
pub mod events;
pub mod facets;
pub mod layout;
pub mod theme;
pub mod views;
pub mod widgets;
