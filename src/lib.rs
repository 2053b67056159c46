//! granthika — terminal browser for the digitized Tarkasangraha corpus.
//!
//! Core library providing corpus normalization, category faceting,
//! compound filtering, and the ratatui view layer.

pub mod config;
pub mod corpus;
pub mod logging;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
