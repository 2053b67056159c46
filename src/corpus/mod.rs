//! In-memory corpus model.
//!
//! The corpus is fetched once, normalized into a flat `Vec<Record>`, and is
//! read-only for the rest of the session. Everything here is a pure function
//! over that list so the view layer can be tested in isolation.

pub mod categories;
pub mod filter;
pub mod loader;
pub mod record;

pub use record::Record;
