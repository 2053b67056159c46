//! Shared fixtures and property-based test suites.

pub mod common;

mod property;
