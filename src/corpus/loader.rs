//! One-shot corpus fetch: HTTP GET → JSON parse → normalize.
//!
//! The fetch happens exactly once per session; any failure is terminal and
//! surfaces as a single rendered error message. No retries, no caching.

use thiserror::Error;

use super::record::{normalize, FormatError, Record};

/// Everything that can go wrong while loading the corpus.
///
/// All variants collapse into one user-visible "Error loading data" message;
/// the distinction only matters for the log file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch data: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to fetch data: status {0}")]
    Status(u16),
    #[error("failed to parse corpus document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Fetch and normalize the corpus document at `url`.
pub async fn fetch_corpus(url: &str) -> Result<Vec<Record>, LoadError> {
    tracing::info!(url, "fetching corpus");
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "corpus fetch returned an error status");
        return Err(LoadError::Status(status.as_u16()));
    }

    // The pinned file is JSON despite its .txt extension.
    let body = response.text().await?;
    let raw: serde_json::Value = serde_json::from_str(&body)?;
    let records = normalize(&raw)?;
    tracing::info!(count = records.len(), "corpus loaded");
    Ok(records)
}
