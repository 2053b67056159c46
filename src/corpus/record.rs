//! Corpus record type and document normalization.

use serde_json::Value;
use thiserror::Error;

/// The source document must be shaped `{ "data": [ ... ] }`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unexpected data format: missing top-level `data` array")]
pub struct FormatError;

/// One corpus entry.
///
/// All four text fields are always defined after [`normalize`]; absent or
/// falsy source values collapse to `""`. `id` is opaque and passed through
/// unchanged — it is only ever displayed, never used for deduplication.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: Value,
    pub category: String,
    pub topic: String,
    pub text: String,
    /// Optional secondary commentary (टीका). May contain simple markup,
    /// rendered as trusted rich text by the view layer.
    pub annotation: String,
}

impl Record {
    /// Build one record from a raw array element, defaulting missing fields.
    fn from_raw(item: &Value) -> Self {
        Self {
            id: item.get("id").cloned().unwrap_or(Value::Null),
            category: coerce_text(item.get("category")),
            topic: coerce_text(item.get("topic")),
            text: coerce_text(item.get("text")),
            // The live feed names this field `teeka`.
            annotation: coerce_text(item.get("annotation").or_else(|| item.get("teeka"))),
        }
    }

    /// `id` rendered for display.
    pub fn id_display(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Normalize a parsed source document into an ordered record list.
///
/// Output order equals input array order exactly. A document without a
/// `data` array is a fatal format error — no partial recovery.
pub fn normalize(raw: &Value) -> Result<Vec<Record>, FormatError> {
    let items = raw.get("data").and_then(Value::as_array).ok_or(FormatError)?;
    Ok(items.iter().map(Record::from_raw).collect())
}

/// Coerce a raw field to text, mapping absent and falsy values to `""`.
///
/// The source feed's own defaulting is `field || ""`, so `false` and `0`
/// also collapse to the empty string; that exact behavior is kept.
fn coerce_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => {
            if *b {
                "true".to_string()
            } else {
                String::new()
            }
        }
        Some(Value::Number(n)) => {
            if n.as_f64() == Some(0.0) {
                String::new()
            } else {
                n.to_string()
            }
        }
        Some(other) => other.to_string(),
    }
}
