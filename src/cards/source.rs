//! Card data sources.
//!
//! Card lists arrive either as a path to a JSON document or as an already
//! parsed JSON value. [`parse_source`] turns either into a list of raw
//! card mappings. Collection and deck constructors only ever see the
//! parsed records; they never touch the filesystem.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::record::json_kind;
use crate::core::CardError;

/// Where a card list comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum CardSource {
    /// A JSON file holding an array of card mappings.
    Path(PathBuf),
    /// An already-parsed JSON array of card mappings.
    Json(Value),
}

impl From<&Path> for CardSource {
    fn from(path: &Path) -> Self {
        CardSource::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for CardSource {
    fn from(path: PathBuf) -> Self {
        CardSource::Path(path)
    }
}

impl From<Value> for CardSource {
    fn from(value: Value) -> Self {
        CardSource::Json(value)
    }
}

/// Load the raw card mappings from a source.
///
/// A missing file is reported as `SourceNotFound`, other read failures as
/// `Io`. Malformed JSON, or a document that is not an array, fails with
/// `UnrecognizedFormat`.
pub fn parse_source(source: impl Into<CardSource>) -> Result<Vec<Value>, CardError> {
    match source.into() {
        CardSource::Path(path) => {
            let raw = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => CardError::SourceNotFound(path.clone()),
                _ => CardError::Io {
                    path: path.clone(),
                    source: e,
                },
            })?;
            let value: Value = serde_json::from_str(&raw).map_err(|e| {
                CardError::unrecognized(format!("malformed JSON in {}: {e}", path.display()))
            })?;
            tracing::debug!(path = %path.display(), "Parsed card source");
            into_records(value)
        }
        CardSource::Json(value) => into_records(value),
    }
}

/// Unwrap a JSON array into its elements.
pub(crate) fn into_records(value: Value) -> Result<Vec<Value>, CardError> {
    match value {
        Value::Array(records) => Ok(records),
        other => Err(CardError::unrecognized(format!(
            "expected an array of cards, got {}",
            json_kind(&other)
        ))),
    }
}
