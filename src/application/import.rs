// src/application/import.rs
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("file missing or unreadable: {}", path.display())]
    MissingOrUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON: {}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected shape: {0}")]
    UnexpectedShape(String),

    #[error("invalid article at index {index}: '{field}' is required")]
    InvalidArticle { index: usize, field: &'static str },
}

pub type ImportResult<T> = Result<T, ImportError>;

const REQUIRED_FIELDS: [&str; 2] = ["title", "slug"];

/// Reads `path` and decodes a JSON array of rows.
///
/// # Errors
///
/// Fails when the file cannot be read, is not JSON, or its root is not an
/// array.
pub fn load_json(path: &Path) -> ImportResult<Vec<Value>> {
    let raw = fs::read_to_string(path).map_err(|source| ImportError::MissingOrUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let data: Value = serde_json::from_str(&raw).map_err(|source| ImportError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    match data {
        Value::Array(rows) => {
            tracing::debug!(path = %path.display(), rows = rows.len(), "json loaded");
            Ok(rows)
        }
        other => Err(ImportError::UnexpectedShape(format!(
            "root must be an array, found {}",
            kind_of(&other)
        ))),
    }
}

/// Each row must carry non-empty string `title` and `slug` fields.
///
/// # Errors
///
/// Returns [`ImportError::InvalidArticle`] naming the first missing field.
pub fn validate_article(index: usize, row: &Value) -> ImportResult<()> {
    for field in REQUIRED_FIELDS {
        if row.get(field).and_then(Value::as_str).is_none_or(str::is_empty) {
            return Err(ImportError::InvalidArticle { index, field });
        }
    }
    Ok(())
}

/// Loads and validates every row, returning how many were valid.
///
/// # Errors
///
/// Any error of [`load_json`], or the first invalid row.
pub fn validate_file(path: &Path) -> ImportResult<usize> {
    let rows = load_json(path)?;
    rows.iter()
        .enumerate()
        .try_for_each(|(index, row)| validate_article(index, row))?;
    Ok(rows.len())
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
