//! Lenient normalization of loosely-typed article rows.
//!
//! Input rows come from hand-written JSON where fields may be missing, `null`,
//! blank, or carry numbers as strings. Everything here is total: a row never
//! fails to normalize, it falls back to defaults instead.

use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_TITLE: &str = "Sans titre";
pub const DEFAULT_AUTHOR: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedArticle {
    pub title: String,
    pub excerpt: Option<String>,
    pub views: u64,
    pub published: bool,
    pub author: String,
}

/// Trimmed string, or `None` when absent or blank.
#[must_use]
pub fn str_or_null(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Non-negative integer from a number or numeric string. Decimals are cut
/// at the point; anything else, including negatives, is 0.
#[must_use]
pub fn int_or_zero(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| whole_part(&n.to_string()))
            .unwrap_or(0),
        Value::String(s) => whole_part(s.trim()).unwrap_or(0),
        Value::Bool(true) => 1,
        _ => 0,
    }
}

fn whole_part(text: &str) -> Option<u64> {
    text.split_once('.')
        .map_or(text, |(whole, _)| whole)
        .parse()
        .ok()
}

/// Truthiness of a JSON value; `None` when the value is absent or `null`.
#[must_use]
pub fn truthy(value: &Value) -> Option<bool> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(*b),
        Value::Number(n) => Some(n.as_f64().is_some_and(|f| f.abs() > 0.0)),
        Value::String(s) => Some(!s.is_empty() && s != "0"),
        Value::Array(items) => Some(!items.is_empty()),
        Value::Object(fields) => Some(!fields.is_empty()),
    }
}

/// Text form of a scalar; `None` for `null`, arrays and objects.
#[must_use]
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "1".into() } else { String::new() }),
        _ => None,
    }
}

fn field<'a>(row: &'a Value, key: &str) -> &'a Value {
    row.get(key).unwrap_or(&Value::Null)
}

/// Missing title and author fall back to their defaults; a present but blank
/// title stays blank.
#[must_use]
pub fn normalize_article(row: &Value) -> NormalizedArticle {
    let title = scalar_text(field(row, "title"))
        .map_or_else(|| DEFAULT_TITLE.to_owned(), |t| t.trim().to_owned());
    let excerpt = str_or_null(scalar_text(field(row, "excerpt")).as_deref());
    let views = int_or_zero(field(row, "views"));
    let published = truthy(field(row, "published")).unwrap_or(true);
    let author = scalar_text(field(row, "author"))
        .map_or_else(|| DEFAULT_AUTHOR.to_owned(), |a| a.trim().to_owned());

    NormalizedArticle {
        title,
        excerpt,
        views,
        published,
        author,
    }
}
