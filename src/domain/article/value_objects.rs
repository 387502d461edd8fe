use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(i64);

impl ArticleId {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] when `id` is zero or negative.
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::invalid_input(format!(
                "article id must be positive, got {id}"
            )))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Article title, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] when the trimmed title is empty.
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return Err(DomainError::invalid_input("title is required"));
        }
        Ok(Self(value.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Slug of an article, stored trimmed.
///
/// Articles obtain theirs through a [`SlugStrategy`](super::SlugStrategy).
/// Any text is a valid lookup key, the empty string included, since a
/// punctuation-only title derives an empty slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleTag(String);

impl ArticleTag {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] when the trimmed tag is empty.
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return Err(DomainError::invalid_input("tag cannot be empty"));
        }
        Ok(Self(value.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_rejects_zero_and_negatives() {
        for raw in [0, -1, i64::MIN] {
            assert!(matches!(
                ArticleId::new(raw),
                Err(DomainError::InvalidInput(_))
            ));
        }
        assert_eq!(i64::from(ArticleId::new(7).unwrap()), 7);
    }

    #[test]
    fn title_is_trimmed() {
        let title = ArticleTitle::new("  Hello  ").unwrap();
        assert_eq!(title.as_str(), "Hello");
    }

    #[test]
    fn blank_title_and_tag_are_rejected() {
        assert!(ArticleTitle::new("").is_err());
        assert!(ArticleTitle::new(" \t\n").is_err());
        assert!(ArticleTag::new("   ").is_err());
        assert_eq!(ArticleTag::new(" oop ").unwrap().as_str(), "oop");
    }

    #[test]
    fn lookup_slug_is_trimmed_and_may_be_empty() {
        assert_eq!(ArticleSlug::new(" intro ").as_str(), "intro");
        assert_eq!(ArticleSlug::new(" "), ArticleSlug::new(""));
    }
}
