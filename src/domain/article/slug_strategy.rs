// src/domain/article/slug_strategy.rs
use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle};

const FEATURED_PREFIX: &str = "featured-";

/// How an article turns its title into a slug.
///
/// `Default` transliterates to ASCII, lower-cases, collapses every run of
/// characters outside `[a-z0-9]` into a single `-` and trims hyphens from
/// both ends. `Featured` prefixes the `Default` result with `featured-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlugStrategy {
    Default,
    Featured,
}

impl SlugStrategy {
    #[must_use]
    pub fn derive(self, title: &ArticleTitle) -> ArticleSlug {
        ArticleSlug::new(self.slugify(title.as_str()))
    }

    #[must_use]
    pub fn slugify(self, input: &str) -> String {
        match self {
            Self::Default => ::slug::slugify(input),
            Self::Featured => format!("{FEATURED_PREFIX}{}", Self::Default.slugify(input)),
        }
    }

    #[must_use]
    pub const fn is_featured(self) -> bool {
        matches!(self, Self::Featured)
    }
}

/// Shorthand for the default slugification rule.
#[must_use]
pub fn slugify(input: &str) -> String {
    SlugStrategy::Default.slugify(input)
}
