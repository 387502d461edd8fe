// src/domain/article/entity.rs
use crate::domain::article::slug_strategy::SlugStrategy;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTag, ArticleTitle};
use crate::domain::errors::DomainResult;
use serde::Serialize;

/// An article with an immutable id and a slug that always tracks its title.
///
/// Fields are private: the title can only change through [`Article::set_title`],
/// which recomputes the slug with the article's [`SlugStrategy`], and tags can
/// only grow through [`Article::add_tag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    title: ArticleTitle,
    slug: ArticleSlug,
    tags: Vec<ArticleTag>,
    strategy: SlugStrategy,
}

impl Article {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`](crate::domain::errors::DomainError::InvalidInput)
    /// for a non-positive id, a blank title or a blank tag.
    pub fn new<I, S>(id: i64, title: &str, tags: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_strategy(SlugStrategy::Default, id, title, tags)
    }

    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`](crate::domain::errors::DomainError::InvalidInput)
    /// for a non-positive id, a blank title or a blank tag.
    pub fn featured<I, S>(id: i64, title: &str, tags: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_strategy(SlugStrategy::Featured, id, title, tags)
    }

    /// Initial tags go through the same validation as [`Article::add_tag`].
    ///
    /// # Errors
    ///
    /// Same as [`Article::new`].
    pub fn with_strategy<I, S>(
        strategy: SlugStrategy,
        id: i64,
        title: &str,
        tags: I,
    ) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let id = ArticleId::new(id)?;
        let title = ArticleTitle::new(title)?;
        let tags = tags
            .into_iter()
            .map(ArticleTag::new)
            .collect::<DomainResult<Vec<_>>>()?;
        let slug = strategy.derive(&title);

        Ok(Self {
            id,
            title,
            slug,
            tags,
            strategy,
        })
    }

    /// # Errors
    ///
    /// Same as [`Article::new`].
    pub fn from_title(id: i64, title: &str) -> DomainResult<Self> {
        Self::new(id, title, std::iter::empty::<&str>())
    }

    /// # Errors
    ///
    /// Same as [`Article::new`].
    pub fn featured_from_title(id: i64, title: &str) -> DomainResult<Self> {
        Self::featured(id, title, std::iter::empty::<&str>())
    }

    #[must_use]
    pub const fn id(&self) -> ArticleId {
        self.id
    }

    #[must_use]
    pub const fn title(&self) -> &ArticleTitle {
        &self.title
    }

    #[must_use]
    pub const fn slug(&self) -> &ArticleSlug {
        &self.slug
    }

    #[must_use]
    pub fn tags(&self) -> &[ArticleTag] {
        &self.tags
    }

    #[must_use]
    pub const fn is_featured(&self) -> bool {
        self.strategy.is_featured()
    }

    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank title; title and slug are then
    /// left as they were.
    pub fn set_title(&mut self, title: &str) -> DomainResult<()> {
        let title = ArticleTitle::new(title)?;
        self.slug = self.strategy.derive(&title);
        self.title = title;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank tag.
    pub fn add_tag(&mut self, tag: &str) -> DomainResult<()> {
        self.tags.push(ArticleTag::new(tag)?);
        Ok(())
    }

    #[must_use]
    pub fn to_snapshot(&self) -> ArticleSnapshot {
        ArticleSnapshot {
            id: self.id.into(),
            title: self.title.as_str().to_owned(),
            slug: self.slug.as_str().to_owned(),
            tags: self.tags.iter().map(|t| t.as_str().to_owned()).collect(),
        }
    }
}

/// Read-only copy of an article's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSnapshot {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub tags: Vec<String>,
}
