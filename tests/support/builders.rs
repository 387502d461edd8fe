// tests/support/builders.rs
use article_desk::domain::article::{Article, SlugStrategy};

pub struct ArticleBuilder {
    id: i64,
    title: String,
    tags: Vec<String>,
    strategy: SlugStrategy,
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            tags: Vec::new(),
            strategy: SlugStrategy::Default,
        }
    }

    #[must_use]
    pub const fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub const fn featured(mut self) -> Self {
        self.strategy = SlugStrategy::Featured;
        self
    }

    /// # Panics
    ///
    /// Panics when the configured id, title or tags are invalid.
    #[must_use]
    pub fn build(self) -> Article {
        Article::with_strategy(self.strategy, self.id, &self.title, self.tags).unwrap()
    }
}
