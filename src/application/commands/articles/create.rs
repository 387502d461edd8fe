// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{Article, SlugStrategy},
};

pub struct CreateArticleCommand {
    pub id: i64,
    pub title: String,
    pub tags: Vec<String>,
    pub featured: bool,
}

impl CreateArticleCommand {
    #[must_use]
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    id: Option<i64>,
    title: Option<String>,
    tags: Vec<String>,
    featured: bool,
}

impl CreateArticleCommandBuilder {
    #[must_use]
    pub const fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub const fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// # Errors
    ///
    /// Fails when the id or the title was never set.
    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            id: self.id.ok_or("id is required")?,
            title: self.title.ok_or("title is required")?,
            tags: self.tags,
            featured: self.featured,
        })
    }
}

impl ArticleCommandService {
    /// # Errors
    ///
    /// Returns the domain error when the command fails validation or its slug
    /// is already stored.
    pub fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let CreateArticleCommand {
            id,
            title,
            tags,
            featured,
        } = command;
        let strategy = if featured {
            SlugStrategy::Featured
        } else {
            SlugStrategy::Default
        };
        let article = Article::with_strategy(strategy, id, &title, tags)?;
        self.save_article(article)
    }

    /// # Errors
    ///
    /// Returns a duplicate-key error when the slug is already stored.
    pub fn save_article(&self, article: Article) -> ApplicationResult<ArticleDto> {
        let dto = ArticleDto::from(article.clone());
        if let Err(err) = self.repo.save(article) {
            tracing::warn!(slug = %dto.slug, error = %err, "article rejected");
            return Err(err.into());
        }
        tracing::info!(id = dto.id, slug = %dto.slug, featured = dto.featured, "article saved");
        Ok(dto)
    }
}
