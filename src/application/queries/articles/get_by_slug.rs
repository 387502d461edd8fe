use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

impl ArticleQueryService {
    /// Looks the slug up exactly as stored, after trimming. The empty slug of
    /// a punctuation-only title is found like any other.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NotFound`] when no article has that slug.
    pub fn get_by_slug(&self, slug: &str) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(slug);
        self.repo
            .find_by_slug(&slug)
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(format!("article {slug}")))
    }
}
