use super::ArticleQueryService;
use crate::application::dto::ArticleDto;

impl ArticleQueryService {
    /// Every stored article, in the order it was saved.
    #[must_use]
    pub fn list_articles(&self) -> Vec<ArticleDto> {
        self.repo.all().into_iter().map(Into::into).collect()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.repo.count()
    }
}
