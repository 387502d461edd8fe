use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleSlug;
use crate::domain::errors::DomainResult;

/// Store of articles keyed by slug.
///
/// Implementations must reject a `save` whose slug is already present with
/// `DomainError::DuplicateKey`, leaving the stored entry untouched.
pub trait ArticleRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateKey` when the slug is already stored.
    fn save(&self, article: Article) -> DomainResult<()>;
    fn count(&self) -> usize;
    /// All stored articles, in insertion order.
    fn all(&self) -> Vec<Article>;
    fn find_by_slug(&self, slug: &ArticleSlug) -> Option<Article>;
}
