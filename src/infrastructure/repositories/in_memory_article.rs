// src/infrastructure/repositories/in_memory_article.rs
use crate::domain::article::{Article, ArticleRepository, ArticleSlug};
use crate::domain::errors::{DomainError, DomainResult};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Store {
    articles: Vec<Article>,
    by_slug: HashMap<String, usize>,
}

/// Process-memory article store. The slug check and the insert happen under
/// one lock acquisition.
#[derive(Debug, Default)]
pub struct InMemoryArticleRepository {
    inner: Mutex<Store>,
}

impl InMemoryArticleRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self) -> MutexGuard<'_, Store> {
        // Every mutation is a single push + insert, so a poisoned guard still
        // holds a consistent store.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ArticleRepository for InMemoryArticleRepository {
    fn save(&self, article: Article) -> DomainResult<()> {
        let mut store = self.store();
        let slug = article.slug().as_str();
        if store.by_slug.contains_key(slug) {
            return Err(DomainError::duplicate_key(format!(
                "slug already exists: {slug}"
            )));
        }

        let index = store.articles.len();
        store.by_slug.insert(slug.to_owned(), index);
        store.articles.push(article);
        drop(store);
        Ok(())
    }

    fn count(&self) -> usize {
        self.store().articles.len()
    }

    fn all(&self) -> Vec<Article> {
        self.store().articles.clone()
    }

    fn find_by_slug(&self, slug: &ArticleSlug) -> Option<Article> {
        let store = self.store();
        store
            .by_slug
            .get(slug.as_str())
            .map(|&index| store.articles[index].clone())
    }
}
