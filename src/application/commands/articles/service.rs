// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::domain::article::ArticleRepository;

pub struct ArticleCommandService {
    pub(super) repo: Arc<dyn ArticleRepository>,
}

impl ArticleCommandService {
    #[must_use]
    pub const fn new(repo: Arc<dyn ArticleRepository>) -> Self {
        Self { repo }
    }
}
