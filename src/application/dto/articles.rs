use crate::domain::article::{Article, ArticleSnapshot};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let featured = article.is_featured();
        let ArticleSnapshot {
            id,
            title,
            slug,
            tags,
        } = article.to_snapshot();
        Self {
            id,
            title,
            slug,
            tags,
            featured,
        }
    }
}
