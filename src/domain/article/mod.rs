pub mod entity;
pub mod repository;
pub mod slug_strategy;
pub mod value_objects;

pub use entity::{Article, ArticleSnapshot};
pub use repository::ArticleRepository;
pub use slug_strategy::{SlugStrategy, slugify};
pub use value_objects::{ArticleId, ArticleSlug, ArticleTag, ArticleTitle};
