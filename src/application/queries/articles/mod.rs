mod get_by_slug;
mod list;
mod service;

pub use service::ArticleQueryService;
