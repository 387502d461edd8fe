// src/application/dto/mod.rs
mod articles;

pub use articles::ArticleDto;
