// src/domain/article/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleDraft, NewArticle};
pub use repository::ArticleRepository;
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle};
