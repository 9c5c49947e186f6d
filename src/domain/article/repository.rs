// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Identity-keyed article storage. Each call is atomic for a single record.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// All records in ascending id order.
    async fn find_all(&self) -> DomainResult<Vec<Article>>;
    /// Overwrite the record with `article.id`. `None` when no such record exists.
    async fn replace(&self, article: Article) -> DomainResult<Option<Article>>;
    /// Remove the record. `false` when there was nothing to remove.
    async fn delete(&self, article: &Article) -> DomainResult<bool>;
}
