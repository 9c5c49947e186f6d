use super::ArticleQueryService;
use crate::{application::error::ApplicationResult, domain::article::Article};

impl ArticleQueryService {
    /// Snapshot of every stored article, oldest first.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<Article>> {
        let articles = self.repo.find_all().await?;
        tracing::debug!(count = articles.len(), "listed articles");
        Ok(articles)
    }
}
