use super::ArticleQueryService;
use crate::{
    application::error::ApplicationResult,
    domain::article::{Article, ArticleId},
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Look up one article. A miss is `None`, not an error.
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<Option<Article>> {
        let Some(id) = ArticleId::from_raw(query.id) else {
            return Ok(None);
        };

        let article = self.repo.find_by_id(id).await?;
        if article.is_none() {
            tracing::debug!(article_id = %id, "article not found");
        }
        Ok(article)
    }
}
