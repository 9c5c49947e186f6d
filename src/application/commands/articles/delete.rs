// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

pub const ARTICLE_DELETED_MESSAGE: &str = "Article deleted.";

pub struct DeleteArticleCommand {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub deleted: bool,
    /// One-shot confirmation for the next rendered page.
    pub message: Option<String>,
}

impl DeleteOutcome {
    fn deleted() -> Self {
        Self {
            deleted: true,
            message: Some(ARTICLE_DELETED_MESSAGE.to_string()),
        }
    }

    fn missing() -> Self {
        Self {
            deleted: false,
            message: None,
        }
    }
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<DeleteOutcome> {
        let Some(id) = ArticleId::from_raw(command.id) else {
            return Ok(DeleteOutcome::missing());
        };

        let Some(article) = self.repo.find_by_id(id).await? else {
            tracing::info!(article_id = %id, "delete ignored: article not found");
            return Ok(DeleteOutcome::missing());
        };

        if !self.repo.delete(&article).await? {
            tracing::info!(article_id = %id, "delete ignored: article removed concurrently");
            return Ok(DeleteOutcome::missing());
        }
        tracing::info!(article_id = %id, "article deleted");
        Ok(DeleteOutcome::deleted())
    }
}
