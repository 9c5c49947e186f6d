// src/application/commands/articles/update.rs
use super::{ArticleCommandService, UpdateMode};
use crate::{
    application::{dto::ArticleInput, error::ApplicationResult},
    domain::article::{Article, ArticleDraft},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The stored record was overwritten; holds the new value.
    Replaced(Article),
    /// No record had the submitted id, or it was removed before the write,
    /// so nothing was written.
    Skipped(ArticleDraft),
}

impl UpdateOutcome {
    pub fn is_replaced(&self) -> bool {
        matches!(self, Self::Replaced(_))
    }
}

impl ArticleCommandService {
    /// Write the submitted fields over the record they name.
    ///
    /// A missing target is a no-op: the store is left alone and the mapped
    /// draft is handed back so the caller can still navigate to it.
    pub async fn update_article(&self, input: ArticleInput) -> ApplicationResult<UpdateOutcome> {
        tracing::debug!(?input, "updating article from form input");
        let draft = input.into_entity();

        let Some(replacement) = draft.clone().into_article() else {
            tracing::warn!("update skipped: input carried no article id");
            return Ok(UpdateOutcome::Skipped(draft));
        };
        let id = replacement.id;

        let Some(existing) = self.repo.find_by_id(id).await? else {
            tracing::warn!(article_id = %id, "update skipped: article not found");
            return Ok(UpdateOutcome::Skipped(draft));
        };

        let target = match self.update_mode {
            UpdateMode::Replace => replacement,
            UpdateMode::Merge => existing.merge(draft.clone()),
        };

        // The row can be deleted between the lookup and the write.
        let Some(updated) = self.repo.replace(target).await? else {
            tracing::warn!(article_id = %id, "update skipped: article removed before write");
            return Ok(UpdateOutcome::Skipped(draft));
        };
        tracing::info!(article_id = %updated.id, mode = %self.update_mode, "article updated");
        Ok(UpdateOutcome::Replaced(updated))
    }
}
