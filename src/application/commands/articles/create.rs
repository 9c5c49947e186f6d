// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleInput, error::ApplicationResult},
    domain::article::Article,
};

impl ArticleCommandService {
    /// Persist the submitted fields as a new article. Any id in the input is
    /// ignored; the store always assigns a fresh one.
    pub async fn create_article(&self, input: ArticleInput) -> ApplicationResult<Article> {
        tracing::debug!(?input, "creating article from form input");
        let draft = input.into_entity();

        let saved = self.repo.insert(draft.into_new()).await?;
        tracing::info!(article_id = %saved.id, "article created");
        Ok(saved)
    }
}
