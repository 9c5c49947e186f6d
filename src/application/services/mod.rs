// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::articles::{ArticleCommandService, UpdateMode},
        ports::flash::FlashStore,
        queries::articles::ArticleQueryService,
    },
    domain::article::ArticleRepository,
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    flash_store: Arc<dyn FlashStore>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        flash_store: Arc<dyn FlashStore>,
        update_mode: UpdateMode,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repo),
            update_mode,
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_repo)));

        Self {
            article_commands,
            article_queries,
            flash_store,
        }
    }

    /// Park a message for the next render and return its token.
    pub async fn stash_flash(&self, message: String) -> ApplicationResult<String> {
        self.flash_store.put(message).await
    }

    /// Consume the message behind `token`. A second call for the same token
    /// yields `None`.
    pub async fn take_flash(&self, token: Option<&str>) -> ApplicationResult<Option<String>> {
        match token {
            Some(token) => self.flash_store.take(token).await,
            None => Ok(None),
        }
    }
}
