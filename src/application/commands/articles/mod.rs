// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use delete::{ARTICLE_DELETED_MESSAGE, DeleteArticleCommand, DeleteOutcome};
pub use service::{ArticleCommandService, UpdateMode};
pub use update::UpdateOutcome;
