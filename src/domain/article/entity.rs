// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};

/// A persisted article. Only the store hands these out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
}

/// An article that has not been assigned an identity yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
}

/// Mapped request data. The identity is whatever the caller supplied, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    pub id: Option<ArticleId>,
    pub title: ArticleTitle,
    pub content: ArticleContent,
}

impl ArticleDraft {
    /// Drop the caller-supplied identity; the store assigns a fresh one on insert.
    pub fn into_new(self) -> NewArticle {
        NewArticle {
            title: self.title,
            content: self.content,
        }
    }

    /// The full replacement record for `id`, if the draft names one.
    pub fn into_article(self) -> Option<Article> {
        let id = self.id?;
        Some(Article {
            id,
            title: self.title,
            content: self.content,
        })
    }
}

impl Article {
    /// Overlay the non-empty fields of `draft` onto this record.
    pub fn merge(mut self, draft: ArticleDraft) -> Self {
        if !draft.title.is_empty() {
            self.title = draft.title;
        }
        if !draft.content.is_empty() {
            self.content = draft.content;
        }
        self
    }
}
