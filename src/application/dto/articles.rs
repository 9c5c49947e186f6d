// src/application/dto/articles.rs
use crate::domain::article::{Article, ArticleContent, ArticleDraft, ArticleId, ArticleTitle};
use serde::{Deserialize, Deserializer, Serialize};

/// Raw field values submitted by one form post.
///
/// Omitted text fields bind as empty strings. The id is optional because
/// create forms do not send one and edit forms send it as a hidden field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArticleInput {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl ArticleInput {
    pub fn new(id: Option<i64>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Map the submitted values onto an entity draft without validating,
    /// trimming or defaulting them.
    pub fn into_entity(self) -> ArticleDraft {
        ArticleDraft {
            id: self.id.and_then(ArticleId::from_raw),
            title: ArticleTitle::new(self.title),
            content: ArticleContent::new(self.content),
        }
    }
}

// Hidden `id` inputs arrive as "" on the create form.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// View-model shape of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
        }
    }
}
