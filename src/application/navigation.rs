// src/application/navigation.rs
//! Where each lifecycle operation sends the caller next.

use crate::application::{
    commands::articles::{DeleteOutcome, UpdateOutcome},
    dto::ArticleDto,
    ports::view::View,
};
use crate::domain::article::{Article, ArticleId};

pub const ARTICLES_PATH: &str = "/articles";

pub const VIEW_NEW: &str = "articles/new";
pub const VIEW_SHOW: &str = "articles/show";
pub const VIEW_INDEX: &str = "articles/index";
pub const VIEW_EDIT: &str = "articles/edit";
pub const VIEW_GREETING: &str = "greetings";
pub const VIEW_GOODBYE: &str = "goodbye";

pub const MODEL_ARTICLE: &str = "article";
pub const MODEL_ARTICLE_LIST: &str = "articleList";
/// Model key under which a pending flash message is bound.
pub const MODEL_FLASH: &str = "msg";

#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    Redirect {
        location: String,
        /// Shown once on the page the redirect lands on.
        flash: Option<String>,
    },
    Render(View),
}

impl Navigation {
    fn redirect(location: String) -> Self {
        Self::Redirect {
            location,
            flash: None,
        }
    }
}

pub fn article_path(id: ArticleId) -> String {
    format!("{ARTICLES_PATH}/{id}")
}

pub fn after_create(article: &Article) -> Navigation {
    Navigation::redirect(article_path(article.id))
}

pub fn after_update(outcome: &UpdateOutcome) -> Navigation {
    let id = match outcome {
        UpdateOutcome::Replaced(article) => Some(article.id),
        UpdateOutcome::Skipped(draft) => draft.id,
    };
    match id {
        Some(id) => Navigation::redirect(article_path(id)),
        None => Navigation::redirect(ARTICLES_PATH.to_string()),
    }
}

pub fn after_delete(outcome: DeleteOutcome) -> Navigation {
    Navigation::Redirect {
        location: ARTICLES_PATH.to_string(),
        flash: outcome.message,
    }
}

pub fn new_form() -> View {
    View::new(VIEW_NEW)
}

pub fn show(article: Option<Article>) -> View {
    View::new(VIEW_SHOW).with_optional(MODEL_ARTICLE, article.map(ArticleDto::from))
}

pub fn edit(article: Option<Article>) -> View {
    View::new(VIEW_EDIT).with_optional(MODEL_ARTICLE, article.map(ArticleDto::from))
}

pub fn index(articles: Vec<Article>) -> View {
    let list: Vec<ArticleDto> = articles.into_iter().map(ArticleDto::from).collect();
    View::new(VIEW_INDEX).with(MODEL_ARTICLE_LIST, list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ArticleInput;
    use crate::domain::article::{ArticleContent, ArticleTitle};
    use serde_json::json;

    fn article(id: i64) -> Article {
        Article {
            id: ArticleId::new(id).unwrap(),
            title: ArticleTitle::new("title"),
            content: ArticleContent::new("content"),
        }
    }

    #[test]
    fn create_redirects_to_new_article() {
        assert_eq!(
            after_create(&article(7)),
            Navigation::Redirect {
                location: "/articles/7".into(),
                flash: None
            }
        );
    }

    #[test]
    fn update_redirects_to_target_even_when_skipped() {
        let replaced = UpdateOutcome::Replaced(article(3));
        let skipped = UpdateOutcome::Skipped(ArticleInput::new(Some(999), "x", "y").into_entity());
        let anonymous = UpdateOutcome::Skipped(ArticleInput::new(None, "x", "y").into_entity());

        let location = |nav: Navigation| match nav {
            Navigation::Redirect { location, .. } => location,
            Navigation::Render(_) => panic!("expected redirect"),
        };
        assert_eq!(location(after_update(&replaced)), "/articles/3");
        assert_eq!(location(after_update(&skipped)), "/articles/999");
        assert_eq!(location(after_update(&anonymous)), "/articles");
    }

    #[test]
    fn delete_carries_message_only_when_deleted() {
        let nav = after_delete(DeleteOutcome {
            deleted: true,
            message: Some("gone".into()),
        });
        assert_eq!(
            nav,
            Navigation::Redirect {
                location: "/articles".into(),
                flash: Some("gone".into())
            }
        );

        let nav = after_delete(DeleteOutcome {
            deleted: false,
            message: None,
        });
        assert!(matches!(nav, Navigation::Redirect { flash: None, .. }));
    }

    #[test]
    fn show_omits_article_when_absent() {
        let view = show(None);
        assert_eq!(view.name, VIEW_SHOW);
        assert!(view.get(MODEL_ARTICLE).is_none());

        let view = show(Some(article(2)));
        assert_eq!(
            view.get(MODEL_ARTICLE),
            Some(&json!({ "id": 2, "title": "title", "content": "content" }))
        );
    }

    #[test]
    fn index_binds_article_list() {
        let view = index(vec![article(1), article(2)]);
        let list = view.get(MODEL_ARTICLE_LIST).and_then(|v| v.as_array()).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1]["id"], json!(2));
    }
}
