// src/infrastructure/views.rs
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    navigation::{
        MODEL_ARTICLE, MODEL_ARTICLE_LIST, MODEL_FLASH, VIEW_EDIT, VIEW_GOODBYE, VIEW_GREETING,
        VIEW_INDEX, VIEW_NEW, VIEW_SHOW,
    },
    ports::view::{View, ViewRenderer},
};
use serde_json::Value;

/// Renders the built-in page set as plain HTML.
#[derive(Default, Clone, Copy, Debug)]
pub struct HtmlViewRenderer;

impl ViewRenderer for HtmlViewRenderer {
    fn render(&self, view: &View) -> ApplicationResult<String> {
        let body = match view.name {
            VIEW_NEW => article_form("New article", "/articles/create", None),
            VIEW_EDIT => match view.get(MODEL_ARTICLE) {
                Some(article) => article_form("Edit article", "/articles/update", Some(article)),
                None => missing_article(),
            },
            VIEW_SHOW => match view.get(MODEL_ARTICLE) {
                Some(article) => show_article(article),
                None => missing_article(),
            },
            VIEW_INDEX => article_index(view.get(MODEL_ARTICLE_LIST)),
            VIEW_GREETING => format!(
                "<h1>Nice to meet you, {}!</h1>",
                escape(text(view.get("username")))
            ),
            VIEW_GOODBYE => format!(
                "<h1>See you next time, {}!</h1>",
                escape(text(view.get("nickname")))
            ),
            other => {
                return Err(ApplicationError::infrastructure(format!(
                    "unknown view `{other}`"
                )));
            }
        };

        Ok(layout(view.get(MODEL_FLASH).and_then(Value::as_str), &body))
    }
}

fn layout(flash: Option<&str>, body: &str) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Articles</title></head>\n<body>\n",
    );
    if let Some(message) = flash {
        page.push_str(&format!(
            "<div class=\"alert\">{}</div>\n",
            escape(message)
        ));
    }
    page.push_str(body);
    page.push_str("\n</body>\n</html>\n");
    page
}

fn article_form(heading: &str, action: &str, article: Option<&Value>) -> String {
    let id = article.and_then(|a| a.get("id")).and_then(Value::as_i64);
    let title = article.map(|a| text(a.get("title"))).unwrap_or_default();
    let content = article.map(|a| text(a.get("content"))).unwrap_or_default();

    let mut html = format!("<h1>{heading}</h1>\n<form action=\"{action}\" method=\"post\">\n");
    if let Some(id) = id {
        html.push_str(&format!(
            "<input type=\"hidden\" name=\"id\" value=\"{id}\">\n"
        ));
    }
    html.push_str(&format!(
        "<label>Title <input type=\"text\" name=\"title\" value=\"{}\"></label>\n\
         <label>Content <textarea name=\"content\">{}</textarea></label>\n\
         <button type=\"submit\">Submit</button>\n</form>\n",
        escape(title),
        escape(content),
    ));
    let back = match id {
        Some(id) => format!("/articles/{id}"),
        None => "/articles".to_string(),
    };
    html.push_str(&format!("<a href=\"{back}\">Back</a>"));
    html
}

fn show_article(article: &Value) -> String {
    let id = article.get("id").and_then(Value::as_i64).unwrap_or_default();
    format!(
        "<h1>{}</h1>\n<p>{}</p>\n<a href=\"/articles/{id}/edit\">Edit</a>\n\
         <a href=\"/articles/{id}/delete\">Delete</a>\n<a href=\"/articles\">Go to article list</a>",
        escape(text(article.get("title"))),
        escape(text(article.get("content"))),
    )
}

fn missing_article() -> String {
    "<h1>Article not found</h1>\n<a href=\"/articles\">Go to article list</a>".to_string()
}

fn article_index(list: Option<&Value>) -> String {
    let mut html = String::from("<h1>Articles</h1>\n<table>\n<tr><th>Id</th><th>Title</th><th>Content</th></tr>\n");
    for article in list.and_then(Value::as_array).into_iter().flatten() {
        let id = article.get("id").and_then(Value::as_i64).unwrap_or_default();
        html.push_str(&format!(
            "<tr><td>{id}</td><td><a href=\"/articles/{id}\">{}</a></td><td>{}</td></tr>\n",
            escape(text(article.get("title"))),
            escape(text(article.get("content"))),
        ));
    }
    html.push_str("</table>\n<a href=\"/articles/new\">New article</a>");
    html
}

fn text(value: Option<&Value>) -> &str {
    value.and_then(Value::as_str).unwrap_or_default()
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
