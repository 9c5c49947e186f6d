// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::DeleteArticleCommand, dto::ArticleInput, navigation,
    queries::articles::GetArticleByIdQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::FlashToken;
use crate::presentation::http::response::{navigate, render};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Form,
    extract::Path,
    response::Response,
};

pub async fn new_article_form(
    Extension(state): Extension<HttpState>,
    flash: FlashToken,
) -> HttpResult<Response> {
    render(&state, flash, navigation::new_form()).await
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Form(input): Form<ArticleInput>,
) -> HttpResult<Response> {
    let saved = state
        .services
        .article_commands
        .create_article(input)
        .await
        .into_http()?;

    navigate(&state, navigation::after_create(&saved)).await
}

pub async fn show_article(
    Extension(state): Extension<HttpState>,
    flash: FlashToken,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    render(&state, flash, navigation::show(article)).await
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    flash: FlashToken,
) -> HttpResult<Response> {
    let articles = state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()?;

    render(&state, flash, navigation::index(articles)).await
}

pub async fn edit_article_form(
    Extension(state): Extension<HttpState>,
    flash: FlashToken,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    render(&state, flash, navigation::edit(article)).await
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Form(input): Form<ArticleInput>,
) -> HttpResult<Response> {
    let outcome = state
        .services
        .article_commands
        .update_article(input)
        .await
        .into_http()?;

    navigate(&state, navigation::after_update(&outcome)).await
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let outcome = state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    navigate(&state, navigation::after_delete(outcome)).await
}
