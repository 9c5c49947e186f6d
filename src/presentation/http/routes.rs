// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, greetings};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Router, routing::{get, post}};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/hi", get(greetings::hello))
        .route("/bye", get(greetings::goodbye))
        .route("/articles", get(articles::list_articles))
        .route("/articles/new", get(articles::new_article_form))
        .route("/articles/create", post(articles::create_article))
        .route("/articles/update", post(articles::update_article))
        .route("/articles/{id}", get(articles::show_article))
        .route("/articles/{id}/edit", get(articles::edit_article_form))
        .route("/articles/{id}/delete", get(articles::delete_article))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
