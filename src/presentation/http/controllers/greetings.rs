// src/presentation/http/controllers/greetings.rs
use crate::application::{
    navigation::{VIEW_GOODBYE, VIEW_GREETING},
    ports::view::View,
};
use crate::presentation::http::error::HttpResult;
use crate::presentation::http::extractors::FlashToken;
use crate::presentation::http::response::render;
use crate::presentation::http::state::HttpState;
use axum::{Extension, extract::Query, response::Response};
use serde::Deserialize;

const DEFAULT_NAME: &str = "guest";

#[derive(Debug, Deserialize)]
pub struct GreetingParams {
    #[serde(default)]
    pub name: Option<String>,
}

impl GreetingParams {
    fn name(self) -> String {
        self.name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_NAME.to_string())
    }
}

pub async fn hello(
    Extension(state): Extension<HttpState>,
    flash: FlashToken,
    Query(params): Query<GreetingParams>,
) -> HttpResult<Response> {
    let view = View::new(VIEW_GREETING).with("username", params.name());
    render(&state, flash, view).await
}

pub async fn goodbye(
    Extension(state): Extension<HttpState>,
    flash: FlashToken,
    Query(params): Query<GreetingParams>,
) -> HttpResult<Response> {
    let view = View::new(VIEW_GOODBYE).with("nickname", params.name());
    render(&state, flash, view).await
}
