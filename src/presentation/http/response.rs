// src/presentation/http/response.rs
//! Turns navigation decisions into HTTP responses.

use super::error::{HttpResult, IntoHttpResult};
use super::extractors::{FLASH_COOKIE, FlashToken};
use super::state::HttpState;
use crate::application::{
    navigation::{MODEL_FLASH, Navigation},
    ports::view::View,
};
use axum::{
    http::{HeaderValue, header::SET_COOKIE},
    response::{Html, IntoResponse, Redirect, Response},
};

fn flash_cookie(token: &str) -> String {
    format!("{FLASH_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

fn expired_flash_cookie() -> String {
    format!("{FLASH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

fn with_cookie(mut response: Response, cookie: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(cookie) {
        response.headers_mut().append(SET_COOKIE, value);
    }
    response
}

pub async fn navigate(state: &HttpState, navigation: Navigation) -> HttpResult<Response> {
    match navigation {
        Navigation::Redirect { location, flash } => {
            let response = Redirect::to(&location).into_response();
            match flash {
                Some(message) => {
                    let token = state.services.stash_flash(message).await.into_http()?;
                    Ok(with_cookie(response, &flash_cookie(&token)))
                }
                None => Ok(response),
            }
        }
        Navigation::Render(view) => render(state, FlashToken::default(), view).await,
    }
}

/// Render `view`, binding the pending flash message (if any) exactly once.
pub async fn render(state: &HttpState, flash: FlashToken, view: View) -> HttpResult<Response> {
    let message = state
        .services
        .take_flash(flash.0.as_deref())
        .await
        .into_http()?;
    let view = view.with_optional(MODEL_FLASH, message);

    let body = state.renderer.render(&view).into_http()?;
    let response = Html(body).into_response();

    if flash.0.is_some() {
        Ok(with_cookie(response, &expired_flash_cookie()))
    } else {
        Ok(response)
    }
}
