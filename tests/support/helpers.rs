// tests/support/helpers.rs
use super::mocks;
use article_board::application::commands::articles::UpdateMode;
use article_board::application::ports::{flash::FlashStore, time::Clock, view::ViewRenderer};
use article_board::application::services::ApplicationServices;
use article_board::domain::article::ArticleRepository;
use article_board::infrastructure::{flash_store::InMemoryFlashStore, views::HtmlViewRenderer};
use article_board::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;

pub fn build_services(repo: Arc<dyn ArticleRepository>, mode: UpdateMode) -> ApplicationServices {
    let clock: Arc<dyn Clock> = Arc::new(mocks::DummyClock);
    let flash: Arc<dyn FlashStore> =
        Arc::new(InMemoryFlashStore::new(chrono::Duration::minutes(5), clock));
    ApplicationServices::new(repo, flash, mode)
}

pub fn build_test_state(repo: Arc<dyn ArticleRepository>) -> HttpState {
    let renderer: Arc<dyn ViewRenderer> = Arc::new(HtmlViewRenderer);
    HttpState {
        services: Arc::new(build_services(repo, UpdateMode::Replace)),
        renderer,
    }
}

pub fn make_test_router(repo: Arc<dyn ArticleRepository>) -> axum::Router {
    build_router(build_test_state(repo))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_text(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// The `name=value` pair of the first Set-Cookie header, if any.
pub fn set_cookie_pair(resp: &Response) -> Option<String> {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

/// Assert that a response is a JSON error body with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    assert_eq!(json["error"].as_str(), Some(expected_error));
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message field"
    );
}
