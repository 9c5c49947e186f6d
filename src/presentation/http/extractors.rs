// src/presentation/http/extractors.rs
use axum::{extract::FromRequestParts, http::request::Parts};
use headers::{Cookie, HeaderMapExt};
use std::convert::Infallible;

pub const FLASH_COOKIE: &str = "flash";

/// The flash token the browser brought back from the previous redirect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashToken(pub Option<String>);

impl<S> FromRequestParts<S> for FlashToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .typed_get::<Cookie>()
            .and_then(|cookie| cookie.get(FLASH_COOKIE).map(str::to_string))
            .filter(|token| !token.is_empty());
        Ok(Self(token))
    }
}
