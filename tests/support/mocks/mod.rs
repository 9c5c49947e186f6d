// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod time;

pub use article_repos::{FailingArticleRepo, InMemoryArticleRepo, VanishingArticleRepo};
pub use time::{DummyClock, fixed_now};
