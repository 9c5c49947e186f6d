// src/presentation/http/state.rs
use crate::application::{ports::view::ViewRenderer, services::ApplicationServices};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub renderer: Arc<dyn ViewRenderer>,
}
