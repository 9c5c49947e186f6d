// src/application/ports/mod.rs
pub mod flash;
pub mod time;
pub mod view;
