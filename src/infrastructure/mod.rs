// src/infrastructure/mod.rs
pub mod database;
pub mod flash_store;
pub mod repositories;
pub mod time;
pub mod views;
