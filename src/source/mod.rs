// src/source/mod.rs
pub mod loader;
pub mod models;

pub use loader::{list_quiz_files, read_document};
