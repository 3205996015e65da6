//! pokemon_review_api Library
//!
//! Re-exports modules for the server binary, integration tests and
//! external use.

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
mod error;
pub mod service;
pub mod store;

pub use config::Config;
pub use error::{AppError, AppResult, ErrorResponse};
