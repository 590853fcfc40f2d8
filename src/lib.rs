//! Bookstore Record Server
//!
//! An in-memory book catalog exposed as a REST JSON API. Records are keyed
//! by the (title, author) pair.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use models::book::YearRange;
use repository::Repository;
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<Services>,
}

impl AppState {
    /// Build the state with a fresh, empty store
    pub fn new(config: &AppConfig) -> Self {
        let repository = Repository::new(YearRange::from(&config.catalog));
        Self {
            services: Arc::new(Services::new(repository)),
        }
    }
}
