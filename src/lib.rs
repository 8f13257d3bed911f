//! Gateman visitor register
//!
//! Check-in/check-out workflows for building gate kiosks, served as a REST
//! JSON API over a PostgreSQL (or in-memory) visit store.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod formatting;
pub mod models;
pub mod repository;
pub mod services;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: AppConfig, repository: repository::Repository) -> Self {
        let services = services::Services::new(repository, config.kiosk.clone());
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
