//! Business logic services

pub mod visits;

use crate::{config::KioskConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub visits: visits::VisitsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, kiosk_config: KioskConfig) -> Self {
        Self {
            visits: visits::VisitsService::new(repository.visits, kiosk_config),
        }
    }
}
