//! In-process visit store
//!
//! Keeps every visit in a vector behind a mutex. Check-and-insert and
//! check-and-update happen under one lock, so the store never holds two
//! inside visits for the same person.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::visit::{VisitFilter, VisitRecord, VisitStatus, VisitorDetails},
};

use super::VisitStore;

#[derive(Default)]
pub struct MemoryVisitStore {
    visits: Mutex<Vec<VisitRecord>>,
}

impl MemoryVisitStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Vec<VisitRecord>>> {
        self.visits
            .lock()
            .map_err(|_| AppError::StoreUnavailable("visit store lock poisoned".to_string()))
    }
}

#[async_trait]
impl VisitStore for MemoryVisitStore {
    async fn insert(&self, visitor: VisitorDetails) -> AppResult<VisitRecord> {
        let mut visits = self.lock()?;

        let already_inside = visits
            .iter()
            .any(|v| v.is_inside() && v.id_number == visitor.id_number);
        if already_inside {
            return Err(AppError::AlreadyInside {
                id_number: visitor.id_number,
            });
        }

        let now = Utc::now();
        let record = VisitRecord {
            id: Uuid::new_v4(),
            id_number: visitor.id_number,
            mobile_number: visitor.mobile_number,
            first_name: visitor.first_name,
            last_name: visitor.last_name,
            car_plate: visitor.car_plate,
            time_in: now,
            time_out: None,
            status: VisitStatus::Inside,
            created_at: now,
        };
        visits.push(record.clone());
        Ok(record)
    }

    async fn mark_left(&self, id: Uuid) -> AppResult<Option<VisitRecord>> {
        let mut visits = self.lock()?;

        let Some(visit) = visits.iter_mut().find(|v| v.id == id && v.is_inside()) else {
            return Ok(None);
        };
        visit.status = VisitStatus::Left;
        visit.time_out = Some(Utc::now().max(visit.time_in));
        Ok(Some(visit.clone()))
    }

    async fn query(&self, filter: VisitFilter, limit: Option<usize>) -> AppResult<Vec<VisitRecord>> {
        let visits = self.lock()?;

        // Newest insert first among equal time_in values
        let mut rows: Vec<VisitRecord> = visits
            .iter()
            .rev()
            .filter(|v| filter.matches(v))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.time_in.cmp(&a.time_in));
        if let Some(limit) = limit {
            rows.truncate(limit);
        }
        Ok(rows)
    }

    async fn ping(&self) -> AppResult<()> {
        self.lock().map(|_| ())
    }
}
