//! Repository layer for visit storage

pub mod memory;
pub mod visits;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::visit::{VisitFilter, VisitRecord, VisitorDetails},
};

/// Document-style access to the `visits` collection.
///
/// The store owns the clock: `time_in`, `created_at` and `time_out` are
/// assigned by the store, never by the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitStore: Send + Sync {
    /// Insert a new visit with `status = inside` and no `time_out`.
    ///
    /// Fails with `AlreadyInside` if the store itself detects another inside
    /// visit for the same id number.
    async fn insert(&self, visitor: VisitorDetails) -> AppResult<VisitRecord>;

    /// Set `status = left` and `time_out = now` on a visit that is still
    /// inside. Returns `None` if no such inside visit exists.
    async fn mark_left(&self, id: Uuid) -> AppResult<Option<VisitRecord>>;

    /// Visits matching `filter`, newest `time_in` first.
    async fn query(&self, filter: VisitFilter, limit: Option<usize>) -> AppResult<Vec<VisitRecord>>;

    /// Check that the store is reachable.
    async fn ping(&self) -> AppResult<()>;
}

/// Main repository struct holding the visit store
#[derive(Clone)]
pub struct Repository {
    pub visits: Arc<dyn VisitStore>,
}

impl Repository {
    /// Create a repository backed by PostgreSQL
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            visits: Arc::new(visits::PgVisitStore::new(pool)),
        }
    }

    /// Create a repository backed by a process-local store
    pub fn in_memory() -> Self {
        Self {
            visits: Arc::new(memory::MemoryVisitStore::new()),
        }
    }

    pub fn with_store(visits: Arc<dyn VisitStore>) -> Self {
        Self { visits }
    }
}
