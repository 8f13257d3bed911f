//! Visitor check-in/check-out service

use std::sync::Arc;

use crate::{
    config::KioskConfig,
    error::{AppError, AppResult},
    models::{
        kiosk::KioskProfile,
        visit::{CheckInRequest, VisitFilter, VisitRecord},
    },
    repository::VisitStore,
    validation,
};

#[derive(Clone)]
pub struct VisitsService {
    store: Arc<dyn VisitStore>,
    kiosk: KioskConfig,
}

impl VisitsService {
    pub fn new(store: Arc<dyn VisitStore>, kiosk: KioskConfig) -> Self {
        Self { store, kiosk }
    }

    /// Check a visitor in.
    ///
    /// Validation runs before any store access. The store is then asked
    /// whether the person is already inside; only if not is the visit
    /// inserted. A single insert happens on success and none on failure.
    pub async fn check_in(
        &self,
        profile: KioskProfile,
        request: &CheckInRequest,
    ) -> AppResult<VisitRecord> {
        let visitor = validation::validate_check_in(profile, request)?;

        let existing = self
            .store
            .query(VisitFilter::inside_with_id(&visitor.id_number), Some(1))
            .await?;
        if !existing.is_empty() {
            tracing::warn!(id_number = %visitor.id_number, %profile, "check-in refused: already inside");
            return Err(AppError::AlreadyInside {
                id_number: visitor.id_number,
            });
        }

        let visit = self.store.insert(visitor).await?;
        tracing::info!(
            visit_id = %visit.id,
            id_number = %visit.id_number,
            %profile,
            "visitor checked in"
        );
        Ok(visit)
    }

    /// Check a visitor out by ID number.
    ///
    /// Updates the most recent inside visit for that person. Any further
    /// inside visits for the same ID are left untouched.
    pub async fn check_out(&self, id_number: &str) -> AppResult<VisitRecord> {
        validation::validate_check_out_id(id_number)?;

        let inside = self
            .store
            .query(VisitFilter::inside_with_id(id_number), None)
            .await?;
        let Some(visit) = inside.into_iter().next() else {
            tracing::warn!(%id_number, "check-out refused: not inside");
            return Err(AppError::NotInside {
                id_number: id_number.to_string(),
            });
        };

        // Someone else may have checked the visit out since the query
        let visit = self
            .store
            .mark_left(visit.id)
            .await?
            .ok_or_else(|| AppError::NotInside {
                id_number: id_number.to_string(),
            })?;

        tracing::info!(visit_id = %visit.id, %id_number, "visitor checked out");
        Ok(visit)
    }

    /// Visitors currently inside, most recent arrival first
    pub async fn active_visitors(&self) -> AppResult<Vec<VisitRecord>> {
        self.store.query(VisitFilter::inside(), None).await
    }

    /// Most recent visits of any status
    pub async fn recent_activity(
        &self,
        profile: KioskProfile,
        limit: Option<usize>,
    ) -> AppResult<Vec<VisitRecord>> {
        let limit = profile.history_limit(&self.kiosk, limit);
        self.store.query(VisitFilter::all(), Some(limit)).await
    }

    /// Check that the visit store is reachable
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
