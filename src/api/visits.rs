//! Visitor check-in/check-out endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    formatting::{format_duration, format_time},
    models::{
        kiosk::KioskProfile,
        visit::{CheckInRequest, CheckOutRequest, HistoryQuery, VisitRecord, VisitStatus},
    },
    AppState,
};

/// Visit as shown on a kiosk screen
#[derive(Debug, Serialize, ToSchema)]
pub struct VisitView {
    pub id: Uuid,
    pub id_number: String,
    pub mobile_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub car_plate: Option<String>,
    pub status: VisitStatus,
    pub time_in: DateTime<Utc>,
    pub time_out: Option<DateTime<Utc>>,
    /// e.g. "19 Oct, 14:05"
    pub time_in_display: String,
    /// "-" while inside
    pub time_out_display: String,
    /// e.g. "2h 15m", "-" while inside
    pub duration: String,
    pub created_at: DateTime<Utc>,
}

impl VisitView {
    pub fn new(visit: VisitRecord, offset: FixedOffset) -> Self {
        Self {
            full_name: visit.full_name(),
            time_in_display: format_time(Some(visit.time_in), offset),
            time_out_display: format_time(visit.time_out, offset),
            duration: format_duration(Some(visit.time_in), visit.time_out),
            id: visit.id,
            id_number: visit.id_number,
            mobile_number: visit.mobile_number,
            first_name: visit.first_name,
            last_name: visit.last_name,
            car_plate: visit.car_plate,
            status: visit.status,
            time_in: visit.time_in,
            time_out: visit.time_out,
            created_at: visit.created_at,
        }
    }
}

/// Result of a check-in or check-out
#[derive(Serialize, ToSchema)]
pub struct VisitResponse {
    /// Message to show at the kiosk
    pub message: String,
    pub visit: VisitView,
}

/// Visitors currently inside
#[derive(Serialize, ToSchema)]
pub struct ActiveVisitorsResponse {
    pub count: usize,
    pub visitors: Vec<VisitView>,
}

fn display_offset(state: &AppState) -> FixedOffset {
    state.config.kiosk.display_offset()
}

/// Check a visitor in
#[utoipa::path(
    post,
    path = "/{profile}/check-in",
    tag = "visits",
    params(("profile" = KioskProfile, Path, description = "Kiosk variant: web or mobile")),
    request_body = CheckInRequest,
    responses(
        (status = 201, description = "Visitor checked in", body = VisitResponse),
        (status = 400, description = "Invalid form input", body = crate::error::ErrorResponse),
        (status = 409, description = "Visitor already inside", body = crate::error::ErrorResponse),
        (status = 503, description = "Visit store unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn check_in(
    State(state): State<AppState>,
    Path(profile): Path<KioskProfile>,
    Json(request): Json<CheckInRequest>,
) -> AppResult<(StatusCode, Json<VisitResponse>)> {
    let visit = state.services.visits.check_in(profile, &request).await?;
    let view = VisitView::new(visit, display_offset(&state));

    Ok((
        StatusCode::CREATED,
        Json(VisitResponse {
            message: format!("{} checked in successfully!", view.full_name),
            visit: view,
        }),
    ))
}

/// Check a visitor out
#[utoipa::path(
    post,
    path = "/{profile}/check-out",
    tag = "visits",
    params(("profile" = KioskProfile, Path, description = "Kiosk variant: web or mobile")),
    request_body = CheckOutRequest,
    responses(
        (status = 200, description = "Visitor checked out", body = VisitResponse),
        (status = 400, description = "Invalid ID number", body = crate::error::ErrorResponse),
        (status = 404, description = "No active check-in for this ID", body = crate::error::ErrorResponse),
        (status = 503, description = "Visit store unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn check_out(
    State(state): State<AppState>,
    Path(_profile): Path<KioskProfile>,
    Json(request): Json<CheckOutRequest>,
) -> AppResult<Json<VisitResponse>> {
    let visit = state.services.visits.check_out(&request.id_number).await?;
    let view = VisitView::new(visit, display_offset(&state));

    Ok(Json(VisitResponse {
        message: format!("{} checked out successfully!", view.full_name),
        visit: view,
    }))
}

/// List visitors currently inside
#[utoipa::path(
    get,
    path = "/{profile}/visitors/active",
    tag = "visits",
    params(("profile" = KioskProfile, Path, description = "Kiosk variant: web or mobile")),
    responses(
        (status = 200, description = "Visitors inside, latest arrival first", body = ActiveVisitorsResponse),
        (status = 503, description = "Visit store unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn active_visitors(
    State(state): State<AppState>,
    Path(_profile): Path<KioskProfile>,
) -> AppResult<Json<ActiveVisitorsResponse>> {
    let offset = display_offset(&state);
    let visitors: Vec<VisitView> = state
        .services
        .visits
        .active_visitors()
        .await?
        .into_iter()
        .map(|v| VisitView::new(v, offset))
        .collect();

    Ok(Json(ActiveVisitorsResponse {
        count: visitors.len(),
        visitors,
    }))
}

/// List recent visits
#[utoipa::path(
    get,
    path = "/{profile}/visitors/history",
    tag = "visits",
    params(
        ("profile" = KioskProfile, Path, description = "Kiosk variant: web or mobile"),
        HistoryQuery
    ),
    responses(
        (status = 200, description = "Most recent visits, latest arrival first", body = Vec<VisitView>),
        (status = 503, description = "Visit store unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn history(
    State(state): State<AppState>,
    Path(profile): Path<KioskProfile>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<VisitView>>> {
    let offset = display_offset(&state);
    let visits = state
        .services
        .visits
        .recent_activity(profile, query.limit)
        .await?
        .into_iter()
        .map(|v| VisitView::new(v, offset))
        .collect();

    Ok(Json(visits))
}
