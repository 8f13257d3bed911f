//! Visit record model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Whether the visitor is still on the premises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VisitStatus {
    Inside,
    Left,
}

impl VisitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitStatus::Inside => "inside",
            VisitStatus::Left => "left",
        }
    }
}

impl std::fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VisitStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inside" => Ok(VisitStatus::Inside),
            "left" => Ok(VisitStatus::Left),
            _ => Err(format!("Invalid visit status: {}", s)),
        }
    }
}

// SQLx conversion for VisitStatus (stored as TEXT)
impl sqlx::Type<Postgres> for VisitStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for VisitStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for VisitStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        <&str as Encode<Postgres>>::encode(self.as_str(), buf)
    }
}

/// One check-in/check-out cycle for a person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct VisitRecord {
    pub id: Uuid,
    /// National ID number, 8 digits
    pub id_number: String,
    /// Normalized as 254XXXXXXXXX
    pub mobile_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub car_plate: Option<String>,
    pub time_in: DateTime<Utc>,
    /// Set exactly once, at check-out
    pub time_out: Option<DateTime<Utc>>,
    pub status: VisitStatus,
    pub created_at: DateTime<Utc>,
}

impl VisitRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_inside(&self) -> bool {
        self.status == VisitStatus::Inside
    }
}

/// Validated, normalized visitor fields for a new visit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorDetails {
    pub id_number: String,
    pub mobile_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub car_plate: Option<String>,
}

/// Equality filters for visit queries. Results are always ordered by
/// `time_in` descending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitFilter {
    pub id_number: Option<String>,
    pub status: Option<VisitStatus>,
}

impl VisitFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn inside() -> Self {
        Self {
            id_number: None,
            status: Some(VisitStatus::Inside),
        }
    }

    pub fn inside_with_id(id_number: &str) -> Self {
        Self {
            id_number: Some(id_number.to_string()),
            status: Some(VisitStatus::Inside),
        }
    }

    pub fn matches(&self, visit: &VisitRecord) -> bool {
        self.id_number.as_deref().map_or(true, |id| visit.id_number == id)
            && self.status.map_or(true, |s| visit.status == s)
    }
}

/// Check-in form
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CheckInRequest {
    /// National ID number (exactly 8 digits)
    #[validate(custom(function = "crate::validation::id_number_field"))]
    pub id_number: String,
    /// Mobile number, required by the mobile kiosk (e.g. 0712345678)
    #[serde(default)]
    #[validate(custom(function = "crate::validation::mobile_field"))]
    pub mobile_number: Option<String>,
    #[validate(custom(function = "crate::validation::name_field"))]
    pub first_name: String,
    #[validate(custom(function = "crate::validation::name_field"))]
    pub last_name: String,
    /// Car plate (e.g. KBM243T), optional
    #[serde(default)]
    #[validate(custom(function = "crate::validation::car_plate_field"))]
    pub car_plate: Option<String>,
}

/// Check-out form
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CheckOutRequest {
    /// National ID number of the visitor leaving
    pub id_number: String,
}

/// Query parameters for the history view
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    /// Number of most recent visits to return
    pub limit: Option<usize>,
}
