//! Visitor input validation and normalization
//!
//! Everything here is pure and synchronous: no store access happens until the
//! input has passed these checks.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use validator::Validate;

use crate::models::{
    kiosk::KioskProfile,
    visit::{CheckInRequest, VisitorDetails},
};

static ID_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{8}$").expect("id number pattern"));

/// Optional 254 / +254 / 0 prefix followed by a 9 digit number starting with 1 or 7
static MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:254|\+254|0)?([17][0-9]{8})$").expect("mobile pattern"));

/// Three letters, three digits, one letter (e.g. KBM243T), ASCII only
static CAR_PLATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{3}[0-9]{3}[A-Za-z]$").expect("car plate pattern"));

const MOBILE_COUNTRY_CODE: &str = "254";

/// Input validation failures, reported before any store interaction
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("ID must be exactly 8 digits")]
    InvalidId,

    #[error("Please enter a valid 8-digit ID")]
    InvalidCheckOutId,

    #[error("Mobile number must be a valid Kenyan number (e.g., 0712345678)")]
    InvalidMobile,

    #[error("First name and last name are required")]
    MissingName,

    #[error("Car plate must be in Kenyan format (e.g., KBM243T)")]
    InvalidPlate,
}

pub fn is_valid_id_number(id_number: &str) -> bool {
    ID_NUMBER_RE.is_match(id_number)
}

pub fn validate_id_number(id_number: &str) -> Result<(), InputError> {
    if is_valid_id_number(id_number) {
        Ok(())
    } else {
        Err(InputError::InvalidId)
    }
}

/// ID check for the check-out form, which prompts differently on failure
pub fn validate_check_out_id(id_number: &str) -> Result<(), InputError> {
    validate_id_number(id_number).map_err(|_| InputError::InvalidCheckOutId)
}

/// Normalize a mobile number to `254XXXXXXXXX`.
pub fn normalize_mobile(mobile: &str) -> Result<String, InputError> {
    let caps = MOBILE_RE
        .captures(mobile.trim())
        .ok_or(InputError::InvalidMobile)?;
    Ok(format!("{}{}", MOBILE_COUNTRY_CODE, &caps[1]))
}

/// Trim both names; either one being blank is an error.
pub fn normalize_names(first_name: &str, last_name: &str) -> Result<(String, String), InputError> {
    let first = first_name.trim();
    let last = last_name.trim();
    if first.is_empty() || last.is_empty() {
        return Err(InputError::MissingName);
    }
    Ok((first.to_string(), last.to_string()))
}

/// Uppercase a car plate. Blank input means "no car".
pub fn normalize_plate(plate: Option<&str>) -> Result<Option<String>, InputError> {
    let Some(plate) = plate.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(None);
    };
    if CAR_PLATE_RE.is_match(plate) {
        Ok(Some(plate.to_ascii_uppercase()))
    } else {
        Err(InputError::InvalidPlate)
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

// Field validators used by `#[derive(Validate)]` on the request types.
// The error codes name the `InputError` variant they map to.

pub(crate) fn id_number_field(value: &str) -> Result<(), validator::ValidationError> {
    validate_id_number(value).map_err(|_| validator::ValidationError::new("invalid_id"))
}

pub(crate) fn mobile_field(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    normalize_mobile(value)
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("invalid_mobile"))
}

pub(crate) fn name_field(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        Err(validator::ValidationError::new("missing_name"))
    } else {
        Ok(())
    }
}

pub(crate) fn car_plate_field(value: &str) -> Result<(), validator::ValidationError> {
    normalize_plate(Some(value))
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("invalid_plate"))
}

/// Validate a check-in form for the given kiosk profile.
///
/// Checks run in form order (id, mobile, names, plate) and the first failure
/// is returned. On success the visitor fields come back normalized.
pub fn validate_check_in(
    profile: KioskProfile,
    request: &CheckInRequest,
) -> Result<VisitorDetails, InputError> {
    let failed = request
        .validate()
        .err()
        .unwrap_or_else(validator::ValidationErrors::new);
    let fields = failed.field_errors();

    if fields.contains_key("id_number") {
        return Err(InputError::InvalidId);
    }
    let mobile_missing = profile.requires_mobile() && is_blank(request.mobile_number.as_deref());
    if mobile_missing || fields.contains_key("mobile_number") {
        return Err(InputError::InvalidMobile);
    }
    if fields.contains_key("first_name") || fields.contains_key("last_name") {
        return Err(InputError::MissingName);
    }
    if fields.contains_key("car_plate") {
        return Err(InputError::InvalidPlate);
    }

    let mobile_number = match request.mobile_number.as_deref() {
        Some(m) if !m.trim().is_empty() => Some(normalize_mobile(m)?),
        _ => None,
    };
    let (first_name, last_name) = normalize_names(&request.first_name, &request.last_name)?;
    let car_plate = normalize_plate(request.car_plate.as_deref())?;

    Ok(VisitorDetails {
        id_number: request.id_number.clone(),
        mobile_number,
        first_name,
        last_name,
        car_plate,
    })
}
