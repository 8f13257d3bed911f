//! Data models for Gateman

pub mod kiosk;
pub mod visit;

// Re-export commonly used types
pub use kiosk::KioskProfile;
pub use visit::{
    CheckInRequest, CheckOutRequest, HistoryQuery, VisitFilter, VisitRecord, VisitStatus,
    VisitorDetails,
};
