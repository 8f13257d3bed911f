//! Kiosk client profiles

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::KioskConfig;

/// The client variant a request comes from.
///
/// Both variants share the same workflows; they differ only in whether a
/// mobile number is collected and in how much history they show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum KioskProfile {
    Web,
    Mobile,
}

impl KioskProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            KioskProfile::Web => "web",
            KioskProfile::Mobile => "mobile",
        }
    }

    pub fn requires_mobile(&self) -> bool {
        matches!(self, KioskProfile::Mobile)
    }

    /// Number of history rows to return, honoring a caller override
    /// clamped to `1..=max_history_limit`.
    pub fn history_limit(&self, kiosk: &KioskConfig, requested: Option<usize>) -> usize {
        let default = match self {
            KioskProfile::Web => kiosk.web_history_limit,
            KioskProfile::Mobile => kiosk.mobile_history_limit,
        };
        requested
            .unwrap_or(default)
            .clamp(1, kiosk.max_history_limit.max(1))
    }
}

impl std::fmt::Display for KioskProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
