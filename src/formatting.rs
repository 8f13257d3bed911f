//! Display helpers for visit times

use chrono::{DateTime, FixedOffset, Utc};

/// Shown in place of a missing timestamp or duration
pub const PLACEHOLDER: &str = "-";

/// Short day/month/time in the kiosk's offset, e.g. `19 Oct, 14:05`.
pub fn format_time(time: Option<DateTime<Utc>>, offset: FixedOffset) -> String {
    match time {
        Some(t) => t.with_timezone(&offset).format("%d %b, %H:%M").to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Time spent inside as `Xh Ym`. A negative span renders as `0h 0m`.
pub fn format_duration(time_in: Option<DateTime<Utc>>, time_out: Option<DateTime<Utc>>) -> String {
    let (Some(time_in), Some(time_out)) = (time_in, time_out) else {
        return PLACEHOLDER.to_string();
    };
    let minutes = (time_out - time_in).num_minutes().max(0);
    format!("{}h {}m", minutes / 60, minutes % 60)
}
