//! Relative time formatting

use chrono::{DateTime, Utc};

/// Format the time elapsed between `timestamp` and `now` as "Ns ago", "Nm ago", "Nh ago" or "Nd ago"
///
/// Timestamps after `now` are reported as "0s ago".
pub fn relative_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds().max(0);

    if seconds < 60 {
        return format!("{}s ago", seconds);
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    format!("{}d ago", hours / 24)
}
