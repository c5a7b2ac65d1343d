//! Helper functions



use chrono::{DateTime, FixedOffset, Local};

/// Formats a pending change date relative to `now`
pub fn format_relative_time(date: &DateTime<FixedOffset>, now: DateTime<Local>) -> String {
    let dt = date.with_timezone(&Local);
    let diff = now.signed_duration_since(dt);
    let secs = diff.num_seconds();

    if secs < 0 {
        dt.format("%Y-%m-%d %H:%M").to_string()
    }
    else if secs < 60 {
        "just now".to_string()
    }
    else if secs < 3600 {
        format!("{} mins ago", diff.num_minutes())
    }
    else if secs < 86400 {
        format!("{} hours ago", diff.num_hours())
    }
    else {
        dt.format("%Y-%m-%d %H:%M").to_string()
    }
}
