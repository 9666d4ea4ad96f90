//! Helpers for human readable output.

use chrono::DateTime;
use chrono::Utc;

/// Placeholder shown when a timestamp is missing.
pub const NO_TIMESTAMP: &str = "---";

/// Renders the age of `timestamp` relative to `now`, e.g. `10m` or `2h`.
///
/// A missing timestamp renders as `---`. Only the largest unit is shown.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use chrono::Utc;
/// use tkn_core::formatted::age;
///
/// let now = Utc::now();
/// assert_eq!(age(Some(now - Duration::hours(2)), now), "2h");
/// assert_eq!(age(None, now), "---");
/// ```
pub fn age(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    timestamp.map_or_else(
        || NO_TIMESTAMP.to_string(),
        |t| short_human_duration(now.signed_duration_since(t)),
    )
}

fn short_human_duration(elapsed: chrono::Duration) -> String {
    let seconds = elapsed.num_seconds();

    // Small clock skew between client and server is reported as zero.
    if seconds < -1 {
        return "<invalid>".to_string();
    }
    if seconds < 0 {
        return "0s".to_string();
    }
    if seconds < 60 {
        return format!("{seconds}s");
    }

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return format!("{minutes}m");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours}h");
    }
    if hours < 24 * 365 {
        return format!("{}d", hours / 24);
    }
    format!("{}y", hours / 24 / 365)
}
