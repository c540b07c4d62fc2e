//! Display formatting for route metrics
//!
//! Pure helpers for presenting distances and durations returned by the
//! routing endpoints.

/// Format a distance in meters for display
///
/// Distances of a kilometer or more render as `x.xx km`, shorter ones as
/// whole meters.
#[must_use]
pub fn format_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.2} km", meters / 1000.0)
    } else {
        format!("{} m", meters.round())
    }
}

/// Format a duration in seconds as `Hh Mm Ss`, dropping leading zero units
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        return format!("{hours}h {minutes}m {secs}s");
    }
    if minutes > 0 {
        return format!("{minutes}m {secs}s");
    }
    format!("{secs}s")
}
