use crate::constants::LASTMOD_FORMAT;
use chrono::{DateTime, FixedOffset, Utc};

/// Formats an instant as `YYYY-MM-DDThh:mm:ss+hh:mm` in the given offset.
///
/// The instant is converted into `offset` first, so the wall-clock part always
/// agrees with the suffix. The system timezone is never consulted.
pub fn format_lastmod(instant: &DateTime<Utc>, offset: &FixedOffset) -> String {
    instant.with_timezone(offset).format(LASTMOD_FORMAT).to_string()
}

/// Formats a priority with exactly one decimal digit.
///
/// Rounds half away from zero on the value widened to `f64`, so `0.85` gives `"0.9"`
/// and `0.25` gives `"0.3"`. Ties are judged on the exact binary value: `0.45f32`
/// is stored slightly below `0.45` and gives `"0.4"`.
pub fn format_priority(priority: f32) -> String {
    let rounded = (f64::from(priority) * 10.0).round() / 10.0;
    format!("{rounded:.1}")
}
