use chrono::Offset;

pub use chrono::{DateTime, FixedOffset, Utc};

/// Formats a creation timestamp for the records table, e.g. `05/03/2024 às 11:30`.
///
/// `offset` is the viewer's UTC offset in effect at `created_at`, which can
/// differ between rows where daylight saving time applies.
pub fn format_created_at(created_at: &DateTime<Utc>, offset: FixedOffset) -> String {
    created_at
        .with_timezone(&offset)
        .format("%d/%m/%Y às %H:%M")
        .to_string()
}

/// Converts a JavaScript `Date.getTimezoneOffset()` value into a [`FixedOffset`].
///
/// JavaScript reports minutes *behind* UTC (positive west of Greenwich), so
/// the sign is flipped. Out-of-range values fall back to UTC.
pub fn offset_from_js_minutes(minutes: f64) -> FixedOffset {
    let seconds = (-minutes * 60.0).round() as i32;
    FixedOffset::east_opt(seconds).unwrap_or_else(utc)
}

pub fn utc() -> FixedOffset {
    Utc.fix()
}
