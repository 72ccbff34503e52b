//! Wall-clock and frame-clock readings.

use time::OffsetDateTime;

/// Current instant in the viewer's UTC offset.
///
/// In the browser the offset comes from `Date.getTimezoneOffset()`; natively
/// the reading is UTC.
#[cfg_attr(feature = "hydrate", allow(clippy::cast_possible_truncation))]
pub fn now_local() -> OffsetDateTime {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new_0();
        let millis = date.get_time() as i64;
        let offset_secs = (-date.get_timezone_offset() * 60.0) as i32;
        let utc = OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
            .unwrap_or(OffsetDateTime::UNIX_EPOCH);
        let offset = time::UtcOffset::from_whole_seconds(offset_secs).unwrap_or(time::UtcOffset::UTC);
        utc.to_offset(offset)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc()
    }
}

/// Monotonic milliseconds for animation timing.
///
/// Browser: `performance.now()`. Natively: milliseconds since the first call.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.performance())
            .map_or(0.0, |p| p.now())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::sync::OnceLock;
        use std::time::Instant;

        static ORIGIN: OnceLock<Instant> = OnceLock::new();
        ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
    }
}
