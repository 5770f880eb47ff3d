use chrono::{DateTime, Utc};

/// Decimal places kept on every progress percentage.
pub const PROGRESS_DECIMALS: i32 = 5;

pub const COMPLETE: f64 = 100.0;

/// Percentage of the window `[start, end]` covered at `current`.
///
/// Zero up to and including `start`, 100 from `end` on, otherwise the elapsed
/// share rounded to [`PROGRESS_DECIMALS`] places and kept within `0..=100`.
pub fn progress(current: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    if current <= start {
        return 0.0;
    }
    if current >= end {
        return COMPLETE;
    }

    let total = (end - start).num_milliseconds() as f64;
    let elapsed = (current - start).num_milliseconds() as f64;
    round_progress(elapsed / total * COMPLETE).clamp(0.0, COMPLETE)
}

pub fn round_progress(value: f64) -> f64 {
    let scale = 10f64.powi(PROGRESS_DECIMALS);
    (value * scale).round() / scale
}
