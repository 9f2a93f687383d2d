//! Forecast series normalization.
//!
//! The forecast endpoint returns a 3-hourly series (8 entries per day). The
//! dashboard shows one entry per day, taken by fixed-stride sampling: the
//! entries at indices 0, 8, 16, 24 and 32. This is a positional sample, not
//! a daily aggregate, so the sampled hour-of-day drifts with the series
//! start time.

/// Entries per sampled step (8 x 3h = 24h).
pub const DAY_STRIDE: usize = 8;

/// Maximum number of sampled entries.
pub const MAX_DAYS: usize = 5;

/// Select every [`DAY_STRIDE`]th element, at most [`MAX_DAYS`] of them.
pub fn stride_sample<T>(items: Vec<T>) -> Vec<T> {
    items
        .into_iter()
        .step_by(DAY_STRIDE)
        .take(MAX_DAYS)
        .collect()
}
