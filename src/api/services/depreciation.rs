//! Straight-line depreciation in whole years.

/// 365 days of milliseconds.
pub const MILLIS_PER_YEAR: i64 = 365 * 24 * 60 * 60 * 1000;

/// Whole years elapsed between `purchase_date` and `now` (both epoch millis).
///
/// Truncates toward zero; a purchase date in the future counts as zero years.
pub fn years_elapsed(purchase_date: i64, now: i64) -> i64 {
    (now.saturating_sub(purchase_date) / MILLIS_PER_YEAR).max(0)
}

/// Current value of an asset bought for `approx_value`, losing
/// `depreciation_rate` percent of that value per full year. Never negative.
pub fn depreciated_value(approx_value: u64, depreciation_rate: u64, purchase_date: i64, now: i64) -> u64 {
    let years = years_elapsed(purchase_date, now) as i128;
    let remaining_percent = 100i128.saturating_sub((depreciation_rate as i128).saturating_mul(years));
    if remaining_percent <= 0 {
        return 0;
    }

    // remaining_percent is at most 100, so the product fits in i128.
    (approx_value as i128 * remaining_percent / 100) as u64
}
