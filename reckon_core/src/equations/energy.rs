//! # Energy and Calendar Constants
//!
//! Household energy arithmetic. Monthly figures use calendar averages rather
//! than a specific month so results do not depend on the date.

/// Average weeks per month (52 / 12, rounded as quoted on bills)
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Average days per month (365.25 / 12)
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Weeks per year
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Months per year
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Energy used per day: kWh = watts × hours / 1000
#[inline]
pub fn daily_kwh(watts: f64, hours_per_day: f64) -> f64 {
    watts * hours_per_day / 1000.0
}

/// Months for an upfront cost to be recovered by monthly savings
#[inline]
pub fn payback_months(incremental_cost: f64, monthly_savings: f64) -> f64 {
    incremental_cost / monthly_savings
}
