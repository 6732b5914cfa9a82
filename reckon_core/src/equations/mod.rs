//! # Shared Formulas
//!
//! Every closed-form formula used by more than one calculator lives here, once.
//! The calculators in [`crate::calculations`] validate their inputs and then
//! call into these functions; nothing in this module validates.
//!
//! ## Modules
//!
//! - [`amortization`] - Fixed-payment loan math (payment, payoff periods, balance)
//! - [`growth`] - Compound growth, annuities, rate conversions
//! - [`ratio`] - Percentages, markup and margin
//! - [`geometry`] - Areas and volumes for material estimates
//! - [`energy`] - kWh arithmetic and calendar averaging constants
//!
//! ## Conventions
//!
//! - Interest rates are decimal per period (0.01 = 1% per period)
//! - Percentages in [`ratio`] are whole numbers (15.0 = 15%)

pub mod amortization;
pub mod energy;
pub mod geometry;
pub mod growth;
pub mod ratio;

pub use amortization::{
    amortized_payment,
    payment_for_periods,
    periods_to_payoff,
    remaining_balance,
    total_interest,
};

pub use growth::{
    annuity_future_value,
    cagr,
    compound,
    effective_annual_rate,
    real_rate,
    simple_interest,
    ContributionTiming,
};

pub use ratio::{
    apply_change,
    margin_percent,
    markup_percent,
    percent_change,
    percent_of,
    what_percent,
};

pub use geometry::{
    circle_area,
    cylinder_volume,
    rectangle_perimeter,
    rectangular_volume,
};

pub use energy::{
    daily_kwh,
    payback_months,
    DAYS_PER_MONTH,
    MONTHS_PER_YEAR,
    WEEKS_PER_MONTH,
    WEEKS_PER_YEAR,
};

/// Round to a fixed number of decimal places, as a displayed value would be.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.851_851, 2), 1.85);
        assert_eq!(round_to(2.5, 0), 3.0);
    }
}
