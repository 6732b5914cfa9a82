//! # Growth and Interest Formulas
//!
//! Compound growth, annuities and rate conversions used by the savings,
//! retirement and investment calculators. Rates are decimal per period.

use serde::{Deserialize, Serialize};

/// When periodic contributions land within each period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ContributionTiming {
    /// Ordinary annuity: deposit at period end
    #[default]
    End,
    /// Annuity due: deposit at period start, earns one extra period
    Beginning,
}

/// Future value of a lump sum: FV = P(1+r)^n
#[inline]
pub fn compound(principal: f64, r: f64, n: f64) -> f64 {
    principal * (1.0 + r).powf(n)
}

/// Future value of `n` contributions of `payment`.
///
/// # Formulas
/// - Ordinary: FV = A·((1+r)^n − 1)/r
/// - Due:      FV = A·((1+r)^n − 1)/r · (1+r)
/// - FV = A·n when r = 0 (either timing)
///
/// # Example
/// ```
/// use reckon_core::equations::{annuity_future_value, ContributionTiming};
///
/// let fv = annuity_future_value(100.0, 0.0, 12.0, ContributionTiming::Beginning);
/// assert_eq!(fv, 1200.0);
/// ```
#[inline]
pub fn annuity_future_value(payment: f64, r: f64, n: f64, timing: ContributionTiming) -> f64 {
    if r == 0.0 {
        return payment * n;
    }
    let ordinary = payment * ((1.0 + r).powf(n) - 1.0) / r;
    match timing {
        ContributionTiming::End => ordinary,
        ContributionTiming::Beginning => ordinary * (1.0 + r),
    }
}

/// Simple interest: I = P × rate × time
#[inline]
pub fn simple_interest(principal: f64, rate: f64, time: f64) -> f64 {
    principal * rate * time
}

/// Inflation-adjusted rate (Fisher): r_real = (1 + r_nominal)/(1 + inflation) − 1
#[inline]
pub fn real_rate(nominal: f64, inflation: f64) -> f64 {
    (1.0 + nominal) / (1.0 + inflation) - 1.0
}

/// Effective annual rate for a nominal rate compounded `m` times a year:
/// EAR = (1 + r/m)^m − 1
#[inline]
pub fn effective_annual_rate(nominal: f64, m: f64) -> f64 {
    (1.0 + nominal / m).powf(m) - 1.0
}

/// Compound annual growth rate: CAGR = (final/initial)^(1/years) − 1
#[inline]
pub fn cagr(initial: f64, final_value: f64, years: f64) -> f64 {
    (final_value / initial).powf(1.0 / years) - 1.0
}
