//! # Amortization Formulas
//!
//! Fixed-payment loan math shared by the loan, mortgage, auto-loan and
//! credit-card calculators.
//!
//! ## Notation
//!
//! - `P` / `B` = Principal (or outstanding balance)
//! - `r` = Interest rate per payment period (decimal, e.g. 0.0075)
//! - `n` = Number of payment periods
//! - `A` = Periodic payment
//!
//! These functions do no validation. Callers check their inputs first; the
//! only degenerate case handled here is `r = 0`.

/// Periodic payment that fully amortizes `principal` over `n` periods.
///
/// # Formula
/// - A = P·r(1+r)^n / ((1+r)^n − 1)
/// - A = P / n when r = 0
///
/// # Example
/// ```
/// use reckon_core::equations::amortized_payment;
///
/// // 100,000 at 12%/yr for 12 months
/// let a = amortized_payment(100_000.0, 0.01, 12.0);
/// assert!((a - 8884.88).abs() < 0.01);
/// ```
#[inline]
pub fn amortized_payment(principal: f64, r: f64, n: f64) -> f64 {
    if r == 0.0 {
        return principal / n;
    }
    let growth = (1.0 + r).powf(n);
    principal * r * growth / (growth - 1.0)
}

/// Payment needed to clear `balance` in exactly `n` periods.
///
/// # Formula
/// - A = r·B / (1 − (1+r)^−n)
/// - A = B / n when r = 0
///
/// Algebraically identical to [`amortized_payment`]; this is the form the
/// payoff calculators quote.
#[inline]
pub fn payment_for_periods(balance: f64, r: f64, n: f64) -> f64 {
    if r == 0.0 {
        return balance / n;
    }
    r * balance / (1.0 - (1.0 + r).powf(-n))
}

/// Number of periods needed to clear `balance` paying `payment` each period.
///
/// # Formula
/// - n = −ln(1 − r·B/A) / ln(1+r)
/// - n = B / A when r = 0
///
/// # Returns
/// `None` when the payment never clears the balance (A ≤ B·r, or A ≤ 0).
#[inline]
pub fn periods_to_payoff(balance: f64, r: f64, payment: f64) -> Option<f64> {
    if payment <= 0.0 {
        return None;
    }
    if r == 0.0 {
        return Some(balance / payment);
    }
    if payment <= balance * r {
        return None;
    }
    Some(-(1.0 - r * balance / payment).ln() / (1.0 + r).ln())
}

/// Balance remaining after `k` payments of `payment`.
///
/// # Formula
/// - B_k = P(1+r)^k − A·((1+r)^k − 1)/r
/// - B_k = P − A·k when r = 0
#[inline]
pub fn remaining_balance(principal: f64, r: f64, payment: f64, k: f64) -> f64 {
    if r == 0.0 {
        return principal - payment * k;
    }
    let growth = (1.0 + r).powf(k);
    principal * growth - payment * (growth - 1.0) / r
}

/// Total interest paid over the life of an amortized loan.
///
/// Total interest = A·n − P
#[inline]
pub fn total_interest(principal: f64, r: f64, n: f64) -> f64 {
    amortized_payment(principal, r, n) * n - principal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_matches_reference() {
        // 200,000 over 30 yr at 6% -> 1199.10/month
        let a = amortized_payment(200_000.0, 0.06 / 12.0, 360.0);
        assert!((a - 1199.10).abs() < 0.01);
    }

    #[test]
    fn test_zero_rate_divides_evenly() {
        assert_eq!(amortized_payment(12_000.0, 0.0, 24.0), 500.0);
        assert_eq!(payment_for_periods(12_000.0, 0.0, 24.0), 500.0);
        assert_eq!(periods_to_payoff(12_000.0, 0.0, 500.0), Some(24.0));
    }

    #[test]
    fn test_payment_forms_agree() {
        let a = amortized_payment(5_000.0, 0.015, 36.0);
        let b = payment_for_periods(5_000.0, 0.015, 36.0);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_periods_inverts_payment() {
        let r = 0.18 / 12.0;
        let a = payment_for_periods(5_000.0, r, 24.0);
        let n = periods_to_payoff(5_000.0, r, a).unwrap();
        assert!((n - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_insufficient_payment() {
        // interest alone is 75/month
        assert_eq!(periods_to_payoff(5_000.0, 0.015, 75.0), None);
        assert_eq!(periods_to_payoff(5_000.0, 0.015, 60.0), None);
        assert!(periods_to_payoff(5_000.0, 0.015, 75.01).is_some());
    }

    #[test]
    fn test_balance_reaches_zero() {
        let r = 0.005;
        let a = amortized_payment(10_000.0, r, 60.0);
        assert!(remaining_balance(10_000.0, r, a, 60.0).abs() < 1e-6);
        assert!(remaining_balance(10_000.0, r, a, 30.0) > 0.0);
    }

    #[test]
    fn test_total_interest_consistency() {
        let (p, r, n) = (500_000.0, 0.095 / 12.0, 60.0);
        let lhs = amortized_payment(p, r, n) * n;
        let rhs = p + total_interest(p, r, n);
        assert!((lhs - rhs).abs() < 1e-6);
    }
}
