//! # Growth and Interest Calculators
//!
//! Compound interest (with optional contributions), simple interest,
//! retirement savings and investment return.
//!
//! ## Example
//!
//! ```rust
//! use reckon_core::calculations::growth::{CompoundInterestInput, CompoundingFrequency, calculate_compound_interest};
//! use reckon_core::equations::ContributionTiming;
//!
//! let input = CompoundInterestInput {
//!     principal: 10_000.0,
//!     annual_rate_pct: 5.0,
//!     years: 10.0,
//!     compounding: CompoundingFrequency::Annually,
//!     contribution_per_period: 0.0,
//!     contribution_timing: ContributionTiming::End,
//! };
//! let result = calculate_compound_interest(&input).unwrap();
//! assert!((result.future_value - 16_288.95).abs() < 0.01);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::equations::{
    annuity_future_value, cagr, compound, effective_annual_rate, real_rate, simple_interest, ContributionTiming,
};
use crate::errors::CalcResult;
use crate::validation::{reject, require_finite_result, require_non_negative, require_positive, require_range};

/// Default sustainable withdrawal rate (the "4% rule")
pub const DEFAULT_WITHDRAWAL_RATE_PCT: f64 = 4.0;

/// How often interest is credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CompoundingFrequency {
    Annually,
    SemiAnnually,
    Quarterly,
    #[default]
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    /// All frequencies in UI order
    pub const ALL: [CompoundingFrequency; 5] = [
        CompoundingFrequency::Annually,
        CompoundingFrequency::SemiAnnually,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Daily,
    ];

    /// Compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::SemiAnnually => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
        }
    }

    /// Form value / display label
    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundingFrequency::Annually => "annually",
            CompoundingFrequency::SemiAnnually => "semiannually",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Daily => "daily",
        }
    }
}

impl FromStr for CompoundingFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase().replace(['-', '_', ' '], "");
        CompoundingFrequency::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| format!("unknown compounding frequency '{}'", s))
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Compound Interest
// ============================================================================

/// Input for a compound-interest calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestInput {
    /// Starting balance
    pub principal: f64,

    /// Nominal annual rate in percent
    pub annual_rate_pct: f64,

    /// Years invested
    pub years: f64,

    #[serde(default)]
    pub compounding: CompoundingFrequency,

    /// Deposit made every compounding period (0 for lump sum only)
    #[serde(default)]
    pub contribution_per_period: f64,

    #[serde(default)]
    pub contribution_timing: ContributionTiming,
}

impl CompoundInterestInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("principal", self.principal)?;
        require_range("annual_rate_pct", self.annual_rate_pct, 0.0, 100.0)?;
        require_positive("years", self.years)?;
        require_range("years", self.years, 0.0, 100.0)?;
        require_non_negative("contribution_per_period", self.contribution_per_period)?;
        if self.principal == 0.0 && self.contribution_per_period == 0.0 {
            return Err(reject("principal", self.principal, "Enter a starting balance or a contribution"));
        }
        Ok(())
    }
}

/// Results from a compound-interest calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    /// Ending balance
    pub future_value: f64,
    /// Growth of the starting balance alone
    pub principal_future_value: f64,
    /// Growth of the contribution stream alone
    pub contributions_future_value: f64,
    /// Principal plus every contribution
    pub total_contributed: f64,
    /// Future value minus total contributed
    pub total_interest: f64,
    /// Effective annual rate in percent
    pub effective_annual_rate_pct: f64,
}

/// Calculate compound growth of a lump sum plus optional contributions.
pub fn calculate_compound_interest(input: &CompoundInterestInput) -> CalcResult<CompoundInterestResult> {
    input.validate()?;

    let m = input.compounding.periods_per_year() as f64;
    let nominal = input.annual_rate_pct / 100.0;
    let r = nominal / m;
    let n = input.years * m;

    let principal_fv = compound(input.principal, r, n);
    let contributions_fv = annuity_future_value(input.contribution_per_period, r, n, input.contribution_timing);
    let future_value = principal_fv + contributions_fv;
    let total_contributed = input.principal + input.contribution_per_period * n;

    require_finite_result("principal", input.principal, principal_fv)?;
    require_finite_result("contribution_per_period", input.contribution_per_period, contributions_fv)?;
    require_finite_result("contribution_per_period", input.contribution_per_period, total_contributed)?;
    require_finite_result("principal", input.principal, future_value)?;

    Ok(CompoundInterestResult {
        future_value,
        principal_future_value: principal_fv,
        contributions_future_value: contributions_fv,
        total_contributed,
        total_interest: future_value - total_contributed,
        effective_annual_rate_pct: effective_annual_rate(nominal, m) * 100.0,
    })
}

// ============================================================================
// Simple Interest
// ============================================================================

/// Input for a simple-interest calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestInput {
    pub principal: f64,
    /// Annual rate in percent
    pub annual_rate_pct: f64,
    /// Time in years
    pub years: f64,
}

impl SimpleInterestInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("principal", self.principal)?;
        require_range("annual_rate_pct", self.annual_rate_pct, 0.0, 100.0)?;
        require_positive("years", self.years)?;
        Ok(())
    }
}

/// Results from a simple-interest calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestResult {
    pub interest: f64,
    /// Principal plus interest
    pub total_amount: f64,
}

/// Calculate simple interest: I = P × rate × time.
pub fn calculate_simple_interest(input: &SimpleInterestInput) -> CalcResult<SimpleInterestResult> {
    input.validate()?;
    let interest = simple_interest(input.principal, input.annual_rate_pct / 100.0, input.years);
    require_finite_result("principal", input.principal, input.principal + interest)?;
    Ok(SimpleInterestResult {
        interest,
        total_amount: input.principal + interest,
    })
}

// ============================================================================
// Retirement
// ============================================================================

/// Input for a retirement-savings projection.
///
/// Monthly contributions are treated as deposits at the start of each month
/// (annuity due). With `adjust_for_inflation`, the return is converted to a
/// real rate first so results are in today's money.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementInput {
    pub current_age: u32,
    pub retirement_age: u32,
    pub current_savings: f64,
    pub monthly_contribution: f64,
    /// Expected nominal annual return in percent
    pub annual_return_pct: f64,
    /// Expected annual inflation in percent
    #[serde(default)]
    pub inflation_pct: f64,
    #[serde(default)]
    pub adjust_for_inflation: bool,
    /// Share of the nest egg withdrawn per year in retirement, in percent
    #[serde(default = "default_withdrawal_rate")]
    pub withdrawal_rate_pct: f64,
}

fn default_withdrawal_rate() -> f64 {
    DEFAULT_WITHDRAWAL_RATE_PCT
}

impl RetirementInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_range("current_age", self.current_age as f64, 0.0, 120.0)?;
        require_range("retirement_age", self.retirement_age as f64, 0.0, 120.0)?;
        if self.retirement_age <= self.current_age {
            return Err(reject(
                "retirement_age",
                self.retirement_age as f64,
                "Retirement age must be greater than current age",
            ));
        }
        require_non_negative("current_savings", self.current_savings)?;
        require_non_negative("monthly_contribution", self.monthly_contribution)?;
        require_range("annual_return_pct", self.annual_return_pct, 0.0, 50.0)?;
        require_range("inflation_pct", self.inflation_pct, 0.0, 50.0)?;
        require_range("withdrawal_rate_pct", self.withdrawal_rate_pct, 0.0, 100.0)?;
        Ok(())
    }

    /// Years left until retirement
    pub fn years_to_retirement(&self) -> u32 {
        self.retirement_age - self.current_age
    }

    /// Annual rate actually used for growth (decimal)
    pub fn effective_annual_return(&self) -> f64 {
        let nominal = self.annual_return_pct / 100.0;
        if self.adjust_for_inflation {
            real_rate(nominal, self.inflation_pct / 100.0)
        } else {
            nominal
        }
    }
}

/// Results from a retirement projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementResult {
    pub years_to_retirement: u32,
    /// Annual rate used, in percent (real when inflation-adjusted)
    pub effective_return_pct: f64,
    pub savings_future_value: f64,
    pub contributions_future_value: f64,
    /// Projected balance at retirement
    pub total_at_retirement: f64,
    /// Current savings plus every contribution
    pub total_contributed: f64,
    pub investment_growth: f64,
    /// First-year income at the withdrawal rate
    pub annual_retirement_income: f64,
    pub monthly_retirement_income: f64,
}

/// Project savings at retirement.
pub fn calculate_retirement(input: &RetirementInput) -> CalcResult<RetirementResult> {
    input.validate()?;

    let years = input.years_to_retirement();
    let annual = input.effective_annual_return();
    let r = annual / 12.0;
    let n = years as f64 * 12.0;

    let savings_fv = compound(input.current_savings, r, n);
    let contributions_fv = annuity_future_value(input.monthly_contribution, r, n, ContributionTiming::Beginning);
    let total = savings_fv + contributions_fv;
    let total_contributed = input.current_savings + input.monthly_contribution * n;

    require_finite_result("current_savings", input.current_savings, savings_fv)?;
    require_finite_result("monthly_contribution", input.monthly_contribution, contributions_fv)?;
    require_finite_result("current_savings", input.current_savings, total)?;

    let annual_income = total * input.withdrawal_rate_pct / 100.0;

    Ok(RetirementResult {
        years_to_retirement: years,
        effective_return_pct: annual * 100.0,
        savings_future_value: savings_fv,
        contributions_future_value: contributions_fv,
        total_at_retirement: total,
        total_contributed,
        investment_growth: total - total_contributed,
        annual_retirement_income: annual_income,
        monthly_retirement_income: annual_income / 12.0,
    })
}

// ============================================================================
// Investment Return
// ============================================================================

/// Input for an investment-return (ROI / CAGR) calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentReturnInput {
    pub initial_value: f64,
    pub final_value: f64,
    /// Holding period in years
    pub years: f64,
}

impl InvestmentReturnInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("initial_value", self.initial_value)?;
        require_non_negative("final_value", self.final_value)?;
        require_positive("years", self.years)?;
        Ok(())
    }
}

/// Results from an investment-return calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentReturnResult {
    /// Final minus initial value
    pub gain: f64,
    /// Total return in percent
    pub total_return_pct: f64,
    /// Compound annual growth rate in percent
    pub annualized_return_pct: f64,
}

/// Calculate total and annualized return on an investment.
pub fn calculate_investment_return(input: &InvestmentReturnInput) -> CalcResult<InvestmentReturnResult> {
    input.validate()?;
    let gain = input.final_value - input.initial_value;
    Ok(InvestmentReturnResult {
        gain,
        total_return_pct: gain / input.initial_value * 100.0,
        annualized_return_pct: cagr(input.initial_value, input.final_value, input.years) * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn retirement() -> RetirementInput {
        RetirementInput {
            current_age: 30,
            retirement_age: 65,
            current_savings: 50_000.0,
            monthly_contribution: 500.0,
            annual_return_pct: 7.0,
            inflation_pct: 3.0,
            adjust_for_inflation: false,
            withdrawal_rate_pct: DEFAULT_WITHDRAWAL_RATE_PCT,
        }
    }

    #[test]
    fn test_compound_with_contributions() {
        let input = CompoundInterestInput {
            principal: 1_000.0,
            annual_rate_pct: 12.0,
            years: 1.0,
            compounding: CompoundingFrequency::Monthly,
            contribution_per_period: 100.0,
            contribution_timing: ContributionTiming::End,
        };
        let result = calculate_compound_interest(&input).unwrap();
        assert!((result.principal_future_value - 1126.83).abs() < 0.01);
        assert!((result.contributions_future_value - 1268.25).abs() < 0.01);
        assert_eq!(result.total_contributed, 2_200.0);
        assert!((result.effective_annual_rate_pct - 12.6825).abs() < 1e-3);
    }

    #[test]
    fn test_compound_zero_rate() {
        let input = CompoundInterestInput {
            principal: 1_000.0,
            annual_rate_pct: 0.0,
            years: 2.0,
            compounding: CompoundingFrequency::Quarterly,
            contribution_per_period: 50.0,
            contribution_timing: ContributionTiming::Beginning,
        };
        let result = calculate_compound_interest(&input).unwrap();
        assert_eq!(result.future_value, 1_400.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_compound_needs_money() {
        let input = CompoundInterestInput {
            principal: 0.0,
            annual_rate_pct: 5.0,
            years: 2.0,
            compounding: CompoundingFrequency::Monthly,
            contribution_per_period: 0.0,
            contribution_timing: ContributionTiming::End,
        };
        assert!(calculate_compound_interest(&input).is_err());
    }

    #[test]
    fn test_compound_overflow_rejected() {
        let input = CompoundInterestInput {
            principal: 1e308,
            annual_rate_pct: 5.0,
            years: 20.0,
            compounding: CompoundingFrequency::Annually,
            contribution_per_period: 0.0,
            contribution_timing: ContributionTiming::End,
        };
        let err = calculate_compound_interest(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("principal"));
    }

    #[test]
    fn test_simple_interest_overflow_rejected() {
        let input = SimpleInterestInput {
            principal: 1e308,
            annual_rate_pct: 100.0,
            years: 10.0,
        };
        let err = calculate_simple_interest(&input).unwrap_err();
        assert_eq!(err.field(), Some("principal"));
    }

    #[test]
    fn test_simple_interest() {
        let input = SimpleInterestInput {
            principal: 10_000.0,
            annual_rate_pct: 5.0,
            years: 3.0,
        };
        let result = calculate_simple_interest(&input).unwrap();
        assert!((result.interest - 1_500.0).abs() < 1e-9);
        assert!((result.total_amount - 11_500.0).abs() < 1e-9);
    }

    #[test]
    fn test_retirement_projection() {
        let result = calculate_retirement(&retirement()).unwrap();
        assert_eq!(result.years_to_retirement, 35);
        assert_eq!(result.total_contributed, 50_000.0 + 500.0 * 420.0);
        assert!(result.total_at_retirement > result.total_contributed);
        assert!(
            (result.annual_retirement_income - result.total_at_retirement * 0.04).abs() < 1e-6
        );
    }

    #[test]
    fn test_retirement_inflation_adjustment_lowers_total() {
        let nominal = calculate_retirement(&retirement()).unwrap();
        let mut input = retirement();
        input.adjust_for_inflation = true;
        let real = calculate_retirement(&input).unwrap();
        assert!(real.total_at_retirement < nominal.total_at_retirement);
        assert!((real.effective_return_pct - 3.8835).abs() < 1e-3);
    }

    #[test]
    fn test_retirement_zero_return() {
        let mut input = retirement();
        input.annual_return_pct = 0.0;
        let result = calculate_retirement(&input).unwrap();
        assert_eq!(result.contributions_future_value, 500.0 * 420.0);
        assert_eq!(result.investment_growth, 0.0);
    }

    #[test]
    fn test_retirement_overflow_rejected() {
        let input = RetirementInput {
            current_savings: 1e308,
            ..retirement()
        };
        let err = calculate_retirement(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("current_savings"));
    }

    #[test]
    fn test_retirement_age_order() {
        let mut input = retirement();
        input.retirement_age = 30;
        let err = calculate_retirement(&input).unwrap_err();
        assert_eq!(err.field(), Some("retirement_age"));
    }

    #[test]
    fn test_investment_return() {
        let input = InvestmentReturnInput {
            initial_value: 10_000.0,
            final_value: 20_000.0,
            years: 10.0,
        };
        let result = calculate_investment_return(&input).unwrap();
        assert_eq!(result.gain, 10_000.0);
        assert_eq!(result.total_return_pct, 100.0);
        assert!((result.annualized_return_pct - 7.1773).abs() < 1e-3);
    }

    #[test]
    fn test_investment_return_total_loss() {
        let input = InvestmentReturnInput {
            initial_value: 10_000.0,
            final_value: 0.0,
            years: 2.0,
        };
        let result = calculate_investment_return(&input).unwrap();
        assert_eq!(result.total_return_pct, -100.0);
        assert_eq!(result.annualized_return_pct, -100.0);
    }

    #[test]
    fn test_retirement_defaults_withdrawal_rate() {
        let json = r#"{
            "current_age": 40,
            "retirement_age": 67,
            "current_savings": 100000.0,
            "monthly_contribution": 800.0,
            "annual_return_pct": 6.0
        }"#;
        let input: RetirementInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.withdrawal_rate_pct, 4.0);
        assert!(!input.adjust_for_inflation);
    }
}
