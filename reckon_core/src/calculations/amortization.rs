//! # Amortization Calculators
//!
//! Loan (EMI), mortgage, auto-loan and credit-card payoff calculators. All
//! four call the same payment formulas in [`crate::equations::amortization`].
//!
//! ## Example
//!
//! ```rust
//! use reckon_core::calculations::amortization::{LoanInput, PaymentFrequency, calculate_loan};
//!
//! let input = LoanInput {
//!     principal: 500_000.0,
//!     annual_rate_pct: 9.5,
//!     term_years: 5.0,
//!     frequency: PaymentFrequency::Monthly,
//! };
//!
//! let result = calculate_loan(&input).unwrap();
//! assert_eq!(result.number_of_payments, 60);
//! println!("EMI: {:.2}", result.periodic_payment);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::equations::{amortized_payment, payment_for_periods, periods_to_payoff, remaining_balance};
use crate::errors::CalcResult;
use crate::validation::{reject, require_finite_result, require_non_negative, require_positive, require_range};

/// Longest loan term accepted, in years
pub const MAX_TERM_YEARS: f64 = 50.0;

/// Down payment share below which a mortgage carries PMI
pub const PMI_DOWN_PAYMENT_THRESHOLD: f64 = 0.20;

/// Loan-to-value at which PMI is cancelled automatically
pub const PMI_CANCEL_LTV: f64 = 0.78;

/// How often payments are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentFrequency {
    Weekly,
    BiWeekly,
    SemiMonthly,
    #[default]
    Monthly,
    Quarterly,
    Annually,
}

impl PaymentFrequency {
    /// All frequencies in UI order
    pub const ALL: [PaymentFrequency; 6] = [
        PaymentFrequency::Monthly,
        PaymentFrequency::BiWeekly,
        PaymentFrequency::Weekly,
        PaymentFrequency::SemiMonthly,
        PaymentFrequency::Quarterly,
        PaymentFrequency::Annually,
    ];

    /// Payments per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Weekly => 52,
            PaymentFrequency::BiWeekly => 26,
            PaymentFrequency::SemiMonthly => 24,
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::Quarterly => 4,
            PaymentFrequency::Annually => 1,
        }
    }

    /// Form value / display label
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentFrequency::Weekly => "weekly",
            PaymentFrequency::BiWeekly => "biweekly",
            PaymentFrequency::SemiMonthly => "semimonthly",
            PaymentFrequency::Monthly => "monthly",
            PaymentFrequency::Quarterly => "quarterly",
            PaymentFrequency::Annually => "annually",
        }
    }
}

impl FromStr for PaymentFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase().replace(['-', '_', ' '], "");
        PaymentFrequency::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| format!("unknown payment frequency '{}'", s))
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whole payments in a term. Zero when the term is shorter than half a period.
fn payments_in_term(term_years: f64, periods_per_year: u32) -> u32 {
    (term_years * periods_per_year as f64).round() as u32
}

fn validate_term(term_years: f64, periods_per_year: u32) -> CalcResult<()> {
    require_positive("term_years", term_years)?;
    if term_years > MAX_TERM_YEARS {
        return Err(reject("term_years", term_years, "Term cannot exceed 50 years"));
    }
    if payments_in_term(term_years, periods_per_year) == 0 {
        return Err(reject("term_years", term_years, "Term is shorter than one payment period"));
    }
    Ok(())
}

fn validate_rate(field: &str, annual_rate_pct: f64) -> CalcResult<()> {
    require_range(field, annual_rate_pct, 0.0, 100.0)
}

// ============================================================================
// Loan / EMI
// ============================================================================

/// Input for a fixed-payment loan (EMI) calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "principal": 500000.0,
///   "annual_rate_pct": 9.5,
///   "term_years": 5.0,
///   "frequency": "Monthly"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed
    pub principal: f64,

    /// Nominal annual interest rate in percent (9.5 = 9.5%)
    pub annual_rate_pct: f64,

    /// Loan term in years (fractional years allowed, e.g. 2.5)
    pub term_years: f64,

    /// Payment frequency
    #[serde(default)]
    pub frequency: PaymentFrequency,
}

impl LoanInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("principal", self.principal)?;
        validate_rate("annual_rate_pct", self.annual_rate_pct)?;
        validate_term(self.term_years, self.frequency.periods_per_year())
    }

    /// Interest rate per payment period (decimal)
    pub fn rate_per_period(&self) -> f64 {
        self.annual_rate_pct / 100.0 / self.frequency.periods_per_year() as f64
    }

    /// Total number of payments, rounded to whole periods
    pub fn number_of_payments(&self) -> u32 {
        payments_in_term(self.term_years, self.frequency.periods_per_year())
    }
}

/// Results from a loan calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    /// Payment due each period (EMI when monthly)
    pub periodic_payment: f64,

    /// Number of payments over the term
    pub number_of_payments: u32,

    /// Sum of all payments
    pub total_payment: f64,

    /// Total payment minus principal
    pub total_interest: f64,

    /// Interest as a share of total payment, in percent
    pub interest_share_pct: f64,
}

/// Calculate the periodic payment and cost of a loan.
pub fn calculate_loan(input: &LoanInput) -> CalcResult<LoanResult> {
    input.validate()?;

    let r = input.rate_per_period();
    let n = input.number_of_payments();
    let payment = amortized_payment(input.principal, r, n as f64);
    let total_payment = payment * n as f64;
    let total_interest = total_payment - input.principal;
    require_finite_result("principal", input.principal, total_payment)?;

    Ok(LoanResult {
        periodic_payment: payment,
        number_of_payments: n,
        total_payment,
        total_interest,
        interest_share_pct: total_interest / total_payment * 100.0,
    })
}

/// One payment in an amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based payment number
    pub period: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    /// Balance after this payment
    pub balance: f64,
}

/// Totals for one loan year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    /// 1-based loan year
    pub year: u32,
    pub principal_paid: f64,
    pub interest_paid: f64,
    /// Balance at the end of the year
    pub ending_balance: f64,
}

/// Full payment-by-payment breakdown of a loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub rows: Vec<AmortizationRow>,
    pub yearly: Vec<YearSummary>,
}

/// Build the amortization schedule for a loan.
///
/// The last payment is adjusted to clear whatever floating-point drift is
/// left, so the final balance is exactly zero.
pub fn amortization_schedule(input: &LoanInput) -> CalcResult<AmortizationSchedule> {
    input.validate()?;

    let r = input.rate_per_period();
    let n = input.number_of_payments();
    let per_year = input.frequency.periods_per_year();
    let payment = amortized_payment(input.principal, r, n as f64);

    let mut rows = Vec::with_capacity(n as usize);
    let mut yearly: Vec<YearSummary> = Vec::new();
    let mut balance = input.principal;

    for period in 1..=n {
        let interest = balance * r;
        let (principal_part, this_payment) = if period == n {
            (balance, balance + interest)
        } else {
            (payment - interest, payment)
        };
        balance = (balance - principal_part).max(0.0);

        let year = (period - 1) / per_year + 1;
        match yearly.last_mut() {
            Some(summary) if summary.year == year => {
                summary.principal_paid += principal_part;
                summary.interest_paid += interest;
                summary.ending_balance = balance;
            }
            _ => yearly.push(YearSummary {
                year,
                principal_paid: principal_part,
                interest_paid: interest,
                ending_balance: balance,
            }),
        }

        rows.push(AmortizationRow {
            period,
            payment: this_payment,
            principal: principal_part,
            interest,
            balance,
        });
    }

    Ok(AmortizationSchedule { rows, yearly })
}

// ============================================================================
// Mortgage
// ============================================================================

/// Input for a mortgage calculation (monthly payments).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageInput {
    /// Purchase price of the home
    pub home_price: f64,

    /// Cash paid up front
    pub down_payment: f64,

    /// Nominal annual interest rate in percent
    pub annual_rate_pct: f64,

    /// Loan term in years (typically 15 or 30)
    pub term_years: f64,

    /// Annual property tax
    #[serde(default)]
    pub annual_property_tax: f64,

    /// Annual homeowner's insurance premium
    #[serde(default)]
    pub annual_insurance: f64,

    /// Monthly HOA dues
    #[serde(default)]
    pub monthly_hoa: f64,

    /// Annual PMI rate in percent of the loan amount, charged while the down
    /// payment is under 20%
    #[serde(default)]
    pub pmi_rate_pct: f64,
}

impl MortgageInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("home_price", self.home_price)?;
        require_non_negative("down_payment", self.down_payment)?;
        if self.down_payment >= self.home_price {
            return Err(reject(
                "down_payment",
                self.down_payment,
                "Down payment must be less than the home price",
            ));
        }
        validate_rate("annual_rate_pct", self.annual_rate_pct)?;
        validate_term(self.term_years, 12)?;
        require_non_negative("annual_property_tax", self.annual_property_tax)?;
        require_non_negative("annual_insurance", self.annual_insurance)?;
        require_non_negative("monthly_hoa", self.monthly_hoa)?;
        require_range("pmi_rate_pct", self.pmi_rate_pct, 0.0, 5.0)?;
        Ok(())
    }

    /// Amount borrowed
    pub fn loan_amount(&self) -> f64 {
        self.home_price - self.down_payment
    }

    /// Monthly payments over the term
    pub fn number_of_payments(&self) -> u32 {
        payments_in_term(self.term_years, 12)
    }

    /// Down payment as a fraction of the price
    pub fn down_payment_ratio(&self) -> f64 {
        self.down_payment / self.home_price
    }
}

/// Results from a mortgage calculation. Monthly figures unless noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageResult {
    pub loan_amount: f64,
    /// Initial loan-to-value in percent
    pub loan_to_value_pct: f64,
    pub principal_and_interest: f64,
    pub property_tax: f64,
    pub insurance: f64,
    pub hoa: f64,
    /// Initial monthly PMI (0 with 20% down)
    pub pmi: f64,
    /// Months until PMI drops off at 78% LTV
    pub pmi_months: u32,
    /// Payment in the first month, all components included
    pub total_monthly_payment: f64,
    pub number_of_payments: u32,
    /// Interest over the life of the loan
    pub total_interest: f64,
    /// Down payment plus every monthly component over the term
    pub total_cost: f64,
}

/// Calculate a mortgage payment including escrow items and PMI.
pub fn calculate_mortgage(input: &MortgageInput) -> CalcResult<MortgageResult> {
    input.validate()?;

    let loan = input.loan_amount();
    let r = input.annual_rate_pct / 100.0 / 12.0;
    let n = input.number_of_payments();
    let principal_and_interest = amortized_payment(loan, r, n as f64);

    let property_tax = input.annual_property_tax / 12.0;
    let insurance = input.annual_insurance / 12.0;

    let (pmi, pmi_months) = if input.down_payment_ratio() < PMI_DOWN_PAYMENT_THRESHOLD && input.pmi_rate_pct > 0.0 {
        let cancel_at = input.home_price * PMI_CANCEL_LTV;
        let months = (1..=n)
            .find(|k| remaining_balance(loan, r, principal_and_interest, *k as f64) <= cancel_at)
            .unwrap_or(n);
        (loan * input.pmi_rate_pct / 100.0 / 12.0, months)
    } else {
        (0.0, 0)
    };

    let total_monthly_payment = principal_and_interest + property_tax + insurance + input.monthly_hoa + pmi;
    let total_interest = principal_and_interest * n as f64 - loan;
    let total_cost = input.down_payment
        + (principal_and_interest + property_tax + insurance + input.monthly_hoa) * n as f64
        + pmi * pmi_months as f64;
    require_finite_result("home_price", input.home_price, total_cost)?;

    Ok(MortgageResult {
        loan_amount: loan,
        loan_to_value_pct: loan / input.home_price * 100.0,
        principal_and_interest,
        property_tax,
        insurance,
        hoa: input.monthly_hoa,
        pmi,
        pmi_months,
        total_monthly_payment,
        number_of_payments: n,
        total_interest,
        total_cost,
    })
}

// ============================================================================
// Auto Loan
// ============================================================================

/// Input for an auto-loan calculation (monthly payments).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoLoanInput {
    pub vehicle_price: f64,
    #[serde(default)]
    pub down_payment: f64,
    #[serde(default)]
    pub trade_in_value: f64,
    /// Sales tax in percent, charged on price minus trade-in
    #[serde(default)]
    pub sales_tax_pct: f64,
    /// Title, registration and dealer fees rolled into the loan
    #[serde(default)]
    pub fees: f64,
    pub annual_rate_pct: f64,
    pub term_months: u32,
}

impl AutoLoanInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("vehicle_price", self.vehicle_price)?;
        require_non_negative("down_payment", self.down_payment)?;
        require_non_negative("trade_in_value", self.trade_in_value)?;
        require_range("sales_tax_pct", self.sales_tax_pct, 0.0, 100.0)?;
        require_non_negative("fees", self.fees)?;
        validate_rate("annual_rate_pct", self.annual_rate_pct)?;
        if self.term_months == 0 || self.term_months as f64 > MAX_TERM_YEARS * 12.0 {
            return Err(reject("term_months", self.term_months as f64, "Term must be between 1 and 600 months"));
        }
        if self.amount_financed() <= 0.0 {
            return Err(reject(
                "down_payment",
                self.down_payment,
                "Down payment and trade-in cover the full price; nothing to finance",
            ));
        }
        Ok(())
    }

    /// Sales tax owed on the purchase
    pub fn sales_tax(&self) -> f64 {
        (self.vehicle_price - self.trade_in_value).max(0.0) * self.sales_tax_pct / 100.0
    }

    /// Price plus tax and fees, minus cash down and trade-in
    pub fn amount_financed(&self) -> f64 {
        self.vehicle_price + self.sales_tax() + self.fees - self.down_payment - self.trade_in_value
    }
}

/// Results from an auto-loan calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoLoanResult {
    pub sales_tax: f64,
    pub amount_financed: f64,
    pub monthly_payment: f64,
    pub total_loan_payments: f64,
    pub total_interest: f64,
    /// Down payment + trade-in + all loan payments
    pub total_cost: f64,
}

/// Calculate an auto-loan payment.
pub fn calculate_auto_loan(input: &AutoLoanInput) -> CalcResult<AutoLoanResult> {
    input.validate()?;

    let financed = input.amount_financed();
    let r = input.annual_rate_pct / 100.0 / 12.0;
    let n = input.term_months as f64;
    let monthly_payment = amortized_payment(financed, r, n);
    let total_loan_payments = monthly_payment * n;

    Ok(AutoLoanResult {
        sales_tax: input.sales_tax(),
        amount_financed: financed,
        monthly_payment,
        total_loan_payments,
        total_interest: total_loan_payments - financed,
        total_cost: input.down_payment + input.trade_in_value + total_loan_payments,
    })
}

// ============================================================================
// Credit Card Payoff
// ============================================================================

/// What the payoff calculator solves for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum PayoffStrategy {
    /// Pay a fixed amount each month; solve for months
    FixedPayment { monthly_payment: f64 },
    /// Clear the balance in a given number of months; solve for payment
    TargetMonths { months: u32 },
}

/// Input for a credit-card payoff calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "balance": 5000.0,
///   "apr_pct": 18.0,
///   "strategy": { "mode": "FixedPayment", "monthly_payment": 200.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCardInput {
    pub balance: f64,
    /// Annual percentage rate in percent
    pub apr_pct: f64,
    pub strategy: PayoffStrategy,
}

impl CreditCardInput {
    /// Monthly periodic rate (decimal)
    pub fn monthly_rate(&self) -> f64 {
        self.apr_pct / 100.0 / 12.0
    }

    /// Validate input parameters, including whether the payment can ever
    /// clear the balance.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("balance", self.balance)?;
        validate_rate("apr_pct", self.apr_pct)?;
        match self.strategy {
            PayoffStrategy::FixedPayment { monthly_payment } => {
                require_positive("monthly_payment", monthly_payment)?;
                if self.apr_pct > 0.0 && monthly_payment <= self.balance * self.monthly_rate() {
                    return Err(reject(
                        "monthly_payment",
                        monthly_payment,
                        format!(
                            "Payment too low: it must exceed the monthly interest of {:.2} or the balance is never paid off",
                            self.balance * self.monthly_rate()
                        ),
                    ));
                }
            }
            PayoffStrategy::TargetMonths { months } => {
                if months == 0 || months > 600 {
                    return Err(reject("months", months as f64, "Months must be between 1 and 600"));
                }
            }
        }
        Ok(())
    }
}

/// Results from a credit-card payoff calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCardResult {
    /// Fractional months from the closed-form solution
    pub months_exact: f64,
    /// Whole months of payments
    pub months: u32,
    pub monthly_payment: f64,
    /// The last, usually smaller, payment
    pub final_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
}

/// Calculate how long a card takes to pay off, or what payment clears it in
/// a target number of months.
pub fn calculate_credit_card(input: &CreditCardInput) -> CalcResult<CreditCardResult> {
    input.validate()?;

    let r = input.monthly_rate();
    let balance = input.balance;

    match input.strategy {
        PayoffStrategy::FixedPayment { monthly_payment } => {
            let months_exact = periods_to_payoff(balance, r, monthly_payment).ok_or_else(|| {
                reject("monthly_payment", monthly_payment, "Payment too low to pay off the balance")
            })?;
            // Tolerance keeps an exact whole-month payoff from rounding up.
            let months = (months_exact - 1e-9).ceil().max(1.0) as u32;
            let before_last = remaining_balance(balance, r, monthly_payment, (months - 1) as f64).max(0.0);
            let final_payment = before_last * (1.0 + r);
            let total_paid = monthly_payment * (months - 1) as f64 + final_payment;

            Ok(CreditCardResult {
                months_exact,
                months,
                monthly_payment,
                final_payment,
                total_paid,
                total_interest: total_paid - balance,
            })
        }
        PayoffStrategy::TargetMonths { months } => {
            let payment = payment_for_periods(balance, r, months as f64);
            let total_paid = payment * months as f64;
            Ok(CreditCardResult {
                months_exact: months as f64,
                months,
                monthly_payment: payment,
                final_payment: payment,
                total_paid,
                total_interest: total_paid - balance,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emi_input() -> LoanInput {
        LoanInput {
            principal: 500_000.0,
            annual_rate_pct: 9.5,
            term_years: 5.0,
            frequency: PaymentFrequency::Monthly,
        }
    }

    #[test]
    fn test_emi_scenario() {
        let result = calculate_loan(&emi_input()).unwrap();
        // P·r(1+r)^n/((1+r)^n − 1) with r = 0.095/12, n = 60
        assert_eq!(result.number_of_payments, 60);
        assert!((result.periodic_payment - 10500.93).abs() < 0.01);
        assert!((result.total_interest - 130055.84).abs() < 0.01);
        assert!((result.total_payment - (500_000.0 + result.total_interest)).abs() < 1e-6);
    }

    #[test]
    fn test_zero_rate_loan() {
        let mut input = emi_input();
        input.annual_rate_pct = 0.0;
        let result = calculate_loan(&input).unwrap();
        assert_eq!(result.periodic_payment, 500_000.0 / 60.0);
        assert!(result.total_interest.abs() < 1e-6);
    }

    #[test]
    fn test_loan_frequency() {
        let mut input = emi_input();
        input.frequency = PaymentFrequency::BiWeekly;
        let result = calculate_loan(&input).unwrap();
        assert_eq!(result.number_of_payments, 130);
    }

    #[test]
    fn test_loan_overflow_rejected() {
        let input = LoanInput {
            principal: 1e308,
            annual_rate_pct: 10.0,
            term_years: 30.0,
            frequency: PaymentFrequency::Monthly,
        };
        let err = calculate_loan(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("principal"));
    }

    #[test]
    fn test_loan_rejects_bad_input() {
        let mut input = emi_input();
        input.principal = 0.0;
        assert!(calculate_loan(&input).is_err());

        let mut input = emi_input();
        input.annual_rate_pct = f64::NAN;
        assert!(calculate_loan(&input).is_err());

        let mut input = emi_input();
        input.term_years = 0.01;
        let err = calculate_loan(&input).unwrap_err();
        assert_eq!(err.field(), Some("term_years"));
    }

    #[test]
    fn test_schedule_pays_off() {
        let schedule = amortization_schedule(&emi_input()).unwrap();
        assert_eq!(schedule.rows.len(), 60);
        assert_eq!(schedule.yearly.len(), 5);

        let last = schedule.rows.last().unwrap();
        assert_eq!(last.balance, 0.0);

        let principal: f64 = schedule.rows.iter().map(|r| r.principal).sum();
        assert!((principal - 500_000.0).abs() < 1e-6);

        // interest share shrinks over time
        assert!(schedule.rows[0].interest > schedule.rows[59].interest);
        assert!(schedule.yearly[0].interest_paid > schedule.yearly[4].interest_paid);
    }

    #[test]
    fn test_mortgage_with_pmi() {
        let input = MortgageInput {
            home_price: 400_000.0,
            down_payment: 40_000.0,
            annual_rate_pct: 6.0,
            term_years: 30.0,
            annual_property_tax: 4_800.0,
            annual_insurance: 1_200.0,
            monthly_hoa: 50.0,
            pmi_rate_pct: 0.5,
        };
        let result = calculate_mortgage(&input).unwrap();
        assert_eq!(result.loan_amount, 360_000.0);
        assert!((result.principal_and_interest - 2158.38).abs() < 0.01);
        assert!((result.pmi - 150.0).abs() < 1e-9);
        assert!(result.pmi_months > 0 && result.pmi_months < 360);
        assert!((result.property_tax - 400.0).abs() < 1e-9);
        assert!((result.total_monthly_payment - (2158.38 + 400.0 + 100.0 + 50.0 + 150.0)).abs() < 0.01);
    }

    #[test]
    fn test_mortgage_no_pmi_with_twenty_percent_down() {
        let input = MortgageInput {
            home_price: 300_000.0,
            down_payment: 60_000.0,
            annual_rate_pct: 7.0,
            term_years: 15.0,
            annual_property_tax: 0.0,
            annual_insurance: 0.0,
            monthly_hoa: 0.0,
            pmi_rate_pct: 1.0,
        };
        let result = calculate_mortgage(&input).unwrap();
        assert_eq!(result.pmi, 0.0);
        assert_eq!(result.pmi_months, 0);
        assert!((result.loan_to_value_pct - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_mortgage_rejects_full_down_payment() {
        let input = MortgageInput {
            home_price: 300_000.0,
            down_payment: 300_000.0,
            annual_rate_pct: 7.0,
            term_years: 30.0,
            annual_property_tax: 0.0,
            annual_insurance: 0.0,
            monthly_hoa: 0.0,
            pmi_rate_pct: 0.0,
        };
        let err = calculate_mortgage(&input).unwrap_err();
        assert_eq!(err.field(), Some("down_payment"));
    }

    #[test]
    fn test_mortgage_rejects_term_under_one_payment() {
        let input = MortgageInput {
            home_price: 400_000.0,
            down_payment: 40_000.0,
            annual_rate_pct: 6.0,
            term_years: 0.01,
            annual_property_tax: 0.0,
            annual_insurance: 0.0,
            monthly_hoa: 0.0,
            pmi_rate_pct: 0.0,
        };
        let err = calculate_mortgage(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("term_years"));
    }

    #[test]
    fn test_auto_loan() {
        let input = AutoLoanInput {
            vehicle_price: 30_000.0,
            down_payment: 3_000.0,
            trade_in_value: 5_000.0,
            sales_tax_pct: 7.0,
            fees: 500.0,
            annual_rate_pct: 5.0,
            term_months: 60,
        };
        let result = calculate_auto_loan(&input).unwrap();
        assert!((result.sales_tax - 1_750.0).abs() < 1e-9);
        assert!((result.amount_financed - 24_250.0).abs() < 1e-9);
        assert!((result.monthly_payment - 457.63).abs() < 0.01);
        assert!(result.total_interest > 0.0);
    }

    #[test]
    fn test_auto_loan_nothing_to_finance() {
        let input = AutoLoanInput {
            vehicle_price: 10_000.0,
            down_payment: 10_000.0,
            trade_in_value: 2_000.0,
            sales_tax_pct: 0.0,
            fees: 0.0,
            annual_rate_pct: 5.0,
            term_months: 36,
        };
        assert!(calculate_auto_loan(&input).is_err());
    }

    #[test]
    fn test_credit_card_payment_too_low() {
        // interest on 5000 at 18% is 75/month
        for payment in [50.0, 75.0] {
            let input = CreditCardInput {
                balance: 5_000.0,
                apr_pct: 18.0,
                strategy: PayoffStrategy::FixedPayment { monthly_payment: payment },
            };
            let err = calculate_credit_card(&input).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
            assert_eq!(err.field(), Some("monthly_payment"));
        }
    }

    #[test]
    fn test_credit_card_fixed_payment() {
        let input = CreditCardInput {
            balance: 5_000.0,
            apr_pct: 18.0,
            strategy: PayoffStrategy::FixedPayment { monthly_payment: 200.0 },
        };
        let result = calculate_credit_card(&input).unwrap();
        assert!((result.months_exact - 31.57).abs() < 0.01);
        assert_eq!(result.months, 32);
        assert!(result.final_payment > 0.0 && result.final_payment <= 200.0);
        assert!((result.total_interest - (result.total_paid - 5_000.0)).abs() < 1e-9);
    }

    #[test]
    fn test_credit_card_target_months_round_trip() {
        let target = CreditCardInput {
            balance: 5_000.0,
            apr_pct: 18.0,
            strategy: PayoffStrategy::TargetMonths { months: 24 },
        };
        let by_target = calculate_credit_card(&target).unwrap();
        assert!((by_target.monthly_payment - 249.62).abs() < 0.01);

        let fixed = CreditCardInput {
            strategy: PayoffStrategy::FixedPayment { monthly_payment: by_target.monthly_payment },
            ..target
        };
        let by_payment = calculate_credit_card(&fixed).unwrap();
        assert_eq!(by_payment.months, 24);
    }

    #[test]
    fn test_payment_frequency_from_str() {
        assert_eq!("Bi-Weekly".parse::<PaymentFrequency>().unwrap(), PaymentFrequency::BiWeekly);
        assert_eq!("monthly".parse::<PaymentFrequency>().unwrap(), PaymentFrequency::Monthly);
        assert!("fortnightly-ish".parse::<PaymentFrequency>().is_err());
    }

    #[test]
    fn test_serialization() {
        let input = CreditCardInput {
            balance: 5_000.0,
            apr_pct: 18.0,
            strategy: PayoffStrategy::FixedPayment { monthly_payment: 200.0 },
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"mode\":\"FixedPayment\""));
        let roundtrip: CreditCardInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
