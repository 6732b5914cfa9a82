//! # Calculations
//!
//! One sub-module per domain. Each calculator follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate*(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Every calculation validates first and returns `CalcError::InvalidInput`
//! instead of a NaN or infinite result.
//!
//! ## Available Calculations
//!
//! - [`amortization`] - Loan/EMI, schedule, mortgage, auto loan, credit-card payoff
//! - [`growth`] - Compound and simple interest, retirement, investment return
//! - [`ratio`] - Percentages, break-even, markup/margin, discounts
//! - [`body`] - BMI, body fat, calories, heart-rate zones, waist-hip ratio
//! - [`construction`] - Concrete, paint, tile
//! - [`utility`] - Electricity, water, appliance energy, lightbulbs, bill split
//! - [`age`] - Exact age between two dates
//!
//! ## Dispatch
//!
//! [`CalculationItem`] wraps any input record and [`calculate`] runs it:
//!
//! ```rust
//! use reckon_core::calculations::{calculate, CalculationItem, CalculationOutput};
//!
//! let item: CalculationItem = serde_json::from_str(
//!     r#"{"type":"BreakEven","fixed_costs":50000,"price_per_unit":100,"variable_cost_per_unit":60}"#,
//! ).unwrap();
//!
//! match calculate(&item).unwrap() {
//!     CalculationOutput::BreakEven(r) => assert_eq!(r.break_even_units, 1250.0),
//!     other => panic!("unexpected output {:?}", other),
//! }
//! ```

pub mod age;
pub mod amortization;
pub mod body;
pub mod construction;
pub mod growth;
pub mod ratio;
pub mod utility;

use serde::{Deserialize, Serialize};

use crate::catalog::CalculatorId;
use crate::errors::CalcResult;

// Re-export commonly used types
pub use age::{AgeInput, AgeResult};
pub use amortization::{
    AmortizationSchedule, AutoLoanInput, AutoLoanResult, CreditCardInput, CreditCardResult, LoanInput, LoanResult,
    MortgageInput, MortgageResult, PaymentFrequency, PayoffStrategy,
};
pub use body::{
    BmiInput, BmiResult, BodyFatResult, CalorieInput, CalorieResult, Gender, HeartRateInput, HeartRateResult,
    NavyBodyFatInput, SkinfoldInput, WaistHipInput, WaistHipResult,
};
pub use construction::{ConcreteInput, ConcreteResult, ConcreteShape, PaintInput, PaintResult, TileInput, TileResult};
pub use growth::{
    CompoundInterestInput, CompoundInterestResult, CompoundingFrequency, InvestmentReturnInput,
    InvestmentReturnResult, RetirementInput, RetirementResult, SimpleInterestInput, SimpleInterestResult,
};
pub use ratio::{
    BreakEvenInput, BreakEvenResult, DiscountInput, DiscountResult, MarkupMarginInput, MarkupMarginResult,
    PercentageInput, PercentageResult,
};
pub use utility::{
    ApplianceInput, ApplianceResult, BillSplitInput, BillSplitResult, ElectricityInput, ElectricityResult,
    LightbulbInput, LightbulbResult, WaterInput, WaterResult,
};

/// Enum wrapper for all calculation inputs.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    // Amortization
    Loan(LoanInput),
    AmortizationSchedule(LoanInput),
    Mortgage(MortgageInput),
    AutoLoan(AutoLoanInput),
    CreditCard(CreditCardInput),
    // Growth
    CompoundInterest(CompoundInterestInput),
    SimpleInterest(SimpleInterestInput),
    Retirement(RetirementInput),
    InvestmentReturn(InvestmentReturnInput),
    // Ratio
    Percentage(PercentageInput),
    BreakEven(BreakEvenInput),
    MarkupMargin(MarkupMarginInput),
    Discount(DiscountInput),
    // Body
    Bmi(BmiInput),
    NavyBodyFat(NavyBodyFatInput),
    SkinfoldBodyFat(SkinfoldInput),
    Calories(CalorieInput),
    HeartRate(HeartRateInput),
    WaistHip(WaistHipInput),
    // Construction
    Concrete(ConcreteInput),
    Paint(PaintInput),
    Tile(TileInput),
    // Utility
    Electricity(ElectricityInput),
    Water(WaterInput),
    Appliance(ApplianceInput),
    Lightbulb(LightbulbInput),
    BillSplit(BillSplitInput),
    // Date
    Age(AgeInput),
}

/// Tagged result variants, one per calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Loan(LoanResult),
    AmortizationSchedule(AmortizationSchedule),
    Mortgage(MortgageResult),
    AutoLoan(AutoLoanResult),
    CreditCard(CreditCardResult),
    CompoundInterest(CompoundInterestResult),
    SimpleInterest(SimpleInterestResult),
    Retirement(RetirementResult),
    InvestmentReturn(InvestmentReturnResult),
    Percentage(PercentageResult),
    BreakEven(BreakEvenResult),
    MarkupMargin(MarkupMarginResult),
    Discount(DiscountResult),
    Bmi(BmiResult),
    NavyBodyFat(BodyFatResult),
    SkinfoldBodyFat(BodyFatResult),
    Calories(CalorieResult),
    HeartRate(HeartRateResult),
    WaistHip(WaistHipResult),
    Concrete(ConcreteResult),
    Paint(PaintResult),
    Tile(TileResult),
    Electricity(ElectricityResult),
    Water(WaterResult),
    Appliance(ApplianceResult),
    Lightbulb(LightbulbResult),
    BillSplit(BillSplitResult),
    Age(AgeResult),
}

impl CalculationItem {
    /// Catalog entry for this input
    pub fn calculator_id(&self) -> CalculatorId {
        match self {
            CalculationItem::Loan(_) => CalculatorId::Loan,
            CalculationItem::AmortizationSchedule(_) => CalculatorId::AmortizationSchedule,
            CalculationItem::Mortgage(_) => CalculatorId::Mortgage,
            CalculationItem::AutoLoan(_) => CalculatorId::AutoLoan,
            CalculationItem::CreditCard(_) => CalculatorId::CreditCardPayoff,
            CalculationItem::CompoundInterest(_) => CalculatorId::CompoundInterest,
            CalculationItem::SimpleInterest(_) => CalculatorId::SimpleInterest,
            CalculationItem::Retirement(_) => CalculatorId::Retirement,
            CalculationItem::InvestmentReturn(_) => CalculatorId::InvestmentReturn,
            CalculationItem::Percentage(_) => CalculatorId::Percentage,
            CalculationItem::BreakEven(_) => CalculatorId::BreakEven,
            CalculationItem::MarkupMargin(_) => CalculatorId::MarkupMargin,
            CalculationItem::Discount(_) => CalculatorId::Discount,
            CalculationItem::Bmi(_) => CalculatorId::Bmi,
            CalculationItem::NavyBodyFat(_) => CalculatorId::NavyBodyFat,
            CalculationItem::SkinfoldBodyFat(_) => CalculatorId::SkinfoldBodyFat,
            CalculationItem::Calories(_) => CalculatorId::Calories,
            CalculationItem::HeartRate(_) => CalculatorId::HeartRateZones,
            CalculationItem::WaistHip(_) => CalculatorId::WaistHip,
            CalculationItem::Concrete(_) => CalculatorId::Concrete,
            CalculationItem::Paint(_) => CalculatorId::Paint,
            CalculationItem::Tile(_) => CalculatorId::Tile,
            CalculationItem::Electricity(_) => CalculatorId::ElectricityBill,
            CalculationItem::Water(_) => CalculatorId::WaterBill,
            CalculationItem::Appliance(_) => CalculatorId::ApplianceEnergy,
            CalculationItem::Lightbulb(_) => CalculatorId::LightbulbSavings,
            CalculationItem::BillSplit(_) => CalculatorId::BillSplit,
            CalculationItem::Age(_) => CalculatorId::Age,
        }
    }

    /// Get the calculation type as a string (the serde tag)
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Loan(_) => "Loan",
            CalculationItem::AmortizationSchedule(_) => "AmortizationSchedule",
            CalculationItem::Mortgage(_) => "Mortgage",
            CalculationItem::AutoLoan(_) => "AutoLoan",
            CalculationItem::CreditCard(_) => "CreditCard",
            CalculationItem::CompoundInterest(_) => "CompoundInterest",
            CalculationItem::SimpleInterest(_) => "SimpleInterest",
            CalculationItem::Retirement(_) => "Retirement",
            CalculationItem::InvestmentReturn(_) => "InvestmentReturn",
            CalculationItem::Percentage(_) => "Percentage",
            CalculationItem::BreakEven(_) => "BreakEven",
            CalculationItem::MarkupMargin(_) => "MarkupMargin",
            CalculationItem::Discount(_) => "Discount",
            CalculationItem::Bmi(_) => "Bmi",
            CalculationItem::NavyBodyFat(_) => "NavyBodyFat",
            CalculationItem::SkinfoldBodyFat(_) => "SkinfoldBodyFat",
            CalculationItem::Calories(_) => "Calories",
            CalculationItem::HeartRate(_) => "HeartRate",
            CalculationItem::WaistHip(_) => "WaistHip",
            CalculationItem::Concrete(_) => "Concrete",
            CalculationItem::Paint(_) => "Paint",
            CalculationItem::Tile(_) => "Tile",
            CalculationItem::Electricity(_) => "Electricity",
            CalculationItem::Water(_) => "Water",
            CalculationItem::Appliance(_) => "Appliance",
            CalculationItem::Lightbulb(_) => "Lightbulb",
            CalculationItem::BillSplit(_) => "BillSplit",
            CalculationItem::Age(_) => "Age",
        }
    }
}

/// Run any calculation.
pub fn calculate(item: &CalculationItem) -> CalcResult<CalculationOutput> {
    tracing::debug!(calc_type = item.calc_type(), "dispatching calculation");

    let output = match item {
        CalculationItem::Loan(i) => CalculationOutput::Loan(amortization::calculate_loan(i)?),
        CalculationItem::AmortizationSchedule(i) => {
            CalculationOutput::AmortizationSchedule(amortization::amortization_schedule(i)?)
        }
        CalculationItem::Mortgage(i) => CalculationOutput::Mortgage(amortization::calculate_mortgage(i)?),
        CalculationItem::AutoLoan(i) => CalculationOutput::AutoLoan(amortization::calculate_auto_loan(i)?),
        CalculationItem::CreditCard(i) => CalculationOutput::CreditCard(amortization::calculate_credit_card(i)?),
        CalculationItem::CompoundInterest(i) => {
            CalculationOutput::CompoundInterest(growth::calculate_compound_interest(i)?)
        }
        CalculationItem::SimpleInterest(i) => CalculationOutput::SimpleInterest(growth::calculate_simple_interest(i)?),
        CalculationItem::Retirement(i) => CalculationOutput::Retirement(growth::calculate_retirement(i)?),
        CalculationItem::InvestmentReturn(i) => {
            CalculationOutput::InvestmentReturn(growth::calculate_investment_return(i)?)
        }
        CalculationItem::Percentage(i) => CalculationOutput::Percentage(ratio::calculate_percentage(i)?),
        CalculationItem::BreakEven(i) => CalculationOutput::BreakEven(ratio::calculate_break_even(i)?),
        CalculationItem::MarkupMargin(i) => CalculationOutput::MarkupMargin(ratio::calculate_markup_margin(i)?),
        CalculationItem::Discount(i) => CalculationOutput::Discount(ratio::calculate_discount(i)?),
        CalculationItem::Bmi(i) => CalculationOutput::Bmi(body::bmi::calculate(i)?),
        CalculationItem::NavyBodyFat(i) => CalculationOutput::NavyBodyFat(body::body_fat::calculate_navy(i)?),
        CalculationItem::SkinfoldBodyFat(i) => {
            CalculationOutput::SkinfoldBodyFat(body::body_fat::calculate_skinfold(i)?)
        }
        CalculationItem::Calories(i) => CalculationOutput::Calories(body::calories::calculate(i)?),
        CalculationItem::HeartRate(i) => CalculationOutput::HeartRate(body::heart_rate::calculate(i)?),
        CalculationItem::WaistHip(i) => CalculationOutput::WaistHip(body::waist_hip::calculate(i)?),
        CalculationItem::Concrete(i) => CalculationOutput::Concrete(construction::calculate_concrete(i)?),
        CalculationItem::Paint(i) => CalculationOutput::Paint(construction::calculate_paint(i)?),
        CalculationItem::Tile(i) => CalculationOutput::Tile(construction::calculate_tile(i)?),
        CalculationItem::Electricity(i) => CalculationOutput::Electricity(utility::calculate_electricity(i)?),
        CalculationItem::Water(i) => CalculationOutput::Water(utility::calculate_water(i)?),
        CalculationItem::Appliance(i) => CalculationOutput::Appliance(utility::calculate_appliance(i)?),
        CalculationItem::Lightbulb(i) => CalculationOutput::Lightbulb(utility::calculate_lightbulb(i)?),
        CalculationItem::BillSplit(i) => CalculationOutput::BillSplit(utility::calculate_bill_split(i)?),
        CalculationItem::Age(i) => CalculationOutput::Age(age::calculate(i)?),
    };

    Ok(output)
}
