//! # Ratio and Percentage Calculators
//!
//! Percentage arithmetic, break-even analysis, markup versus margin and the
//! three-way discount solver. Direction matters everywhere here: markup is
//! profit over cost, margin is profit over selling price, and the two are
//! never interchangeable.
//!
//! ## Example
//!
//! ```rust
//! use reckon_core::calculations::ratio::{BreakEvenInput, calculate_break_even};
//!
//! let input = BreakEvenInput {
//!     fixed_costs: 50_000.0,
//!     price_per_unit: 100.0,
//!     variable_cost_per_unit: 60.0,
//!     target_profit: None,
//! };
//! let result = calculate_break_even(&input).unwrap();
//! assert_eq!(result.break_even_units, 1250.0);
//! assert_eq!(result.break_even_revenue, 125_000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{apply_change, margin_percent, markup_percent, percent_change, percent_of, what_percent};
use crate::errors::CalcResult;
use crate::validation::{
    reject, require_finite, require_finite_result, require_non_negative, require_percent_below_100, require_positive,
};

// ============================================================================
// Percentage
// ============================================================================

/// The percentage question being asked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum PercentageInput {
    /// What is `percent`% of `value`?
    PercentOf { value: f64, percent: f64 },
    /// `part` is what percent of `whole`?
    WhatPercent { part: f64, whole: f64 },
    /// `value` increased by `percent`%
    Increase { value: f64, percent: f64 },
    /// `value` decreased by `percent`%
    Decrease { value: f64, percent: f64 },
    /// Percent change going from `old` to `new`
    PercentChange { old: f64, new: f64 },
}

impl PercentageInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        match *self {
            PercentageInput::PercentOf { value, percent } => {
                require_finite("value", value)?;
                require_finite("percent", percent)?;
            }
            PercentageInput::WhatPercent { part, whole } => {
                require_finite("part", part)?;
                require_finite("whole", whole)?;
                if whole == 0.0 {
                    return Err(reject("whole", whole, "Cannot take a percentage of zero"));
                }
            }
            PercentageInput::Increase { value, percent } => {
                require_finite("value", value)?;
                require_non_negative("percent", percent)?;
            }
            PercentageInput::Decrease { value, percent } => {
                require_finite("value", value)?;
                require_non_negative("percent", percent)?;
                if percent > 100.0 {
                    return Err(reject("percent", percent, "A decrease cannot exceed 100%"));
                }
            }
            PercentageInput::PercentChange { old, new } => {
                require_finite("old", old)?;
                require_finite("new", new)?;
                if old == 0.0 {
                    return Err(reject("old", old, "Percent change from zero is undefined"));
                }
            }
        }
        Ok(())
    }

    /// The amount being scaled or compared, reported when the answer overflows
    fn subject(&self) -> (&'static str, f64) {
        match *self {
            PercentageInput::PercentOf { value, .. }
            | PercentageInput::Increase { value, .. }
            | PercentageInput::Decrease { value, .. } => ("value", value),
            PercentageInput::WhatPercent { part, .. } => ("part", part),
            PercentageInput::PercentChange { new, .. } => ("new", new),
        }
    }
}

/// Result of a percentage calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentageResult {
    /// The answer (an amount, or a percent for WhatPercent / PercentChange)
    pub result: f64,
    /// Signed amount of change for Increase / Decrease / PercentChange
    pub difference: Option<f64>,
}

/// Answer a percentage question.
pub fn calculate_percentage(input: &PercentageInput) -> CalcResult<PercentageResult> {
    input.validate()?;
    let result = match *input {
        PercentageInput::PercentOf { value, percent } => PercentageResult {
            result: percent_of(value, percent),
            difference: None,
        },
        PercentageInput::WhatPercent { part, whole } => PercentageResult {
            result: what_percent(part, whole),
            difference: None,
        },
        PercentageInput::Increase { value, percent } => {
            let changed = apply_change(value, percent, true);
            PercentageResult {
                result: changed,
                difference: Some(changed - value),
            }
        }
        PercentageInput::Decrease { value, percent } => {
            let changed = apply_change(value, percent, false);
            PercentageResult {
                result: changed,
                difference: Some(changed - value),
            }
        }
        PercentageInput::PercentChange { old, new } => PercentageResult {
            result: percent_change(old, new),
            difference: Some(new - old),
        },
    };

    let (field, value) = input.subject();
    require_finite_result(field, value, result.result)?;
    if let Some(difference) = result.difference {
        require_finite_result(field, value, difference)?;
    }
    Ok(result)
}

// ============================================================================
// Break-Even
// ============================================================================

/// Input for a break-even analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenInput {
    pub fixed_costs: f64,
    pub price_per_unit: f64,
    pub variable_cost_per_unit: f64,
    /// Profit to reach on top of break-even, if any
    #[serde(default)]
    pub target_profit: Option<f64>,
}

impl BreakEvenInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("fixed_costs", self.fixed_costs)?;
        require_positive("price_per_unit", self.price_per_unit)?;
        require_non_negative("variable_cost_per_unit", self.variable_cost_per_unit)?;
        if self.price_per_unit <= self.variable_cost_per_unit {
            return Err(reject(
                "price_per_unit",
                self.price_per_unit,
                "Price per unit must be greater than variable cost per unit",
            ));
        }
        if let Some(profit) = self.target_profit {
            require_non_negative("target_profit", profit)?;
        }
        Ok(())
    }

    /// Price minus variable cost
    pub fn contribution_margin(&self) -> f64 {
        self.price_per_unit - self.variable_cost_per_unit
    }
}

/// Results from a break-even analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenResult {
    pub contribution_margin: f64,
    /// Contribution margin over price, in percent
    pub contribution_margin_ratio_pct: f64,
    /// Units to sell to cover fixed costs (fractional)
    pub break_even_units: f64,
    pub break_even_revenue: f64,
    /// Units to reach the target profit, when one was given
    pub target_units: Option<f64>,
    pub target_revenue: Option<f64>,
}

/// Calculate break-even units and revenue.
pub fn calculate_break_even(input: &BreakEvenInput) -> CalcResult<BreakEvenResult> {
    input.validate()?;

    let cm = input.contribution_margin();
    let units = input.fixed_costs / cm;
    let target_units = input.target_profit.map(|p| (input.fixed_costs + p) / cm);

    require_finite_result("fixed_costs", input.fixed_costs, units * input.price_per_unit)?;
    if let (Some(profit), Some(u)) = (input.target_profit, target_units) {
        require_finite_result("target_profit", profit, u * input.price_per_unit)?;
    }

    Ok(BreakEvenResult {
        contribution_margin: cm,
        contribution_margin_ratio_pct: cm / input.price_per_unit * 100.0,
        break_even_units: units,
        break_even_revenue: units * input.price_per_unit,
        target_units,
        target_revenue: target_units.map(|u| u * input.price_per_unit),
    })
}

// ============================================================================
// Markup and Margin
// ============================================================================

/// Input for a markup/margin calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkupMarginInput {
    pub cost: f64,
    pub selling_price: f64,
}

impl MarkupMarginInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("cost", self.cost)?;
        require_positive("selling_price", self.selling_price)?;
        Ok(())
    }
}

/// Results from a markup/margin calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkupMarginResult {
    pub profit: f64,
    /// Profit over cost, in percent
    pub markup_pct: f64,
    /// Profit over selling price, in percent
    pub margin_pct: f64,
}

/// Calculate profit, markup and margin.
pub fn calculate_markup_margin(input: &MarkupMarginInput) -> CalcResult<MarkupMarginResult> {
    input.validate()?;
    Ok(MarkupMarginResult {
        profit: input.selling_price - input.cost,
        markup_pct: markup_percent(input.cost, input.selling_price),
        margin_pct: margin_percent(input.cost, input.selling_price),
    })
}

/// Selling price that achieves `markup_pct` on `cost`.
pub fn price_from_markup(cost: f64, markup_pct: f64) -> CalcResult<f64> {
    require_positive("cost", cost)?;
    require_non_negative("markup_pct", markup_pct)?;
    Ok(cost * (1.0 + markup_pct / 100.0))
}

/// Selling price that achieves `margin_pct` on the price itself.
///
/// A margin of 100% or more would need an infinite price and is rejected.
pub fn price_from_margin(cost: f64, margin_pct: f64) -> CalcResult<f64> {
    require_positive("cost", cost)?;
    require_percent_below_100("margin_pct", margin_pct)?;
    Ok(cost / (1.0 - margin_pct / 100.0))
}

// ============================================================================
// Discount
// ============================================================================

/// The unknown the discount calculator solves for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "solve_for")]
pub enum DiscountInput {
    /// final = original × (1 − d)
    FinalPrice { original_price: f64, discount_pct: f64 },
    /// original = final / (1 − d)
    OriginalPrice { final_price: f64, discount_pct: f64 },
    /// d = (original − final)/original × 100
    DiscountPercent { original_price: f64, final_price: f64 },
}

impl DiscountInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        match *self {
            DiscountInput::FinalPrice { original_price, discount_pct } => {
                require_non_negative("original_price", original_price)?;
                require_non_negative("discount_pct", discount_pct)?;
                if discount_pct > 100.0 {
                    return Err(reject("discount_pct", discount_pct, "Discount cannot exceed 100%"));
                }
            }
            DiscountInput::OriginalPrice { final_price, discount_pct } => {
                require_non_negative("final_price", final_price)?;
                require_percent_below_100("discount_pct", discount_pct)?;
            }
            DiscountInput::DiscountPercent { original_price, final_price } => {
                require_positive("original_price", original_price)?;
                require_non_negative("final_price", final_price)?;
                if final_price > original_price {
                    return Err(reject(
                        "final_price",
                        final_price,
                        "Discounted price cannot be greater than the original price",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// All three quantities once the unknown is solved, plus the amount saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountResult {
    pub original_price: f64,
    pub final_price: f64,
    pub discount_pct: f64,
    pub savings: f64,
}

/// Solve for whichever of original price, final price or discount is missing.
pub fn calculate_discount(input: &DiscountInput) -> CalcResult<DiscountResult> {
    input.validate()?;
    let (original, final_price, pct) = match *input {
        DiscountInput::FinalPrice { original_price, discount_pct } => {
            (original_price, original_price * (1.0 - discount_pct / 100.0), discount_pct)
        }
        DiscountInput::OriginalPrice { final_price, discount_pct } => {
            (final_price / (1.0 - discount_pct / 100.0), final_price, discount_pct)
        }
        DiscountInput::DiscountPercent { original_price, final_price } => (
            original_price,
            final_price,
            (original_price - final_price) / original_price * 100.0,
        ),
    };
    if let DiscountInput::OriginalPrice { final_price, .. } = *input {
        require_finite_result("final_price", final_price, original)?;
    }
    Ok(DiscountResult {
        original_price: original,
        final_price,
        discount_pct: pct,
        savings: original - final_price,
    })
}
