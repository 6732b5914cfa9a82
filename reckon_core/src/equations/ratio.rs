//! # Ratio and Percentage Formulas
//!
//! Percentages are expressed as whole numbers (15.0 means 15%).

/// `pct` percent of `value`: value × pct/100
#[inline]
pub fn percent_of(value: f64, pct: f64) -> f64 {
    value * pct / 100.0
}

/// What percent `part` is of `whole`: part/whole × 100
#[inline]
pub fn what_percent(part: f64, whole: f64) -> f64 {
    part / whole * 100.0
}

/// Apply a percentage increase or decrease: value × (1 ± pct/100)
#[inline]
pub fn apply_change(value: f64, pct: f64, is_increase: bool) -> f64 {
    if is_increase {
        value * (1.0 + pct / 100.0)
    } else {
        value * (1.0 - pct / 100.0)
    }
}

/// Relative change from `old` to `new` in percent: (new − old)/|old| × 100
#[inline]
pub fn percent_change(old: f64, new: f64) -> f64 {
    (new - old) / old.abs() * 100.0
}

/// Markup on cost: profit/cost × 100
#[inline]
pub fn markup_percent(cost: f64, selling_price: f64) -> f64 {
    (selling_price - cost) / cost * 100.0
}

/// Margin on selling price: profit/price × 100
#[inline]
pub fn margin_percent(cost: f64, selling_price: f64) -> f64 {
    (selling_price - cost) / selling_price * 100.0
}
