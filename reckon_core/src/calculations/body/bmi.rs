//! # Body Mass Index
//!
//! - Metric: BMI = kg / m²
//! - Imperial: BMI = 703 × lb / in²
//!
//! ```rust
//! use reckon_core::calculations::body::bmi::{bmi_metric, BmiCategory};
//!
//! let bmi = bmi_metric(70.0, 1.75);
//! assert!((bmi - 22.86).abs() < 0.01);
//! assert_eq!(BmiCategory::from_bmi(bmi).label(), "Normal weight");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::units::{Centimeters, Meters, UnitSystem};
use crate::validation::require_range;

/// Imperial BMI conversion factor
pub const IMPERIAL_BMI_FACTOR: f64 = 703.0;

/// Lower bound of the normal band
pub const BMI_NORMAL_MIN: f64 = 18.5;

/// Upper bound of the normal band, as quoted on charts
pub const BMI_NORMAL_MAX: f64 = 24.9;

/// BMI from kilograms and meters
#[inline]
pub fn bmi_metric(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// BMI from pounds and inches
#[inline]
pub fn bmi_imperial(weight_lb: f64, height_in: f64) -> f64 {
    IMPERIAL_BMI_FACTOR * weight_lb / (height_in * height_in)
}

/// WHO adult BMI bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    /// < 18.5
    Underweight,
    /// 18.5 - 24.9
    Normal,
    /// 25 - 29.9
    Overweight,
    /// ≥ 30
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < BMI_NORMAL_MIN {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Input for a BMI calculation.
///
/// Weight is kg (metric) or lb (imperial); height is cm (metric) or
/// inches (imperial).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    #[serde(default)]
    pub unit_system: UnitSystem,
    pub weight: f64,
    pub height: f64,
}

impl BmiInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        match self.unit_system {
            UnitSystem::Metric => {
                require_range("weight", self.weight, 1.0, 700.0)?;
                require_range("height", self.height, 30.0, 300.0)?;
            }
            UnitSystem::Imperial => {
                require_range("weight", self.weight, 2.0, 1500.0)?;
                require_range("height", self.height, 12.0, 120.0)?;
            }
        }
        Ok(())
    }

    /// BMI for these measurements
    pub fn bmi(&self) -> f64 {
        match self.unit_system {
            UnitSystem::Metric => {
                let height: Meters = Centimeters(self.height).into();
                bmi_metric(self.weight, height.0)
            }
            UnitSystem::Imperial => bmi_imperial(self.weight, self.height),
        }
    }

    /// Weight that gives `bmi` at this height, in the input's weight unit
    fn weight_for_bmi(&self, bmi: f64) -> f64 {
        match self.unit_system {
            UnitSystem::Metric => {
                let m: Meters = Centimeters(self.height).into();
                bmi * m.0 * m.0
            }
            UnitSystem::Imperial => bmi * self.height * self.height / IMPERIAL_BMI_FACTOR,
        }
    }
}

/// Results from a BMI calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
    /// Healthy weight range for this height, in the input's weight unit
    pub healthy_weight_min: f64,
    pub healthy_weight_max: f64,
}

/// Calculate BMI and its category.
pub fn calculate(input: &BmiInput) -> CalcResult<BmiResult> {
    input.validate()?;
    let bmi = input.bmi();
    Ok(BmiResult {
        bmi,
        category: BmiCategory::from_bmi(bmi),
        healthy_weight_min: input.weight_for_bmi(BMI_NORMAL_MIN),
        healthy_weight_max: input.weight_for_bmi(BMI_NORMAL_MAX),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_reference() {
        let input = BmiInput {
            unit_system: UnitSystem::Metric,
            weight: 70.0,
            height: 175.0,
        };
        let result = calculate(&input).unwrap();
        assert!((result.bmi - 22.86).abs() < 0.01);
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(result.category.label(), "Normal weight");
        assert!((result.healthy_weight_min - 56.66).abs() < 0.01);
        assert!((result.healthy_weight_max - 76.26).abs() < 0.01);
    }

    #[test]
    fn test_imperial() {
        let input = BmiInput {
            unit_system: UnitSystem::Imperial,
            weight: 200.0,
            height: 70.0,
        };
        let result = calculate(&input).unwrap();
        assert!((result.bmi - 28.69).abs() < 0.01);
        assert_eq!(result.category, BmiCategory::Overweight);
    }

    #[test]
    fn test_category_bands() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_rejects_zero_height() {
        let input = BmiInput {
            unit_system: UnitSystem::Metric,
            weight: 70.0,
            height: 0.0,
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.field(), Some("height"));
    }
}
