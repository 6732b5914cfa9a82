//! # Waist-to-Hip Ratio
//!
//! WHR = waist / hip, with WHO-style risk tiers by gender.
//!
//! | Risk     | Male        | Female      |
//! |----------|-------------|-------------|
//! | Low      | ≤ 0.95      | ≤ 0.80      |
//! | Moderate | 0.96 - 1.0  | 0.81 - 0.85 |
//! | High     | > 1.0       | > 0.85      |
//!
//! Shape is "apple" at or above 0.90 (male) or 0.80 (female), otherwise "pear".

use serde::{Deserialize, Serialize};

use super::Gender;
use crate::errors::CalcResult;
use crate::validation::require_positive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WhrRisk {
    Low,
    Moderate,
    High,
}

impl WhrRisk {
    pub fn classify(gender: Gender, ratio: f64) -> Self {
        let (low_max, moderate_max) = match gender {
            Gender::Male => (0.95, 1.0),
            Gender::Female => (0.80, 0.85),
        };
        if ratio <= low_max {
            WhrRisk::Low
        } else if ratio <= moderate_max {
            WhrRisk::Moderate
        } else {
            WhrRisk::High
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyShape {
    Pear,
    Apple,
}

impl BodyShape {
    pub fn classify(gender: Gender, ratio: f64) -> Self {
        let threshold = match gender {
            Gender::Male => 0.90,
            Gender::Female => 0.80,
        };
        if ratio >= threshold {
            BodyShape::Apple
        } else {
            BodyShape::Pear
        }
    }
}

/// Waist and hip circumferences, in any one consistent unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaistHipInput {
    pub gender: Gender,
    pub waist: f64,
    pub hip: f64,
}

impl WaistHipInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("waist", self.waist)?;
        require_positive("hip", self.hip)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaistHipResult {
    pub ratio: f64,
    pub risk: WhrRisk,
    pub shape: BodyShape,
}

/// Calculate the waist-to-hip ratio.
pub fn calculate(input: &WaistHipInput) -> CalcResult<WaistHipResult> {
    input.validate()?;
    let ratio = input.waist / input.hip;
    Ok(WaistHipResult {
        ratio,
        risk: WhrRisk::classify(input.gender, ratio),
        shape: BodyShape::classify(input.gender, ratio),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_male_ratio() {
        let input = WaistHipInput {
            gender: Gender::Male,
            waist: 34.0,
            hip: 38.0,
        };
        let result = calculate(&input).unwrap();
        assert!((result.ratio - 0.8947).abs() < 1e-4);
        assert_eq!(result.risk, WhrRisk::Low);
        assert_eq!(result.shape, BodyShape::Pear);
    }

    #[test]
    fn test_female_bands() {
        assert_eq!(WhrRisk::classify(Gender::Female, 0.80), WhrRisk::Low);
        assert_eq!(WhrRisk::classify(Gender::Female, 0.83), WhrRisk::Moderate);
        assert_eq!(WhrRisk::classify(Gender::Female, 0.86), WhrRisk::High);
        assert_eq!(BodyShape::classify(Gender::Female, 0.82), BodyShape::Apple);
        assert_eq!(WhrRisk::classify(Gender::Male, 1.02), WhrRisk::High);
    }

    #[test]
    fn test_shape_boundary_is_apple() {
        assert_eq!(BodyShape::classify(Gender::Male, 0.90), BodyShape::Apple);
        assert_eq!(BodyShape::classify(Gender::Male, 0.89), BodyShape::Pear);
        assert_eq!(BodyShape::classify(Gender::Female, 0.80), BodyShape::Apple);
        assert_eq!(BodyShape::classify(Gender::Female, 0.79), BodyShape::Pear);
    }

    #[test]
    fn test_zero_hip_rejected() {
        let input = WaistHipInput {
            gender: Gender::Female,
            waist: 70.0,
            hip: 0.0,
        };
        assert_eq!(calculate(&input).unwrap_err().field(), Some("hip"));
    }
}
