//! # Body Metrics
//!
//! Anthropometric estimators. Every formula here branches on [`Gender`], and
//! the lookup tables (BMI bands, body-fat categories, activity multipliers,
//! macro presets, WHR thresholds) are fixed constants defined next to the
//! calculator that uses them.
//!
//! ## Available Calculators
//!
//! - [`bmi`] - Body Mass Index with category and healthy weight range
//! - [`body_fat`] - U.S. Navy tape method and Jackson-Pollock skinfolds
//! - [`calories`] - Mifflin-St Jeor BMR, TDEE, goal calories and macros
//! - [`heart_rate`] - Max heart rate and training zones
//! - [`waist_hip`] - Waist-to-hip ratio, risk tier and body shape

pub mod bmi;
pub mod body_fat;
pub mod calories;
pub mod heart_rate;
pub mod waist_hip;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use bmi::{BmiCategory, BmiInput, BmiResult};
pub use body_fat::{BodyFatCategory, BodyFatResult, NavyBodyFatInput, SkinfoldInput, SkinfoldProtocol};
pub use calories::{ActivityLevel, CalorieInput, CalorieResult, MacroSplit, WeightGoal};
pub use heart_rate::{HeartRateInput, HeartRateResult, HeartRateZone, ZoneMethod};
pub use waist_hip::{BodyShape, WaistHipInput, WaistHipResult, WhrRisk};

/// Biological sex used by the regression formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" | "man" => Ok(Gender::Male),
            "female" | "f" | "woman" => Ok(Gender::Female),
            other => Err(format!("unknown gender '{}'", other)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_str() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::Female);
        assert!("".parse::<Gender>().is_err());
    }
}
