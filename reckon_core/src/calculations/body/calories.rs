//! # Calorie Needs
//!
//! Mifflin-St Jeor basal metabolic rate, scaled by activity and goal:
//!
//! - BMR = 10·kg + 6.25·cm − 5·age + s  (s = +5 male, −161 female)
//! - TDEE = BMR × activity multiplier
//! - Target = TDEE × goal multiplier
//! - Macro grams = target × share / kcal-per-gram (protein 4, carbs 4, fat 9)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Gender;
use crate::errors::CalcResult;
use crate::units::{Centimeters, Inches, Kilograms, Pounds, UnitSystem};
use crate::validation::{reject, require_non_negative, require_range};

/// Energy density of protein (kcal/g)
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy density of carbohydrate (kcal/g)
pub const KCAL_PER_GRAM_CARB: f64 = 4.0;

/// Energy density of fat (kcal/g)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Mifflin-St Jeor BMR (kcal/day)
#[inline]
pub fn mifflin_st_jeor(gender: Gender, weight_kg: f64, height_cm: f64, age_years: f64) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Daily activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 days/week
    Light,
    /// Exercise 3-5 days/week
    #[default]
    Moderate,
    /// Exercise 6-7 days/week
    Active,
    /// Hard exercise daily or a physical job
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// TDEE multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very-active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_ascii_lowercase().replace(['_', ' '], "-");
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == key)
            .ok_or_else(|| format!("unknown activity level '{}'", s))
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeightGoal {
    Lose,
    #[default]
    Maintain,
    Gain,
    GainFast,
}

impl WeightGoal {
    /// Multiplier applied to TDEE
    pub fn multiplier(&self) -> f64 {
        match self {
            WeightGoal::Lose => 0.8,
            WeightGoal::Maintain => 1.0,
            WeightGoal::Gain => 1.1,
            WeightGoal::GainFast => 1.2,
        }
    }
}

impl FromStr for WeightGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "lose" | "loss" => Ok(WeightGoal::Lose),
            "maintain" => Ok(WeightGoal::Maintain),
            "gain" => Ok(WeightGoal::Gain),
            "gain-fast" | "fast-gain" => Ok(WeightGoal::GainFast),
            _ => Err(format!("unknown goal '{}'", s)),
        }
    }
}

/// Macronutrient split as protein / carbs / fat percentages.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum MacroSplit {
    /// 30 / 40 / 30
    #[default]
    Balanced,
    /// 40 / 20 / 40
    LowCarb,
    /// 40 / 35 / 25
    HighProtein,
    /// 25 / 5 / 70
    Keto,
    Custom {
        protein_pct: f64,
        carb_pct: f64,
        fat_pct: f64,
    },
}

impl MacroSplit {
    /// (protein %, carb %, fat %)
    pub fn shares(&self) -> (f64, f64, f64) {
        match *self {
            MacroSplit::Balanced => (30.0, 40.0, 30.0),
            MacroSplit::LowCarb => (40.0, 20.0, 40.0),
            MacroSplit::HighProtein => (40.0, 35.0, 25.0),
            MacroSplit::Keto => (25.0, 5.0, 70.0),
            MacroSplit::Custom {
                protein_pct,
                carb_pct,
                fat_pct,
            } => (protein_pct, carb_pct, fat_pct),
        }
    }

    fn validate(&self) -> CalcResult<()> {
        if let MacroSplit::Custom {
            protein_pct,
            carb_pct,
            fat_pct,
        } = *self
        {
            require_non_negative("protein_pct", protein_pct)?;
            require_non_negative("carb_pct", carb_pct)?;
            require_non_negative("fat_pct", fat_pct)?;
            let total = protein_pct + carb_pct + fat_pct;
            if (total - 100.0).abs() > 0.01 {
                return Err(reject("macros", total, "Macro percentages must add up to 100"));
            }
        }
        Ok(())
    }
}

impl FromStr for MacroSplit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "balanced" => Ok(MacroSplit::Balanced),
            "low-carb" | "lowcarb" => Ok(MacroSplit::LowCarb),
            "high-protein" | "highprotein" => Ok(MacroSplit::HighProtein),
            "keto" => Ok(MacroSplit::Keto),
            _ => Err(format!("unknown macro preset '{}'", s)),
        }
    }
}

/// Input for a calorie calculation.
///
/// Weight is kg or lb, height is cm or inches, per `unit_system`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieInput {
    pub gender: Gender,
    pub age_years: u32,
    #[serde(default)]
    pub unit_system: UnitSystem,
    pub weight: f64,
    pub height: f64,
    #[serde(default)]
    pub activity: ActivityLevel,
    #[serde(default)]
    pub goal: WeightGoal,
    #[serde(default)]
    pub macros: MacroSplit,
}

impl CalorieInput {
    fn weight_kg(&self) -> f64 {
        match self.unit_system {
            UnitSystem::Metric => self.weight,
            UnitSystem::Imperial => Kilograms::from(Pounds(self.weight)).0,
        }
    }

    fn height_cm(&self) -> f64 {
        match self.unit_system {
            UnitSystem::Metric => self.height,
            UnitSystem::Imperial => Centimeters::from(Inches(self.height)).0,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_range("age_years", self.age_years as f64, 15.0, 100.0)?;
        require_range("weight", self.weight_kg(), 20.0, 500.0)?;
        require_range("height", self.height_cm(), 100.0, 250.0)?;
        self.macros.validate()
    }
}

/// Results from a calorie calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieResult {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Daily calories for the chosen goal
    pub target_calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Calculate BMR, TDEE, goal calories and macro grams.
pub fn calculate(input: &CalorieInput) -> CalcResult<CalorieResult> {
    input.validate()?;

    let bmr = mifflin_st_jeor(input.gender, input.weight_kg(), input.height_cm(), input.age_years as f64);
    let tdee = bmr * input.activity.multiplier();
    let target = tdee * input.goal.multiplier();
    let (protein, carbs, fat) = input.macros.shares();

    Ok(CalorieResult {
        bmr,
        tdee,
        target_calories: target,
        protein_g: target * protein / 100.0 / KCAL_PER_GRAM_PROTEIN,
        carbs_g: target * carbs / 100.0 / KCAL_PER_GRAM_CARB,
        fat_g: target * fat / 100.0 / KCAL_PER_GRAM_FAT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn male_input() -> CalorieInput {
        CalorieInput {
            gender: Gender::Male,
            age_years: 30,
            unit_system: UnitSystem::Metric,
            weight: 80.0,
            height: 180.0,
            activity: ActivityLevel::Moderate,
            goal: WeightGoal::Lose,
            macros: MacroSplit::Balanced,
        }
    }

    #[test]
    fn test_reference_male() {
        let result = calculate(&male_input()).unwrap();
        assert!((result.bmr - 1780.0).abs() < 1e-9);
        assert!((result.tdee - 2759.0).abs() < 1e-9);
        assert!((result.target_calories - 2207.2).abs() < 1e-9);
        assert!((result.protein_g - 165.54).abs() < 0.01);
        assert!((result.carbs_g - 220.72).abs() < 0.01);
        assert!((result.fat_g - 73.57).abs() < 0.01);
    }

    #[test]
    fn test_female_offset() {
        let male = mifflin_st_jeor(Gender::Male, 60.0, 165.0, 40.0);
        let female = mifflin_st_jeor(Gender::Female, 60.0, 165.0, 40.0);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_macro_calories_sum_to_target() {
        for macros in [MacroSplit::LowCarb, MacroSplit::HighProtein, MacroSplit::Keto] {
            let input = CalorieInput {
                macros,
                goal: WeightGoal::Maintain,
                ..male_input()
            };
            let r = calculate(&input).unwrap();
            let kcal = r.protein_g * 4.0 + r.carbs_g * 4.0 + r.fat_g * 9.0;
            assert!((kcal - r.target_calories).abs() < 1e-6);
        }
    }

    #[test]
    fn test_custom_split_must_total_100() {
        let input = CalorieInput {
            macros: MacroSplit::Custom {
                protein_pct: 30.0,
                carb_pct: 30.0,
                fat_pct: 30.0,
            },
            ..male_input()
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.field(), Some("macros"));
    }

    #[test]
    fn test_imperial_matches_metric() {
        let metric = calculate(&male_input()).unwrap();
        let imperial = CalorieInput {
            unit_system: UnitSystem::Imperial,
            weight: 80.0 / crate::units::KG_PER_LB,
            height: 180.0 / crate::units::CM_PER_INCH,
            ..male_input()
        };
        let result = calculate(&imperial).unwrap();
        assert!((result.bmr - metric.bmr).abs() < 1e-6);
    }

    #[test]
    fn test_choice_parsing() {
        assert_eq!("very active".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
        assert_eq!("gain_fast".parse::<WeightGoal>().unwrap(), WeightGoal::GainFast);
        assert_eq!("Low Carb".parse::<MacroSplit>().unwrap(), MacroSplit::LowCarb);
        assert!("couch".parse::<ActivityLevel>().is_err());
    }
}
