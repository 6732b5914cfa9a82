//! # Body Fat Estimation
//!
//! Two estimators, both clamped to a plausible 3-50% range:
//!
//! - **U.S. Navy tape method**: log10 regression on circumferences (cm)
//!   - Male:   %BF = 495 / (1.0324 − 0.19077·log10(waist − neck) + 0.15456·log10(height)) − 450
//!   - Female: %BF = 495 / (1.29579 − 0.35004·log10(waist + hip − neck) + 0.22100·log10(height)) − 450
//! - **Jackson-Pollock skinfolds** (3-site or 7-site): body density from a
//!   quadratic in the summed skinfolds (mm) plus an age term, then Siri:
//!   %BF = 495 / density − 450
//!
//! The skinfold density equations take the person's actual age. Some web
//! calculators pin the age term to 30; this one does not.

use serde::{Deserialize, Serialize};

use super::Gender;
use crate::errors::{CalcError, CalcResult};
use crate::units::{Centimeters, Inches, Kilograms, Pounds, UnitSystem};
use crate::validation::{reject, require_positive, require_range};

/// Lowest body-fat percentage reported
pub const MIN_BODY_FAT_PCT: f64 = 3.0;

/// Highest body-fat percentage reported
pub const MAX_BODY_FAT_PCT: f64 = 50.0;

/// Siri two-compartment equation: %BF = 495/D − 450
#[inline]
pub fn siri_body_fat(density: f64) -> f64 {
    495.0 / density - 450.0
}

fn clamp_body_fat(pct: f64) -> (f64, bool) {
    let clamped = pct.clamp(MIN_BODY_FAT_PCT, MAX_BODY_FAT_PCT);
    (clamped, clamped != pct)
}

/// ACE body-fat categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyFatCategory {
    EssentialFat,
    Athletes,
    Fitness,
    Average,
    Obese,
}

impl BodyFatCategory {
    /// Classify a body-fat percentage.
    ///
    /// | Category  | Male   | Female |
    /// |-----------|--------|--------|
    /// | Essential | < 6    | < 14   |
    /// | Athletes  | 6-13   | 14-20  |
    /// | Fitness   | 14-17  | 21-24  |
    /// | Average   | 18-24  | 25-31  |
    /// | Obese     | ≥ 25   | ≥ 32   |
    pub fn classify(gender: Gender, pct: f64) -> Self {
        let bands: [f64; 4] = match gender {
            Gender::Male => [6.0, 14.0, 18.0, 25.0],
            Gender::Female => [14.0, 21.0, 25.0, 32.0],
        };
        if pct < bands[0] {
            BodyFatCategory::EssentialFat
        } else if pct < bands[1] {
            BodyFatCategory::Athletes
        } else if pct < bands[2] {
            BodyFatCategory::Fitness
        } else if pct < bands[3] {
            BodyFatCategory::Average
        } else {
            BodyFatCategory::Obese
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            BodyFatCategory::EssentialFat => "Essential fat",
            BodyFatCategory::Athletes => "Athletes",
            BodyFatCategory::Fitness => "Fitness",
            BodyFatCategory::Average => "Average",
            BodyFatCategory::Obese => "Obese",
        }
    }
}

/// Results shared by both body-fat methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyFatResult {
    /// Estimated body fat in percent, clamped to 3-50
    pub body_fat_pct: f64,
    /// True when the raw estimate fell outside 3-50 and was clamped
    pub clamped: bool,
    pub category: BodyFatCategory,
    /// Body density (g/cm³), skinfold methods only
    pub body_density: Option<f64>,
    /// Fat mass in the input's weight unit, when weight was given
    pub fat_mass: Option<f64>,
    /// Lean mass in the input's weight unit, when weight was given
    pub lean_mass: Option<f64>,
}

fn build_result(gender: Gender, raw_pct: f64, density: Option<f64>, weight: Option<f64>) -> BodyFatResult {
    let (pct, clamped) = clamp_body_fat(raw_pct);
    let fat_mass = weight.map(|w| w * pct / 100.0);
    BodyFatResult {
        body_fat_pct: pct,
        clamped,
        category: BodyFatCategory::classify(gender, pct),
        body_density: density,
        fat_mass,
        lean_mass: weight.zip(fat_mass).map(|(w, f)| w - f),
    }
}

fn validate_weight(unit_system: UnitSystem, weight: Option<f64>) -> CalcResult<()> {
    if let Some(w) = weight {
        let kg = match unit_system {
            UnitSystem::Metric => Kilograms(w),
            UnitSystem::Imperial => Pounds(w).into(),
        };
        require_positive("weight", w)?;
        require_range("weight", kg.0, 1.0, 700.0)?;
    }
    Ok(())
}

// ============================================================================
// Navy Tape Method
// ============================================================================

/// Input for the U.S. Navy circumference method.
///
/// Lengths are cm (metric) or inches (imperial). `hip` is required for
/// women and ignored for men.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavyBodyFatInput {
    pub gender: Gender,
    #[serde(default)]
    pub unit_system: UnitSystem,
    pub height: f64,
    pub waist: f64,
    pub neck: f64,
    #[serde(default)]
    pub hip: Option<f64>,
    /// Body weight (kg or lb) for fat/lean mass
    #[serde(default)]
    pub weight: Option<f64>,
}

impl NavyBodyFatInput {
    fn to_cm(&self, value: f64) -> f64 {
        match self.unit_system {
            UnitSystem::Metric => value,
            UnitSystem::Imperial => Centimeters::from(Inches(value)).0,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_range("height", self.to_cm(self.height), 50.0, 300.0)?;
        require_positive("waist", self.waist)?;
        require_positive("neck", self.neck)?;
        match self.gender {
            Gender::Male => {
                if self.waist <= self.neck {
                    return Err(reject("waist", self.waist, "Waist must be larger than neck"));
                }
            }
            Gender::Female => {
                let hip = self.hip.ok_or_else(|| CalcError::missing_field("hip"))?;
                require_positive("hip", hip)?;
                if self.waist + hip <= self.neck {
                    return Err(reject("neck", self.neck, "Waist plus hip must be larger than neck"));
                }
            }
        }
        validate_weight(self.unit_system, self.weight)
    }
}

/// Estimate body fat with the Navy tape method.
pub fn calculate_navy(input: &NavyBodyFatInput) -> CalcResult<BodyFatResult> {
    input.validate()?;

    let height = input.to_cm(input.height).log10();
    let waist = input.to_cm(input.waist);
    let neck = input.to_cm(input.neck);

    let raw = match input.gender {
        Gender::Male => 495.0 / (1.0324 - 0.19077 * (waist - neck).log10() + 0.15456 * height) - 450.0,
        Gender::Female => {
            let hip = input.to_cm(input.hip.unwrap_or_default());
            495.0 / (1.29579 - 0.35004 * (waist + hip - neck).log10() + 0.22100 * height) - 450.0
        }
    };

    Ok(build_result(input.gender, raw, None, input.weight))
}

// ============================================================================
// Jackson-Pollock Skinfolds
// ============================================================================

/// Skinfold protocol and the sites it measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkinfoldProtocol {
    /// Male: chest, abdomen, thigh. Female: triceps, suprailiac, thigh.
    ThreeSite,
    /// Chest, midaxillary, triceps, subscapular, abdomen, suprailiac, thigh
    SevenSite,
}

impl SkinfoldProtocol {
    /// Number of measurements the protocol expects
    pub fn site_count(&self) -> usize {
        match self {
            SkinfoldProtocol::ThreeSite => 3,
            SkinfoldProtocol::SevenSite => 7,
        }
    }

    /// Body density from the skinfold sum (mm) and age.
    pub fn body_density(&self, gender: Gender, sum_mm: f64, age: f64) -> f64 {
        let s = sum_mm;
        match (self, gender) {
            (SkinfoldProtocol::ThreeSite, Gender::Male) => {
                1.10938 - 0.0008267 * s + 0.0000016 * s * s - 0.0002574 * age
            }
            (SkinfoldProtocol::ThreeSite, Gender::Female) => {
                1.0994921 - 0.0009929 * s + 0.0000023 * s * s - 0.0001392 * age
            }
            (SkinfoldProtocol::SevenSite, Gender::Male) => {
                1.112 - 0.00043499 * s + 0.00000055 * s * s - 0.00028826 * age
            }
            (SkinfoldProtocol::SevenSite, Gender::Female) => {
                1.097 - 0.00046971 * s + 0.00000056 * s * s - 0.00012828 * age
            }
        }
    }
}

/// Input for a Jackson-Pollock skinfold estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinfoldInput {
    pub gender: Gender,
    pub age_years: u32,
    pub protocol: SkinfoldProtocol,
    /// One caliper reading per site, in millimeters
    pub skinfolds_mm: Vec<f64>,
    #[serde(default)]
    pub unit_system: UnitSystem,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl SkinfoldInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_range("age_years", self.age_years as f64, 18.0, 100.0)?;
        let expected = self.protocol.site_count();
        if self.skinfolds_mm.len() != expected {
            return Err(reject(
                "skinfolds_mm",
                self.skinfolds_mm.len() as f64,
                format!("Expected {} skinfold measurements", expected),
            ));
        }
        for mm in &self.skinfolds_mm {
            require_range("skinfolds_mm", *mm, 1.0, 100.0)?;
        }
        validate_weight(self.unit_system, self.weight)
    }

    /// Sum of all site readings (mm)
    pub fn sum_mm(&self) -> f64 {
        self.skinfolds_mm.iter().sum()
    }
}

/// Estimate body fat from skinfold measurements.
pub fn calculate_skinfold(input: &SkinfoldInput) -> CalcResult<BodyFatResult> {
    input.validate()?;
    let density = input
        .protocol
        .body_density(input.gender, input.sum_mm(), input.age_years as f64);
    Ok(build_result(input.gender, siri_body_fat(density), Some(density), input.weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navy_male() -> NavyBodyFatInput {
        NavyBodyFatInput {
            gender: Gender::Male,
            unit_system: UnitSystem::Metric,
            height: 180.0,
            waist: 90.0,
            neck: 40.0,
            hip: None,
            weight: Some(80.0),
        }
    }

    #[test]
    fn test_navy_male() {
        let result = calculate_navy(&navy_male()).unwrap();
        assert!((result.body_fat_pct - 18.37).abs() < 0.01);
        assert_eq!(result.category, BodyFatCategory::Average);
        assert!(!result.clamped);
        let fat = result.fat_mass.unwrap();
        assert!((fat + result.lean_mass.unwrap() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_navy_imperial_matches_metric() {
        let metric = calculate_navy(&navy_male()).unwrap();
        let imperial = NavyBodyFatInput {
            unit_system: UnitSystem::Imperial,
            height: 180.0 / 2.54,
            waist: 90.0 / 2.54,
            neck: 40.0 / 2.54,
            weight: None,
            ..navy_male()
        };
        let result = calculate_navy(&imperial).unwrap();
        assert!((result.body_fat_pct - metric.body_fat_pct).abs() < 1e-9);
        assert_eq!(result.fat_mass, None);
    }

    #[test]
    fn test_navy_female_needs_hip() {
        let input = NavyBodyFatInput {
            gender: Gender::Female,
            unit_system: UnitSystem::Metric,
            height: 165.0,
            waist: 75.0,
            neck: 34.0,
            hip: None,
            weight: None,
        };
        let err = calculate_navy(&input).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");

        let input = NavyBodyFatInput {
            hip: Some(100.0),
            ..input
        };
        let result = calculate_navy(&input).unwrap();
        assert!((result.body_fat_pct - 28.94).abs() < 0.01);
        assert_eq!(result.category, BodyFatCategory::Average);
    }

    #[test]
    fn test_navy_waist_not_above_neck() {
        let mut input = navy_male();
        input.waist = 40.0;
        assert!(calculate_navy(&input).is_err());
    }

    #[test]
    fn test_navy_clamps_low() {
        let mut input = navy_male();
        input.waist = 55.0;
        input.neck = 50.0;
        let result = calculate_navy(&input).unwrap();
        assert_eq!(result.body_fat_pct, MIN_BODY_FAT_PCT);
        assert!(result.clamped);
    }

    #[test]
    fn test_skinfold_three_site_male() {
        let input = SkinfoldInput {
            gender: Gender::Male,
            age_years: 30,
            protocol: SkinfoldProtocol::ThreeSite,
            skinfolds_mm: vec![15.0, 25.0, 20.0],
            unit_system: UnitSystem::Metric,
            weight: None,
        };
        let result = calculate_skinfold(&input).unwrap();
        assert!((result.body_density.unwrap() - 1.057816).abs() < 1e-6);
        assert!((result.body_fat_pct - 17.95).abs() < 0.01);
    }

    #[test]
    fn test_skinfold_uses_real_age() {
        let young = SkinfoldInput {
            gender: Gender::Male,
            age_years: 30,
            protocol: SkinfoldProtocol::ThreeSite,
            skinfolds_mm: vec![15.0, 25.0, 20.0],
            unit_system: UnitSystem::Metric,
            weight: None,
        };
        let older = SkinfoldInput {
            age_years: 45,
            ..young.clone()
        };
        let a = calculate_skinfold(&young).unwrap();
        let b = calculate_skinfold(&older).unwrap();
        assert!((b.body_fat_pct - 19.66).abs() < 0.01);
        assert!(b.body_fat_pct > a.body_fat_pct);
    }

    #[test]
    fn test_skinfold_seven_site_and_female() {
        let seven = SkinfoldInput {
            gender: Gender::Male,
            age_years: 30,
            protocol: SkinfoldProtocol::SevenSite,
            skinfolds_mm: vec![20.0; 7],
            unit_system: UnitSystem::Metric,
            weight: None,
        };
        let result = calculate_skinfold(&seven).unwrap();
        assert!((result.body_fat_pct - 19.98).abs() < 0.01);

        let female = SkinfoldInput {
            gender: Gender::Female,
            age_years: 25,
            protocol: SkinfoldProtocol::ThreeSite,
            skinfolds_mm: vec![20.0, 25.0, 25.0],
            unit_system: UnitSystem::Metric,
            weight: None,
        };
        let result = calculate_skinfold(&female).unwrap();
        assert!((result.body_fat_pct - 26.98).abs() < 0.01);
        assert_eq!(result.category, BodyFatCategory::Average);
    }

    #[test]
    fn test_skinfold_site_count() {
        let input = SkinfoldInput {
            gender: Gender::Male,
            age_years: 30,
            protocol: SkinfoldProtocol::SevenSite,
            skinfolds_mm: vec![10.0, 12.0, 14.0],
            unit_system: UnitSystem::Metric,
            weight: None,
        };
        let err = calculate_skinfold(&input).unwrap_err();
        assert_eq!(err.field(), Some("skinfolds_mm"));
    }

    #[test]
    fn test_categories() {
        assert_eq!(BodyFatCategory::classify(Gender::Male, 5.0), BodyFatCategory::EssentialFat);
        assert_eq!(BodyFatCategory::classify(Gender::Male, 10.0), BodyFatCategory::Athletes);
        assert_eq!(BodyFatCategory::classify(Gender::Female, 10.0), BodyFatCategory::EssentialFat);
        assert_eq!(BodyFatCategory::classify(Gender::Female, 32.0), BodyFatCategory::Obese);
    }
}
