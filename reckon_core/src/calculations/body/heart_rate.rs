//! # Heart-Rate Training Zones
//!
//! Maximum heart rate is the mean of three age regressions:
//!
//! - Tanaka:  208 − 0.7 × age
//! - Fox:     220 − age
//! - Gellish: 207 − 0.7 × age
//!
//! Zones are then laid out either on heart-rate reserve (Karvonen,
//! `resting + (max − resting) × pct`) or as straight percentages of max.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::validation::{reject, require_range};

/// Zone names, lightest first
pub const ZONE_NAMES: [&str; 5] = ["Very light", "Light", "Moderate", "Hard", "Maximum"];

/// Karvonen breakpoints as % of heart-rate reserve
pub const KARVONEN_BREAKPOINTS: [f64; 6] = [0.0, 30.0, 50.0, 70.0, 85.0, 100.0];

/// Percentage-of-max breakpoints
pub const PERCENT_OF_MAX_BREAKPOINTS: [f64; 6] = [50.0, 60.0, 70.0, 80.0, 90.0, 100.0];

#[inline]
pub fn tanaka_max_hr(age: f64) -> f64 {
    208.0 - 0.7 * age
}

#[inline]
pub fn fox_max_hr(age: f64) -> f64 {
    220.0 - age
}

#[inline]
pub fn gellish_max_hr(age: f64) -> f64 {
    207.0 - 0.7 * age
}

/// How zone boundaries are derived from max heart rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ZoneMethod {
    /// Heart-rate reserve; needs a resting heart rate
    #[default]
    Karvonen,
    PercentOfMax,
}

impl ZoneMethod {
    fn breakpoints(&self) -> &'static [f64; 6] {
        match self {
            ZoneMethod::Karvonen => &KARVONEN_BREAKPOINTS,
            ZoneMethod::PercentOfMax => &PERCENT_OF_MAX_BREAKPOINTS,
        }
    }
}

impl FromStr for ZoneMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "karvonen" | "reserve" => Ok(ZoneMethod::Karvonen),
            "percent-of-max" | "percentage" | "max" => Ok(ZoneMethod::PercentOfMax),
            _ => Err(format!("unknown zone method '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateInput {
    pub age_years: u32,
    /// Resting heart rate (bpm), required for Karvonen
    #[serde(default)]
    pub resting_hr: Option<f64>,
    #[serde(default)]
    pub method: ZoneMethod,
}

impl HeartRateInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_range("age_years", self.age_years as f64, 10.0, 100.0)?;
        if self.method == ZoneMethod::Karvonen {
            let resting = self.resting_hr.ok_or_else(|| CalcError::missing_field("resting_hr"))?;
            require_range("resting_hr", resting, 30.0, 120.0)?;
            let max_hr = average_max_hr(self.age_years as f64);
            if resting >= max_hr {
                return Err(reject(
                    "resting_hr",
                    resting,
                    "Resting heart rate must be below maximum heart rate",
                ));
            }
        }
        Ok(())
    }
}

/// Mean of the Tanaka, Fox and Gellish estimates
pub fn average_max_hr(age: f64) -> f64 {
    (tanaka_max_hr(age) + fox_max_hr(age) + gellish_max_hr(age)) / 3.0
}

/// One training zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateZone {
    /// 1-based zone number
    pub zone: u8,
    pub name: String,
    /// Lower bound, % of reserve (Karvonen) or % of max
    pub low_pct: f64,
    pub high_pct: f64,
    pub low_bpm: f64,
    pub high_bpm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateResult {
    pub max_hr: f64,
    pub tanaka: f64,
    pub fox: f64,
    pub gellish: f64,
    /// Max minus resting, Karvonen only
    pub heart_rate_reserve: Option<f64>,
    pub method: ZoneMethod,
    pub zones: Vec<HeartRateZone>,
}

/// Calculate max heart rate and the five training zones.
pub fn calculate(input: &HeartRateInput) -> CalcResult<HeartRateResult> {
    input.validate()?;

    let age = input.age_years as f64;
    let max_hr = average_max_hr(age);

    // Karvonen scales the reserve above resting; percent-of-max scales from zero.
    let (floor, span, reserve) = match input.method {
        ZoneMethod::Karvonen => {
            let resting = input.resting_hr.unwrap_or_default();
            (resting, max_hr - resting, Some(max_hr - resting))
        }
        ZoneMethod::PercentOfMax => (0.0, max_hr, None),
    };

    let breakpoints = input.method.breakpoints();
    let zones = breakpoints
        .windows(2)
        .zip(ZONE_NAMES)
        .enumerate()
        .map(|(i, (pair, name))| HeartRateZone {
            zone: i as u8 + 1,
            name: name.to_string(),
            low_pct: pair[0],
            high_pct: pair[1],
            low_bpm: floor + span * pair[0] / 100.0,
            high_bpm: floor + span * pair[1] / 100.0,
        })
        .collect();

    Ok(HeartRateResult {
        max_hr,
        tanaka: tanaka_max_hr(age),
        fox: fox_max_hr(age),
        gellish: gellish_max_hr(age),
        heart_rate_reserve: reserve,
        method: input.method,
        zones,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_hr_estimates() {
        let input = HeartRateInput {
            age_years: 40,
            resting_hr: None,
            method: ZoneMethod::PercentOfMax,
        };
        let result = calculate(&input).unwrap();
        assert!((result.tanaka - 180.0).abs() < 1e-9);
        assert!((result.fox - 180.0).abs() < 1e-9);
        assert!((result.gellish - 179.0).abs() < 1e-9);
        assert!((result.max_hr - 179.667).abs() < 0.001);
        assert_eq!(result.heart_rate_reserve, None);
    }

    #[test]
    fn test_percent_of_max_zones() {
        let input = HeartRateInput {
            age_years: 40,
            resting_hr: None,
            method: ZoneMethod::PercentOfMax,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.zones.len(), 5);
        let first = &result.zones[0];
        assert_eq!(first.zone, 1);
        assert_eq!(first.name, "Very light");
        assert!((first.low_bpm - result.max_hr * 0.5).abs() < 1e-9);
        assert!((result.zones[4].high_bpm - result.max_hr).abs() < 1e-9);
    }

    #[test]
    fn test_karvonen_zones() {
        let input = HeartRateInput {
            age_years: 40,
            resting_hr: Some(60.0),
            method: ZoneMethod::Karvonen,
        };
        let result = calculate(&input).unwrap();
        let reserve = result.heart_rate_reserve.unwrap();
        assert!((reserve - 119.667).abs() < 0.001);
        assert!((result.zones[0].low_bpm - 60.0).abs() < 1e-9);
        // Moderate: 50-70% of reserve
        let moderate = &result.zones[2];
        assert!((moderate.low_bpm - (60.0 + reserve * 0.5)).abs() < 1e-9);
        assert!((moderate.high_bpm - (60.0 + reserve * 0.7)).abs() < 1e-9);
        assert!((result.zones[4].high_bpm - result.max_hr).abs() < 1e-9);
        // Zones are contiguous
        for pair in result.zones.windows(2) {
            assert!((pair[0].high_bpm - pair[1].low_bpm).abs() < 1e-9);
        }
    }

    #[test]
    fn test_karvonen_needs_resting_rate() {
        let input = HeartRateInput {
            age_years: 40,
            resting_hr: None,
            method: ZoneMethod::Karvonen,
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "MISSING_FIELD");
    }
}
