//! # Utility Bills and Household Energy
//!
//! Linear billing arithmetic:
//!
//! - Energy charge = kWh × rate
//! - Tax applies to (energy charge + fixed charge)
//! - Appliance kWh/day = watts × hours / 1000, scaled to months with
//!   4.33 weeks/month and to years with 52 weeks
//! - Lightbulb costs scale with 30.44 days/month

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::equations::{daily_kwh, payback_months, DAYS_PER_MONTH, MONTHS_PER_YEAR, WEEKS_PER_MONTH, WEEKS_PER_YEAR};
use crate::errors::{CalcError, CalcResult};
use crate::units::{KilowattHours, Watts};
use crate::validation::{reject, require_non_negative, require_positive, require_range};

fn default_days_per_week() -> f64 {
    7.0
}

fn default_bulb_count() -> u32 {
    1
}

/// Tax on a subtotal, tax given in percent
fn tax_on(subtotal: f64, tax_pct: f64) -> f64 {
    subtotal * tax_pct / 100.0
}

// ============================================================================
// Electricity Bill
// ============================================================================

/// Where the billed kWh come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "usage")]
pub enum ElectricityUsage {
    MeterReadings { previous_reading: f64, current_reading: f64 },
    Direct { kwh: f64 },
}

impl ElectricityUsage {
    fn kwh(&self) -> KilowattHours {
        match *self {
            ElectricityUsage::MeterReadings {
                previous_reading,
                current_reading,
            } => KilowattHours(current_reading - previous_reading),
            ElectricityUsage::Direct { kwh } => KilowattHours(kwh),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricityInput {
    #[serde(flatten)]
    pub usage: ElectricityUsage,
    pub rate_per_kwh: f64,
    #[serde(default)]
    pub fixed_charge: f64,
    #[serde(default)]
    pub tax_pct: f64,
}

impl ElectricityInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        match self.usage {
            ElectricityUsage::MeterReadings {
                previous_reading,
                current_reading,
            } => {
                require_non_negative("previous_reading", previous_reading)?;
                require_non_negative("current_reading", current_reading)?;
                if current_reading < previous_reading {
                    return Err(reject(
                        "current_reading",
                        current_reading,
                        "Current reading must not be below the previous reading",
                    ));
                }
            }
            ElectricityUsage::Direct { kwh } => require_non_negative("kwh", kwh)?,
        }
        require_non_negative("rate_per_kwh", self.rate_per_kwh)?;
        require_non_negative("fixed_charge", self.fixed_charge)?;
        require_range("tax_pct", self.tax_pct, 0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricityResult {
    pub kwh: f64,
    pub energy_charge: f64,
    pub fixed_charge: f64,
    pub tax: f64,
    pub total: f64,
    /// Total divided by kWh; `None` when nothing was used
    pub effective_rate: Option<f64>,
}

/// Calculate an electricity bill.
pub fn calculate_electricity(input: &ElectricityInput) -> CalcResult<ElectricityResult> {
    input.validate()?;

    let kwh = input.usage.kwh().0;
    let energy = kwh * input.rate_per_kwh;
    let subtotal = energy + input.fixed_charge;
    let tax = tax_on(subtotal, input.tax_pct);
    let total = subtotal + tax;

    Ok(ElectricityResult {
        kwh,
        energy_charge: energy,
        fixed_charge: input.fixed_charge,
        tax,
        total,
        effective_rate: (kwh > 0.0).then(|| total / kwh),
    })
}

// ============================================================================
// Water Bill
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterInput {
    pub usage_gallons: f64,
    /// Water charge per 1,000 gallons
    pub water_rate_per_1000: f64,
    /// Sewer charge per 1,000 gallons
    #[serde(default)]
    pub sewer_rate_per_1000: f64,
    #[serde(default)]
    pub fixed_charge: f64,
    #[serde(default)]
    pub tax_pct: f64,
}

impl WaterInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("usage_gallons", self.usage_gallons)?;
        require_non_negative("water_rate_per_1000", self.water_rate_per_1000)?;
        require_non_negative("sewer_rate_per_1000", self.sewer_rate_per_1000)?;
        require_non_negative("fixed_charge", self.fixed_charge)?;
        require_range("tax_pct", self.tax_pct, 0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterResult {
    pub water_charge: f64,
    pub sewer_charge: f64,
    pub fixed_charge: f64,
    pub tax: f64,
    pub total: f64,
    pub cost_per_gallon: Option<f64>,
}

/// Calculate a water and sewer bill.
pub fn calculate_water(input: &WaterInput) -> CalcResult<WaterResult> {
    input.validate()?;

    let thousands = input.usage_gallons / 1000.0;
    let water = thousands * input.water_rate_per_1000;
    let sewer = thousands * input.sewer_rate_per_1000;
    let subtotal = water + sewer + input.fixed_charge;
    let tax = tax_on(subtotal, input.tax_pct);
    let total = subtotal + tax;

    Ok(WaterResult {
        water_charge: water,
        sewer_charge: sewer,
        fixed_charge: input.fixed_charge,
        tax,
        total,
        cost_per_gallon: (input.usage_gallons > 0.0).then(|| total / input.usage_gallons),
    })
}

// ============================================================================
// Appliance Energy
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceInput {
    pub watts: f64,
    pub hours_per_day: f64,
    #[serde(default = "default_days_per_week")]
    pub days_per_week: f64,
    pub rate_per_kwh: f64,
}

impl ApplianceInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("watts", self.watts)?;
        require_range("hours_per_day", self.hours_per_day, 0.0, 24.0)?;
        require_range("days_per_week", self.days_per_week, 0.0, 7.0)?;
        require_non_negative("rate_per_kwh", self.rate_per_kwh)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceResult {
    pub daily_kwh: f64,
    pub weekly_kwh: f64,
    pub monthly_kwh: f64,
    pub annual_kwh: f64,
    /// Cost of one day of use
    pub daily_cost: f64,
    pub monthly_cost: f64,
    pub annual_cost: f64,
}

/// Calculate appliance energy use and running cost.
pub fn calculate_appliance(input: &ApplianceInput) -> CalcResult<ApplianceResult> {
    input.validate()?;

    let daily = daily_kwh(input.watts, input.hours_per_day);
    let weekly = daily * input.days_per_week;
    let monthly = weekly * WEEKS_PER_MONTH;
    let annual = weekly * WEEKS_PER_YEAR;

    Ok(ApplianceResult {
        daily_kwh: daily,
        weekly_kwh: weekly,
        monthly_kwh: monthly,
        annual_kwh: annual,
        daily_cost: daily * input.rate_per_kwh,
        monthly_cost: monthly * input.rate_per_kwh,
        annual_cost: annual * input.rate_per_kwh,
    })
}

// ============================================================================
// Lightbulb Savings
// ============================================================================

/// Bulb technologies with typical 800-lumen ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulbType {
    Incandescent,
    Halogen,
    Cfl,
    Led,
}

/// Per-bulb preset figures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulbSpec {
    pub watts: f64,
    pub lifespan_hours: f64,
    pub unit_price: f64,
}

impl BulbType {
    pub const ALL: [BulbType; 4] = [BulbType::Incandescent, BulbType::Halogen, BulbType::Cfl, BulbType::Led];

    pub fn spec(&self) -> BulbSpec {
        match self {
            BulbType::Incandescent => BulbSpec {
                watts: 60.0,
                lifespan_hours: 1_000.0,
                unit_price: 1.00,
            },
            BulbType::Halogen => BulbSpec {
                watts: 43.0,
                lifespan_hours: 2_000.0,
                unit_price: 3.00,
            },
            BulbType::Cfl => BulbSpec {
                watts: 14.0,
                lifespan_hours: 8_000.0,
                unit_price: 2.50,
            },
            BulbType::Led => BulbSpec {
                watts: 10.0,
                lifespan_hours: 25_000.0,
                unit_price: 4.00,
            },
        }
    }
}

impl FromStr for BulbType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "incandescent" => Ok(BulbType::Incandescent),
            "halogen" => Ok(BulbType::Halogen),
            "cfl" => Ok(BulbType::Cfl),
            "led" => Ok(BulbType::Led),
            _ => Err(format!("unknown bulb type '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightbulbInput {
    pub current: BulbType,
    pub replacement: BulbType,
    #[serde(default = "default_bulb_count")]
    pub bulb_count: u32,
    pub hours_per_day: f64,
    pub rate_per_kwh: f64,
}

impl LightbulbInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.bulb_count == 0 {
            return Err(reject("bulb_count", 0.0, "Must be at least 1"));
        }
        require_range("hours_per_day", self.hours_per_day, 0.0, 24.0)?;
        require_non_negative("rate_per_kwh", self.rate_per_kwh)
    }

    fn monthly_cost(&self, bulb: BulbType) -> f64 {
        let kwh = Watts(bulb.spec().watts).over_hours(self.hours_per_day * DAYS_PER_MONTH);
        kwh.0 * self.rate_per_kwh * self.bulb_count as f64
    }

    fn replacements_per_year(&self, bulb: BulbType) -> f64 {
        let hours = self.hours_per_day * DAYS_PER_MONTH * MONTHS_PER_YEAR;
        hours / bulb.spec().lifespan_hours * self.bulb_count as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightbulbResult {
    pub current_monthly_cost: f64,
    pub replacement_monthly_cost: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    /// Cost of buying the replacement bulbs
    pub upfront_cost: f64,
    /// `None` when the replacement saves nothing
    pub payback_months: Option<f64>,
    pub replacements_avoided_per_year: f64,
}

/// Compare running costs of two bulb types.
pub fn calculate_lightbulb(input: &LightbulbInput) -> CalcResult<LightbulbResult> {
    input.validate()?;

    let current = input.monthly_cost(input.current);
    let replacement = input.monthly_cost(input.replacement);
    let savings = current - replacement;
    let upfront = input.replacement.spec().unit_price * input.bulb_count as f64;

    Ok(LightbulbResult {
        current_monthly_cost: current,
        replacement_monthly_cost: replacement,
        monthly_savings: savings,
        annual_savings: savings * MONTHS_PER_YEAR,
        upfront_cost: upfront,
        payback_months: (savings > 0.0).then(|| payback_months(upfront, savings)),
        replacements_avoided_per_year: input.replacements_per_year(input.current)
            - input.replacements_per_year(input.replacement),
    })
}

// ============================================================================
// Bill Split
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillShare {
    pub name: String,
    /// Relative weight (people, square footage, days present...)
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillSplitInput {
    pub total: f64,
    pub shares: Vec<BillShare>,
}

impl BillSplitInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("total", self.total)?;
        if self.shares.is_empty() {
            return Err(CalcError::missing_field("shares"));
        }
        for share in &self.shares {
            require_non_negative("weight", share.weight)?;
        }
        let sum: f64 = self.shares.iter().map(|s| s.weight).sum();
        if sum <= 0.0 {
            return Err(reject("weight", sum, "At least one share must have a positive weight"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillSplitLine {
    pub name: String,
    pub percent: f64,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillSplitResult {
    pub lines: Vec<BillSplitLine>,
}

/// Split a bill proportionally to each share's weight.
pub fn calculate_bill_split(input: &BillSplitInput) -> CalcResult<BillSplitResult> {
    input.validate()?;

    let sum: f64 = input.shares.iter().map(|s| s.weight).sum();
    let lines = input
        .shares
        .iter()
        .map(|share| {
            let fraction = share.weight / sum;
            BillSplitLine {
                name: share.name.clone(),
                percent: fraction * 100.0,
                amount: input.total * fraction,
            }
        })
        .collect();

    Ok(BillSplitResult { lines })
}
