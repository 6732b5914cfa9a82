//! # Calculator Catalog
//!
//! Static registry of every calculator: stable slug, display name, category
//! and the formula it applies in plain text. Front ends build menus and help
//! pages from here rather than hard-coding lists.
//!
//! ## Usage
//!
//! ```rust
//! use reckon_core::catalog::{CalculatorId, Category};
//!
//! let id = CalculatorId::from_slug("emi").unwrap();
//! assert_eq!(id, CalculatorId::Loan);
//!
//! let meta = id.metadata();
//! assert_eq!(meta.category, Category::Amortization);
//! println!("Formula: {}", meta.formula);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Categories
// ============================================================================

/// Groups calculators for menus and the catalog page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Amortization,
    Growth,
    Ratio,
    Body,
    Construction,
    Utility,
    Date,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Amortization,
        Category::Growth,
        Category::Ratio,
        Category::Body,
        Category::Construction,
        Category::Utility,
        Category::Date,
    ];

    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Amortization => "Loans & Amortization",
            Category::Growth => "Interest & Growth",
            Category::Ratio => "Percentages & Pricing",
            Category::Body => "Health & Fitness",
            Category::Construction => "Construction",
            Category::Utility => "Utilities & Energy",
            Category::Date => "Dates",
        }
    }
}

// ============================================================================
// Calculator Metadata
// ============================================================================

/// Descriptive data for one calculator.
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorMetadata {
    /// URL-safe identifier (e.g., "compound-interest")
    pub slug: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// One-line description of what it answers
    pub description: &'static str,
    /// Formula in plain text
    pub formula: &'static str,
    pub category: Category,
}

// ============================================================================
// Calculator Identifiers
// ============================================================================

/// Every calculator the engine provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorId {
    Loan,
    AmortizationSchedule,
    Mortgage,
    AutoLoan,
    CreditCardPayoff,
    CompoundInterest,
    SimpleInterest,
    Retirement,
    InvestmentReturn,
    Percentage,
    BreakEven,
    MarkupMargin,
    Discount,
    Bmi,
    NavyBodyFat,
    SkinfoldBodyFat,
    Calories,
    HeartRateZones,
    WaistHip,
    Concrete,
    Paint,
    Tile,
    ElectricityBill,
    WaterBill,
    ApplianceEnergy,
    LightbulbSavings,
    BillSplit,
    Age,
}

/// All calculators in menu order
pub static ALL_CALCULATORS: &[CalculatorId] = &[
    // Amortization
    CalculatorId::Loan,
    CalculatorId::AmortizationSchedule,
    CalculatorId::Mortgage,
    CalculatorId::AutoLoan,
    CalculatorId::CreditCardPayoff,
    // Growth
    CalculatorId::CompoundInterest,
    CalculatorId::SimpleInterest,
    CalculatorId::Retirement,
    CalculatorId::InvestmentReturn,
    // Ratio
    CalculatorId::Percentage,
    CalculatorId::BreakEven,
    CalculatorId::MarkupMargin,
    CalculatorId::Discount,
    // Body
    CalculatorId::Bmi,
    CalculatorId::NavyBodyFat,
    CalculatorId::SkinfoldBodyFat,
    CalculatorId::Calories,
    CalculatorId::HeartRateZones,
    CalculatorId::WaistHip,
    // Construction
    CalculatorId::Concrete,
    CalculatorId::Paint,
    CalculatorId::Tile,
    // Utility
    CalculatorId::ElectricityBill,
    CalculatorId::WaterBill,
    CalculatorId::ApplianceEnergy,
    CalculatorId::LightbulbSavings,
    CalculatorId::BillSplit,
    // Date
    CalculatorId::Age,
];

/// Alternate slugs users type for a calculator
const ALIASES: &[(&str, CalculatorId)] = &[
    ("emi", CalculatorId::Loan),
    ("loan-emi", CalculatorId::Loan),
    ("credit-card", CalculatorId::CreditCardPayoff),
    ("body-fat", CalculatorId::NavyBodyFat),
    ("bmr", CalculatorId::Calories),
    ("tdee", CalculatorId::Calories),
    ("whr", CalculatorId::WaistHip),
];

static SLUG_INDEX: Lazy<HashMap<&'static str, CalculatorId>> = Lazy::new(|| {
    let mut index: HashMap<&'static str, CalculatorId> =
        ALL_CALCULATORS.iter().map(|id| (id.metadata().slug, *id)).collect();
    index.extend(ALIASES.iter().copied());
    index
});

impl CalculatorId {
    /// Look up a calculator by slug or alias (case-insensitive).
    pub fn from_slug(slug: &str) -> CalcResult<CalculatorId> {
        let key = slug.trim().to_ascii_lowercase().replace('_', "-");
        SLUG_INDEX
            .get(key.as_str())
            .copied()
            .ok_or_else(|| CalcError::unknown_calculator(slug))
    }

    /// Get all calculators in a given category
    pub fn in_category(category: Category) -> Vec<CalculatorId> {
        ALL_CALCULATORS
            .iter()
            .filter(|id| id.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get the full metadata for this calculator
    pub fn metadata(&self) -> CalculatorMetadata {
        match self {
            CalculatorId::Loan => CalculatorMetadata {
                slug: "loan",
                name: "Loan / EMI",
                description: "Periodic payment and total interest of an amortizing loan",
                formula: "payment = P·r(1+r)^n / ((1+r)^n − 1), r = rate / periods per year",
                category: Category::Amortization,
            },
            CalculatorId::AmortizationSchedule => CalculatorMetadata {
                slug: "amortization-schedule",
                name: "Amortization Schedule",
                description: "Principal and interest split of every payment, with yearly totals",
                formula: "interest_k = balance × r; principal_k = payment − interest_k",
                category: Category::Amortization,
            },
            CalculatorId::Mortgage => CalculatorMetadata {
                slug: "mortgage",
                name: "Mortgage",
                description: "Monthly housing payment including tax, insurance, PMI and HOA",
                formula: "monthly = P&I + tax/12 + insurance/12 + PMI + HOA",
                category: Category::Amortization,
            },
            CalculatorId::AutoLoan => CalculatorMetadata {
                slug: "auto-loan",
                name: "Auto Loan",
                description: "Amount financed and monthly payment for a vehicle",
                formula: "financed = price − down − trade-in + tax + fees",
                category: Category::Amortization,
            },
            CalculatorId::CreditCardPayoff => CalculatorMetadata {
                slug: "credit-card-payoff",
                name: "Credit Card Payoff",
                description: "Months to pay off a balance, or the payment for a target date",
                formula: "n = −ln(1 − r·B/payment) / ln(1+r); payment = r·B / (1 − (1+r)^−n)",
                category: Category::Amortization,
            },
            CalculatorId::CompoundInterest => CalculatorMetadata {
                slug: "compound-interest",
                name: "Compound Interest",
                description: "Future value of a deposit plus regular contributions",
                formula: "FV = P(1+r)^n + PMT·((1+r)^n − 1)/r",
                category: Category::Growth,
            },
            CalculatorId::SimpleInterest => CalculatorMetadata {
                slug: "simple-interest",
                name: "Simple Interest",
                description: "Interest that accrues on principal only",
                formula: "I = P × rate × time",
                category: Category::Growth,
            },
            CalculatorId::Retirement => CalculatorMetadata {
                slug: "retirement",
                name: "Retirement Savings",
                description: "Projected savings at retirement and sustainable income",
                formula: "FV = S(1+r)^n + PMT·((1+r)^n − 1)/r·(1+r)",
                category: Category::Growth,
            },
            CalculatorId::InvestmentReturn => CalculatorMetadata {
                slug: "investment-return",
                name: "Investment Return",
                description: "Total and annualized return between two values",
                formula: "CAGR = (final / initial)^(1/years) − 1",
                category: Category::Growth,
            },
            CalculatorId::Percentage => CalculatorMetadata {
                slug: "percentage",
                name: "Percentage",
                description: "Percent of, what percent, increase, decrease and change",
                formula: "x% of v = v·x/100; part/whole × 100; v(1 ± x/100)",
                category: Category::Ratio,
            },
            CalculatorId::BreakEven => CalculatorMetadata {
                slug: "break-even",
                name: "Break-Even",
                description: "Units and revenue needed to cover fixed costs",
                formula: "units = fixed costs / (price − variable cost)",
                category: Category::Ratio,
            },
            CalculatorId::MarkupMargin => CalculatorMetadata {
                slug: "markup-margin",
                name: "Markup & Margin",
                description: "Markup on cost versus margin on price",
                formula: "markup = profit/cost × 100; margin = profit/price × 100",
                category: Category::Ratio,
            },
            CalculatorId::Discount => CalculatorMetadata {
                slug: "discount",
                name: "Discount",
                description: "Solve for final price, original price or discount percent",
                formula: "final = original × (1 − d)",
                category: Category::Ratio,
            },
            CalculatorId::Bmi => CalculatorMetadata {
                slug: "bmi",
                name: "Body Mass Index",
                description: "BMI, weight category and healthy weight range",
                formula: "BMI = kg/m² = 703 × lb/in²",
                category: Category::Body,
            },
            CalculatorId::NavyBodyFat => CalculatorMetadata {
                slug: "navy-body-fat",
                name: "Body Fat (Navy Method)",
                description: "Body fat from waist, neck, hip and height measurements",
                formula: "%BF = 495 / (a − b·log10(waist − neck) + c·log10(height)) − 450",
                category: Category::Body,
            },
            CalculatorId::SkinfoldBodyFat => CalculatorMetadata {
                slug: "skinfold-body-fat",
                name: "Body Fat (Skinfold)",
                description: "Jackson-Pollock 3- or 7-site caliper estimate",
                formula: "D = a − b·S + c·S² − d·age; %BF = 495/D − 450",
                category: Category::Body,
            },
            CalculatorId::Calories => CalculatorMetadata {
                slug: "calories",
                name: "Calorie Needs",
                description: "BMR, TDEE, goal calories and macronutrient grams",
                formula: "BMR = 10·kg + 6.25·cm − 5·age + s; TDEE = BMR × activity",
                category: Category::Body,
            },
            CalculatorId::HeartRateZones => CalculatorMetadata {
                slug: "heart-rate-zones",
                name: "Heart Rate Zones",
                description: "Maximum heart rate and five training zones",
                formula: "zone bpm = resting + (max − resting) × pct",
                category: Category::Body,
            },
            CalculatorId::WaistHip => CalculatorMetadata {
                slug: "waist-hip-ratio",
                name: "Waist-to-Hip Ratio",
                description: "WHR, health risk tier and body shape",
                formula: "WHR = waist / hip",
                category: Category::Body,
            },
            CalculatorId::Concrete => CalculatorMetadata {
                slug: "concrete",
                name: "Concrete",
                description: "Volume and premix bags for slabs and columns",
                formula: "yd³ = ft³ / 27; bags = ceil(yd³ × 40)",
                category: Category::Construction,
            },
            CalculatorId::Paint => CalculatorMetadata {
                slug: "paint",
                name: "Paint",
                description: "Gallons of paint for a room",
                formula: "gallons = (perimeter × height − 21·doors − 12·windows) × coats / coverage",
                category: Category::Construction,
            },
            CalculatorId::Tile => CalculatorMetadata {
                slug: "tile",
                name: "Tile",
                description: "Tiles, boxes and grout for an area",
                formula: "tiles = ceil(area / tile area with grout × (1 + waste))",
                category: Category::Construction,
            },
            CalculatorId::ElectricityBill => CalculatorMetadata {
                slug: "electricity-bill",
                name: "Electricity Bill",
                description: "Bill from meter readings or kWh used",
                formula: "total = (kWh × rate + fixed) × (1 + tax)",
                category: Category::Utility,
            },
            CalculatorId::WaterBill => CalculatorMetadata {
                slug: "water-bill",
                name: "Water Bill",
                description: "Water and sewer charges from gallons used",
                formula: "total = (gal/1000 × (water + sewer) + fixed) × (1 + tax)",
                category: Category::Utility,
            },
            CalculatorId::ApplianceEnergy => CalculatorMetadata {
                slug: "appliance-energy",
                name: "Appliance Energy",
                description: "Energy use and running cost of an appliance",
                formula: "kWh/day = W × h / 1000; month = day × days/week × 4.33",
                category: Category::Utility,
            },
            CalculatorId::LightbulbSavings => CalculatorMetadata {
                slug: "lightbulb-savings",
                name: "Lightbulb Savings",
                description: "Running cost and payback of switching bulb types",
                formula: "payback = bulb cost / monthly savings",
                category: Category::Utility,
            },
            CalculatorId::BillSplit => CalculatorMetadata {
                slug: "bill-split",
                name: "Bill Split",
                description: "Share a bill in proportion to weights",
                formula: "share = total × weight / Σ weights",
                category: Category::Utility,
            },
            CalculatorId::Age => CalculatorMetadata {
                slug: "age",
                name: "Age",
                description: "Exact age in years, months and days",
                formula: "as-of date − birth date",
                category: Category::Date,
            },
        }
    }
}

/// Render the catalog as a markdown reference, grouped by category.
pub fn catalog_markdown() -> String {
    let mut output = String::with_capacity(8_000);
    output.push_str("# Reckon Calculators\n\n");

    for category in Category::ALL {
        let calculators = CalculatorId::in_category(category);
        if calculators.is_empty() {
            continue;
        }
        output.push_str(&format!("## {}\n\n", category.display_name()));
        output.push_str("| Slug | Name | Formula |\n");
        output.push_str("|------|------|---------|\n");
        for id in calculators {
            let meta = id.metadata();
            output.push_str(&format!("| `{}` | {} | `{}` |\n", meta.slug, meta.name, meta.formula));
        }
        output.push('\n');
    }

    output.push_str(&format!("**Total calculators:** {}\n", ALL_CALCULATORS.len()));
    output
}
