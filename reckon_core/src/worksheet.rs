//! # Worksheet
//!
//! A `Worksheet` is the saved state of a calculator session: the form drafts
//! the user entered and the result each draft last produced. Drafts are
//! mutable and owned by the front end; results are derived and only change
//! through [`Worksheet::recompute`].
//!
//! ## Structure
//!
//! ```text
//! Worksheet
//! ├── meta: WorksheetMetadata (version, title, timestamps)
//! ├── settings: WorksheetSettings (unit system, currency, decimals)
//! └── items: HashMap<Uuid, WorksheetEntry>
//!       ├── draft: CalculationItem
//!       ├── last_result / last_error
//!       └── computed_at
//! ```
//!
//! ## Example
//!
//! ```rust
//! use reckon_core::worksheet::Worksheet;
//! use reckon_core::calculations::{CalculationItem, LoanInput, PaymentFrequency};
//!
//! let mut sheet = Worksheet::new("House budget");
//! let id = sheet.add("Car loan", CalculationItem::Loan(LoanInput {
//!     principal: 20_000.0,
//!     annual_rate_pct: 6.0,
//!     term_years: 5.0,
//!     frequency: PaymentFrequency::Monthly,
//! }));
//!
//! sheet.recompute(&id).unwrap();
//! assert!(sheet.get(&id).unwrap().last_result.is_some());
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{self, CalculationItem, CalculationOutput};
use crate::errors::{CalcError, CalcResult};
use crate::units::UnitSystem;

/// Current schema version for worksheet files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root worksheet container.
///
/// Items are stored in a flat UUID-keyed map so an entry keeps its identity
/// while its draft is edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worksheet {
    pub meta: WorksheetMetadata,
    pub settings: WorksheetSettings,
    pub items: HashMap<Uuid, WorksheetEntry>,
}

/// Worksheet metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksheetMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,
    pub title: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Display preferences shared by every entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorksheetSettings {
    /// Unit system new drafts start in
    pub unit_system: UnitSystem,
    /// Symbol prefixed to money amounts
    pub currency_symbol: String,
    /// Decimal places shown for amounts
    pub decimal_places: u32,
}

impl Default for WorksheetSettings {
    fn default() -> Self {
        WorksheetSettings {
            unit_system: UnitSystem::Imperial,
            currency_symbol: "$".to_string(),
            decimal_places: 2,
        }
    }
}

impl WorksheetSettings {
    /// Format a money amount with symbol, thousands separators and the
    /// configured precision.
    pub fn format_amount(&self, value: f64) -> String {
        let fixed = format!("{:.*}", self.decimal_places as usize, value.abs());
        let (whole, frac) = match fixed.split_once('.') {
            Some((w, f)) => (w, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if value < 0.0 { "-" } else { "" };
        match frac {
            Some(f) => format!("{}{}{}.{}", sign, self.currency_symbol, grouped, f),
            None => format!("{}{}{}", sign, self.currency_symbol, grouped),
        }
    }
}

/// One calculator on the worksheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksheetEntry {
    /// User-provided label (e.g., "Car loan")
    pub label: String,
    /// Current form values
    pub draft: CalculationItem,
    /// Output of the last successful run of `draft`
    #[serde(default)]
    pub last_result: Option<CalculationOutput>,
    /// Why the last run of `draft` failed
    #[serde(default)]
    pub last_error: Option<CalcError>,
    #[serde(default)]
    pub computed_at: Option<DateTime<Utc>>,
}

impl WorksheetEntry {
    fn new(label: String, draft: CalculationItem) -> Self {
        WorksheetEntry {
            label,
            draft,
            last_result: None,
            last_error: None,
            computed_at: None,
        }
    }

    /// True when the draft changed since it was last computed
    pub fn is_stale(&self) -> bool {
        self.computed_at.is_none()
    }

    fn run(&mut self) {
        match calculations::calculate(&self.draft) {
            Ok(output) => {
                self.last_result = Some(output);
                self.last_error = None;
            }
            Err(err) => {
                self.last_result = None;
                self.last_error = Some(err);
            }
        }
        self.computed_at = Some(Utc::now());
    }
}

impl Worksheet {
    /// Create a new empty worksheet.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Worksheet {
            meta: WorksheetMetadata {
                version: SCHEMA_VERSION.to_string(),
                title: title.into(),
                created: now,
                modified: now,
            },
            settings: WorksheetSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a draft. Returns the UUID assigned to the entry.
    pub fn add(&mut self, label: impl Into<String>, draft: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, WorksheetEntry::new(label.into(), draft));
        self.touch();
        id
    }

    /// Remove an entry by UUID.
    pub fn remove(&mut self, id: &Uuid) -> Option<WorksheetEntry> {
        let entry = self.items.remove(id);
        if entry.is_some() {
            self.touch();
        }
        entry
    }

    pub fn get(&self, id: &Uuid) -> Option<&WorksheetEntry> {
        self.items.get(id)
    }

    /// Replace an entry's draft. The previous result no longer describes the
    /// draft, so it is cleared until the next recompute.
    pub fn update_draft(&mut self, id: &Uuid, draft: CalculationItem) -> CalcResult<()> {
        let entry = self.items.get_mut(id).ok_or_else(|| CalcError::item_not_found(id))?;
        entry.draft = draft;
        entry.last_result = None;
        entry.last_error = None;
        entry.computed_at = None;
        self.touch();
        Ok(())
    }

    /// Run one entry's draft and store the outcome on the entry.
    ///
    /// Only a missing id is an error here; a rejected draft is recorded in
    /// `last_error`.
    pub fn recompute(&mut self, id: &Uuid) -> CalcResult<&WorksheetEntry> {
        let entry = self.items.get_mut(id).ok_or_else(|| CalcError::item_not_found(id))?;
        entry.run();
        tracing::debug!(%id, ok = entry.last_error.is_none(), "entry recomputed");
        self.meta.modified = Utc::now();
        Ok(&self.items[id])
    }

    /// Recompute every entry. Returns the number of entries whose draft was
    /// rejected.
    pub fn recompute_all(&mut self) -> usize {
        let mut failures = 0;
        for entry in self.items.values_mut() {
            entry.run();
            if entry.last_error.is_some() {
                failures += 1;
            }
        }
        self.touch();
        failures
    }

    /// Entries ordered by label, for display
    pub fn entries_by_label(&self) -> Vec<(&Uuid, &WorksheetEntry)> {
        let mut entries: Vec<_> = self.items.iter().collect();
        entries.sort_by(|a, b| a.1.label.cmp(&b.1.label));
        entries
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

impl Default for Worksheet {
    fn default() -> Self {
        Worksheet::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{BmiInput, BreakEvenInput};

    fn break_even() -> CalculationItem {
        CalculationItem::BreakEven(BreakEvenInput {
            fixed_costs: 50_000.0,
            price_per_unit: 100.0,
            variable_cost_per_unit: 60.0,
            target_profit: None,
        })
    }

    #[test]
    fn test_worksheet_creation() {
        let sheet = Worksheet::new("Budget");
        assert_eq!(sheet.meta.title, "Budget");
        assert_eq!(sheet.meta.version, SCHEMA_VERSION);
        assert_eq!(sheet.settings.unit_system, UnitSystem::Imperial);
        assert_eq!(sheet.settings.currency_symbol, "$");
        assert_eq!(sheet.settings.decimal_places, 2);
    }

    #[test]
    fn test_add_recompute_remove() {
        let mut sheet = Worksheet::new("Budget");
        let id = sheet.add("Shop", break_even());
        assert!(sheet.get(&id).unwrap().is_stale());

        let entry = sheet.recompute(&id).unwrap();
        assert!(entry.last_error.is_none());
        match entry.last_result.as_ref().unwrap() {
            CalculationOutput::BreakEven(r) => assert_eq!(r.break_even_units, 1250.0),
            other => panic!("unexpected output {:?}", other),
        }

        assert!(sheet.remove(&id).is_some());
        assert_eq!(sheet.item_count(), 0);
    }

    #[test]
    fn test_update_draft_clears_result() {
        let mut sheet = Worksheet::new("Budget");
        let id = sheet.add("Shop", break_even());
        sheet.recompute(&id).unwrap();

        let bad = CalculationItem::BreakEven(BreakEvenInput {
            fixed_costs: 50_000.0,
            price_per_unit: 50.0,
            variable_cost_per_unit: 60.0,
            target_profit: None,
        });
        sheet.update_draft(&id, bad).unwrap();
        let entry = sheet.get(&id).unwrap();
        assert!(entry.last_result.is_none());
        assert!(entry.is_stale());

        let entry = sheet.recompute(&id).unwrap();
        assert!(entry.last_result.is_none());
        assert_eq!(entry.last_error.as_ref().unwrap().field(), Some("price_per_unit"));
    }

    #[test]
    fn test_recompute_all_counts_failures() {
        let mut sheet = Worksheet::new("Mixed");
        sheet.add("Good", break_even());
        sheet.add(
            "Bad",
            CalculationItem::Bmi(BmiInput {
                unit_system: UnitSystem::Metric,
                weight: 70.0,
                height: 0.0,
            }),
        );
        assert_eq!(sheet.recompute_all(), 1);
        let labels: Vec<_> = sheet.entries_by_label().iter().map(|(_, e)| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Bad", "Good"]);
    }

    #[test]
    fn test_unknown_id() {
        let mut sheet = Worksheet::new("Empty");
        let err = sheet.recompute(&Uuid::new_v4()).unwrap_err();
        assert_eq!(err.error_code(), "ITEM_NOT_FOUND");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut sheet = Worksheet::new("Roundtrip");
        let id = sheet.add("Shop", break_even());
        sheet.recompute(&id).unwrap();

        let json = serde_json::to_string_pretty(&sheet).unwrap();
        let back: Worksheet = serde_json::from_str(&json).unwrap();
        let entry = back.get(&id).unwrap();
        assert_eq!(entry.label, "Shop");
        assert_eq!(entry.draft, break_even());
        assert!(entry.last_result.is_some());
    }

    #[test]
    fn test_format_amount() {
        let settings = WorksheetSettings::default();
        assert_eq!(settings.format_amount(1234567.891), "$1,234,567.89");
        assert_eq!(settings.format_amount(-50.0), "-$50.00");
        let euros = WorksheetSettings {
            currency_symbol: "€".to_string(),
            decimal_places: 0,
            ..WorksheetSettings::default()
        };
        assert_eq!(euros.format_amount(999.6), "€1,000");
    }
}
