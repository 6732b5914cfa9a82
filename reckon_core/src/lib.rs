//! # reckon_core - Everyday Calculation Engine
//!
//! `reckon_core` is the computational heart of Reckon: loan, interest, percentage,
//! body-metric, construction, utility and date calculators behind one typed API.
//! All inputs and outputs are JSON-serializable, so any front end (terminal,
//! web form, assistant tool call) can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take an input record and return a result
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Invalid input is a structured error, never NaN or Infinity
//! - **One formula, one place**: shared sub-formulas live in [`equations`]
//!
//! ## Quick Start
//!
//! ```rust
//! use reckon_core::calculations::amortization::{calculate_loan, LoanInput, PaymentFrequency};
//!
//! let input = LoanInput {
//!     principal: 500_000.0,
//!     annual_rate_pct: 9.5,
//!     term_years: 5.0,
//!     frequency: PaymentFrequency::Monthly,
//! };
//! let result = calculate_loan(&input).unwrap();
//! assert!((result.periodic_payment - 10500.93).abs() < 0.01);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - All calculators and the `CalculationItem` dispatcher
//! - [`catalog`] - Calculator slugs, names, categories and formulas
//! - [`equations`] - Shared formula functions
//! - [`validation`] - Parse-then-validate helpers for raw form text
//! - [`units`] - Type-safe unit wrappers
//! - [`worksheet`] - Saved drafts with their last results
//! - [`errors`] - Structured error types
//! - [`file_io`] - Atomic worksheet saves and versioned loads

pub mod calculations;
pub mod catalog;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod units;
pub mod validation;
pub mod worksheet;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, CalculationItem, CalculationOutput};
pub use catalog::{CalculatorId, Category};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_worksheet, save_worksheet};
pub use units::UnitSystem;
pub use worksheet::{Worksheet, WorksheetEntry, WorksheetSettings};
