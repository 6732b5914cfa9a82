//! # Age Calculator
//!
//! Exact age between two calendar dates. The as-of date is an explicit input,
//! never "today", so results are reproducible.
//!
//! A month boundary is counted when the day of month is reached; birthdays on
//! the 29th-31st fall on the last day of shorter months (Feb 29 → Feb 28).

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeInput {
    pub birth_date: NaiveDate,
    pub as_of: NaiveDate,
}

impl AgeInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.as_of < self.birth_date {
            tracing::debug!(birth = %self.birth_date, as_of = %self.as_of, "input rejected");
            return Err(CalcError::invalid_input(
                "as_of",
                self.as_of.to_string(),
                "Date must not be before the birth date",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeResult {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_days: i64,
    pub total_weeks: i64,
    /// Zero on the birthday itself
    pub days_until_next_birthday: i64,
}

fn add_months(date: NaiveDate, months: u32) -> CalcResult<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| CalcError::invalid_input("birth_date", date.to_string(), "Date out of range"))
}

/// Whole months elapsed from `from` to `to` (`to >= from`)
fn whole_months_between(from: NaiveDate, to: NaiveDate) -> CalcResult<u32> {
    let raw = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    let mut months = raw.max(0) as u32;
    if months > 0 && add_months(from, months)? > to {
        months -= 1;
    }
    Ok(months)
}

/// Calculate age in years, months and days.
pub fn calculate(input: &AgeInput) -> CalcResult<AgeResult> {
    input.validate()?;

    let months_total = whole_months_between(input.birth_date, input.as_of)?;
    let anniversary = add_months(input.birth_date, months_total)?;
    let days = (input.as_of - anniversary).num_days() as u32;

    let years = months_total / 12;
    let last_birthday = add_months(input.birth_date, years * 12)?;
    let next_birthday = if last_birthday == input.as_of {
        input.as_of
    } else {
        add_months(input.birth_date, (years + 1) * 12)?
    };

    let total_days = (input.as_of - input.birth_date).num_days();

    Ok(AgeResult {
        years,
        months: months_total % 12,
        days,
        total_days,
        total_weeks: total_days / 7,
        days_until_next_birthday: (next_birthday - input.as_of).num_days(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_basic_age() {
        let input = AgeInput {
            birth_date: date(1990, 5, 15),
            as_of: date(2024, 3, 10),
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.years, 33);
        assert_eq!(result.months, 9);
        assert_eq!(result.days, 24);
        assert_eq!(result.total_days, 12353);
        assert_eq!(result.total_weeks, 1764);
        assert_eq!(result.days_until_next_birthday, 66);
    }

    #[test]
    fn test_on_birthday() {
        let input = AgeInput {
            birth_date: date(2000, 7, 4),
            as_of: date(2025, 7, 4),
        };
        let result = calculate(&input).unwrap();
        assert_eq!((result.years, result.months, result.days), (25, 0, 0));
        assert_eq!(result.days_until_next_birthday, 0);
    }

    #[test]
    fn test_day_before_month_boundary() {
        let input = AgeInput {
            birth_date: date(2020, 1, 31),
            as_of: date(2020, 3, 30),
        };
        let result = calculate(&input).unwrap();
        // Jan 31 + 1 month = Feb 29 (leap year), then 30 days to Mar 30
        assert_eq!((result.years, result.months, result.days), (0, 1, 30));
    }

    #[test]
    fn test_same_day() {
        let d = date(2024, 1, 1);
        let result = calculate(&AgeInput { birth_date: d, as_of: d }).unwrap();
        assert_eq!(result.total_days, 0);
        assert_eq!(result.days_until_next_birthday, 0);
    }

    #[test]
    fn test_future_birth_rejected() {
        let input = AgeInput {
            birth_date: date(2030, 1, 1),
            as_of: date(2024, 1, 1),
        };
        assert_eq!(calculate(&input).unwrap_err().field(), Some("as_of"));
    }

    #[test]
    fn test_json_dates() {
        let input: AgeInput = serde_json::from_str(r#"{"birth_date":"1990-05-15","as_of":"2024-03-10"}"#).unwrap();
        assert_eq!(input.birth_date, date(1990, 5, 15));
    }
}
