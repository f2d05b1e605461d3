//! Employee pay record model and rate parsing.
//!
//! This module defines the EmployeeRecord struct holding an employee's
//! per-diem rates, and the normalization applied to rate cells coming
//! from external sources.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};

/// A single employee's pay record in the directory.
///
/// Rates are whole currency units per trip day. The directory is loaded
/// once and treated as read-only; records are snapshotted into each
/// [`crate::models::TripCostBreakdown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee's name; the unique lookup key.
    pub name: String,
    /// The employee's position, used as a display label.
    pub position: String,
    /// Daily fixed allowance per trip day.
    pub daily_allowance: Decimal,
    /// Meal allowance per trip day.
    pub meal_allowance: Decimal,
}

/// Parses a rate cell from an external source into a whole currency amount.
///
/// External sources write rates as integer strings that may carry thousands
/// separators and stray spaces (e.g. `"50,000"` or `" 55 000 "`). Those are
/// stripped before the integer conversion; anything else is rejected.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use trip_expense_engine::models::parse_rate;
///
/// assert_eq!(parse_rate("daily", "50,000").unwrap(), Decimal::from(50000));
/// assert!(parse_rate("daily", "fifty").is_err());
/// ```
pub fn parse_rate(field: &str, value: &str) -> ExpenseResult<Decimal> {
    let normalized: String = value.chars().filter(|c| *c != ',' && *c != ' ').collect();
    let amount: i64 = normalized.parse().map_err(|_| ExpenseError::InvalidRate {
        field: field.to_string(),
        value: value.to_string(),
    })?;
    Ok(Decimal::from(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> EmployeeRecord {
        EmployeeRecord {
            name: "김병모".to_string(),
            position: "연구이사".to_string(),
            daily_allowance: Decimal::from(50000),
            meal_allowance: Decimal::from(55000),
        }
    }

    #[test]
    fn test_parse_rate_plain_integer() {
        assert_eq!(parse_rate("daily", "40000").unwrap(), Decimal::from(40000));
    }

    #[test]
    fn test_parse_rate_strips_thousands_separators() {
        assert_eq!(parse_rate("daily", "50,000").unwrap(), Decimal::from(50000));
        assert_eq!(
            parse_rate("meal", "1,234,567").unwrap(),
            Decimal::from(1234567)
        );
    }

    #[test]
    fn test_parse_rate_strips_spaces() {
        assert_eq!(parse_rate("meal", " 55,000 ").unwrap(), Decimal::from(55000));
        assert_eq!(parse_rate("meal", "55 000").unwrap(), Decimal::from(55000));
    }

    #[test]
    fn test_parse_rate_rejects_non_numeric() {
        let result = parse_rate("daily", "n/a");
        match result {
            Err(ExpenseError::InvalidRate { field, value }) => {
                assert_eq!(field, "daily");
                assert_eq!(value, "n/a");
            }
            other => panic!("Expected InvalidRate error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rate_rejects_empty() {
        assert!(parse_rate("daily", "").is_err());
    }

    #[test]
    fn test_parse_rate_rejects_fractional() {
        assert!(parse_rate("daily", "50000.5").is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: EmployeeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "name": "이정석",
            "position": "대표이사",
            "daily_allowance": "55000",
            "meal_allowance": "60000"
        }"#;

        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "이정석");
        assert_eq!(record.position, "대표이사");
        assert_eq!(record.daily_allowance, Decimal::from(55000));
        assert_eq!(record.meal_allowance, Decimal::from(60000));
    }
}
