//! Trip request and cost breakdown models.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EmployeeRecord;

/// A single trip to be reimbursed.
///
/// Transient input to the expense calculation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Name of the travelling employee.
    pub employee_name: String,
    /// Calendar date the trip starts.
    pub start_date: NaiveDate,
    /// Time of day the trip starts.
    pub start_time: NaiveTime,
    /// Calendar date the trip ends.
    pub end_date: NaiveDate,
    /// Time of day the trip ends.
    pub end_time: NaiveTime,
}

/// The complete result of a trip expense calculation.
///
/// Carries the employee snapshot and the per-day rates it was computed
/// from, so the result stays interpretable after the directory is
/// reloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripCostBreakdown {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Snapshot of the employee record the rates came from.
    pub employee: EmployeeRecord,
    /// Number of reimbursable trip days; always at least 1.
    pub trip_days: u32,
    /// Daily allowance rate applied per day.
    pub daily_allowance_rate: Decimal,
    /// Meal rate applied per day.
    pub meal_rate: Decimal,
    /// trip_days * daily_allowance_rate.
    pub daily_allowance_total: Decimal,
    /// trip_days * meal_rate.
    pub meal_cost_total: Decimal,
    /// Sum of both totals.
    pub total_cost: Decimal,
}
