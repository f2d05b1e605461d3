//! Trip expense breakdown computation.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::directory::EmployeeDirectory;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{TripCostBreakdown, TripRequest};

use super::calculate_trip_days;

/// Computes the full reimbursement breakdown for a trip.
///
/// Looks the employee up by exact name, counts the reimbursable days, and
/// multiplies out both per-diem rates:
///
/// ```text
/// daily_allowance_total = trip_days * daily_allowance
/// meal_cost_total       = trip_days * meal_allowance
/// total_cost            = daily_allowance_total + meal_cost_total
/// ```
///
/// Returns [`ExpenseError::EmployeeNotFound`] for an unknown employee;
/// this is the only error the calculation can produce.
pub fn calculate_trip_expenses(
    directory: &EmployeeDirectory,
    request: &TripRequest,
) -> ExpenseResult<TripCostBreakdown> {
    let employee = directory
        .get(&request.employee_name)
        .cloned()
        .ok_or_else(|| ExpenseError::EmployeeNotFound {
            name: request.employee_name.clone(),
        })?;

    let trip_days = calculate_trip_days(
        request.start_date,
        request.start_time,
        request.end_date,
        request.end_time,
    );
    let days = Decimal::from(trip_days);

    let daily_allowance_total = days * employee.daily_allowance;
    let meal_cost_total = days * employee.meal_allowance;
    let total_cost = daily_allowance_total + meal_cost_total;

    Ok(TripCostBreakdown {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        daily_allowance_rate: employee.daily_allowance,
        meal_rate: employee.meal_allowance,
        employee,
        trip_days,
        daily_allowance_total,
        meal_cost_total,
        total_cost,
    })
}
