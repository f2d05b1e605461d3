//! Request types for the Trip Expense Engine API.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::TripRequest;

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripCalculationRequest {
    /// Name of the travelling employee.
    pub employee_name: String,
    /// Calendar date the trip starts.
    pub start_date: NaiveDate,
    /// Time of day the trip starts (HH:MM:SS).
    pub start_time: NaiveTime,
    /// Calendar date the trip ends.
    pub end_date: NaiveDate,
    /// Time of day the trip ends (HH:MM:SS).
    pub end_time: NaiveTime,
}

/// Request body for reference list add/remove endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceValueRequest {
    /// The value to add to or remove from the category.
    pub value: String,
}

impl From<TripCalculationRequest> for TripRequest {
    fn from(req: TripCalculationRequest) -> Self {
        TripRequest {
            employee_name: req.employee_name,
            start_date: req.start_date,
            start_time: req.start_time,
            end_date: req.end_date,
            end_time: req.end_time,
        }
    }
}
