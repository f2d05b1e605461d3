//! HTTP API module for the Trip Expense Engine.
//!
//! This module provides the JSON endpoints a form client needs: fetch
//! the reference lists and roster, edit the reference lists, and submit
//! trip requests for calculation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ReferenceValueRequest, TripCalculationRequest};
pub use response::{ApiError, FormData, ReferenceMutation, ReloadSummary, ValidationReport};
pub use state::AppState;
