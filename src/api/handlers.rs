//! HTTP request handlers for the Trip Expense Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_trip_expenses;
use crate::models::{ReferenceStore, TripRequest};
use crate::store;

use super::request::{ReferenceValueRequest, TripCalculationRequest};
use super::response::{
    ApiError, ApiErrorResponse, FormData, ReferenceMutation, ReloadSummary, ValidationReport,
    rejection_to_error,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/form-data", get(form_data))
        .route("/calculate", post(calculate))
        .route("/employees", get(employee_names))
        .route("/employees/:name", get(employee_info))
        .route(
            "/references/:category/values",
            post(add_reference_value).delete(remove_reference_value),
        )
        .route("/references/reset", post(reset_references))
        .route("/references/summary", get(reference_summary))
        .route("/references/validate", get(validate_references))
        .route("/reload", post(reload))
        .with_state(state)
}

/// Handler for GET /form-data.
///
/// Returns everything the trip request form needs in one payload.
async fn form_data(State(state): State<AppState>) -> Json<FormData> {
    let reference_lists = state.references().load();
    Json(FormData {
        reference_lists,
        project_names: state.project_names().as_ref().clone(),
        employees: state.directory().names(),
    })
}

/// Handler for POST /calculate.
///
/// Accepts a trip request and returns the calculated cost breakdown.
async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<TripCalculationRequest>, JsonRejection>,
) -> Response {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing trip calculation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_request(correlation_id, rejection),
    };

    let trip: TripRequest = request.into();
    let directory = state.directory();
    match calculate_trip_expenses(&directory, &trip) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                employee = %trip.employee_name,
                trip_days = breakdown.trip_days,
                total_cost = %breakdown.total_cost,
                "Trip calculation completed"
            );
            (StatusCode::OK, Json(breakdown)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Trip calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /employees.
async fn employee_names(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.directory().names())
}

/// Handler for GET /employees/:name.
async fn employee_info(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let directory = state.directory();
    match directory.get(&name) {
        Some(record) => Json(record.clone()).into_response(),
        None => {
            warn!(name = %name, "Employee lookup failed");
            ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::employee_not_found(&name),
            }
            .into_response()
        }
    }
}

/// Handler for POST /references/:category/values.
async fn add_reference_value(
    State(state): State<AppState>,
    Path(category): Path<String>,
    payload: Result<Json<ReferenceValueRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_request(correlation_id, rejection),
    };

    let repository = state.references();
    let mut store = repository.load();
    let changed = repository.add_value_in(&mut store, &category, &request.value);
    info!(
        correlation_id = %correlation_id,
        category = %category,
        changed,
        "Reference value add processed"
    );

    Json(mutation_result(&store, &category, changed)).into_response()
}

/// Handler for DELETE /references/:category/values.
async fn remove_reference_value(
    State(state): State<AppState>,
    Path(category): Path<String>,
    payload: Result<Json<ReferenceValueRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_request(correlation_id, rejection),
    };

    let repository = state.references();
    let mut store = repository.load();
    let changed = repository.remove_value_in(&mut store, &category, &request.value);
    info!(
        correlation_id = %correlation_id,
        category = %category,
        changed,
        "Reference value remove processed"
    );

    Json(mutation_result(&store, &category, changed)).into_response()
}

/// Handler for POST /references/reset.
async fn reset_references(State(state): State<AppState>) -> Json<ReferenceStore> {
    Json(state.references().reset_to_defaults())
}

/// Handler for GET /references/summary.
async fn reference_summary(State(state): State<AppState>) -> Response {
    let store = state.references().load();
    Json(store.summary()).into_response()
}

/// Handler for GET /references/validate.
async fn validate_references(State(state): State<AppState>) -> Json<ValidationReport> {
    let reference_lists = state.references().load();
    let report = match store::validate(&reference_lists) {
        Ok(()) => ValidationReport {
            valid: true,
            message: "reference data is valid".to_string(),
        },
        Err(err) => ValidationReport {
            valid: false,
            message: err.to_string(),
        },
    };
    Json(report)
}

/// Handler for POST /reload.
async fn reload(State(state): State<AppState>) -> Json<ReloadSummary> {
    let (employees, project_names) = state.reload();
    info!(employees, project_names, "Directory and project names reloaded");
    Json(ReloadSummary {
        employees,
        project_names,
    })
}

fn mutation_result(store: &ReferenceStore, category: &str, changed: bool) -> ReferenceMutation {
    ReferenceMutation {
        changed,
        values: store.get(category).map(<[String]>::to_vec).unwrap_or_default(),
    }
}

fn bad_request(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = rejection_to_error(rejection);
    warn!(
        correlation_id = %correlation_id,
        code = %error.code,
        "Rejected request body"
    );
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}
