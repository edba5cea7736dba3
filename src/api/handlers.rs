//! HTTP request handlers for the vacation engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{
    OverlapCandidate, calculate_entitlement, check_new_request, compute_overlaps,
    compute_overlaps_sweep, daily_concurrency, filter_requests, group_buckets, overlap_candidates,
    parse_calendar_date, parse_optional_date, used_days,
};
use crate::error::VacationError;
use crate::normalize::{normalize_employee, normalize_employees, normalize_requests};

use super::request::{
    CalendarOverlapRequest, CandidateRow, ConcurrencyRequest, EntitlementRequest, GroupsRequest,
    OverlapRequest, RequestCheckRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, ConcurrencyResponse, GroupOption, GroupsResponse, OverlapResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/entitlement", post(entitlement_handler))
        .route("/overlaps", post(overlaps_handler))
        .route("/calendar/overlaps", post(calendar_overlaps_handler))
        .route("/concurrency", post(concurrency_handler))
        .route("/groups", post(groups_handler))
        .route("/requests/check", post(request_check_handler))
        .with_state(state)
}

/// Wraps a body in a 200 JSON response.
fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Turns a JSON extraction failure into a 400 with an [`ApiError`] body.
fn json_rejection(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Logs a domain error and maps it onto its HTTP response.
fn error_response(error: VacationError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request rejected"
    );
    ApiErrorResponse::from(error).into_response()
}

/// Parses pre-labelled overlap rows, dropping rows without usable dates.
fn candidates_from_rows(rows: &[CandidateRow]) -> Vec<OverlapCandidate> {
    rows.iter()
        .filter_map(|row| {
            let candidate = row.to_candidate();
            if candidate.is_none() {
                debug!(request_id = %row.id, "Skipping overlap row with unusable dates");
            }
            candidate
        })
        .collect()
}

/// Handler for POST /entitlement.
///
/// Unparsable dates are not rejected: they produce a zeroed entitlement, and
/// request rows that cannot be normalized count as zero used days.
async fn entitlement_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntitlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing entitlement request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(rejection, correlation_id),
    };

    let policy = state.config().policy();
    let used = request.used_days.unwrap_or_else(|| {
        used_days(
            &normalize_requests(&request.requests),
            &policy.consuming_statuses,
        )
    });

    let result = calculate_entitlement(
        parse_optional_date(request.hire_date.as_deref()),
        parse_optional_date(request.reference_date.as_deref()),
        used,
    );

    info!(
        correlation_id = %correlation_id,
        years_completed = result.years_completed,
        allotment_days = result.allotment_days,
        remaining_days = result.remaining_days,
        exhausted = result.is_exhausted(),
        "Entitlement calculated"
    );
    json_ok(result)
}

/// Handler for POST /overlaps.
///
/// Rows arrive already labelled. Rows whose dates do not parse are left out.
async fn overlaps_handler(
    State(state): State<AppState>,
    payload: Result<Json<OverlapRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overlap request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(rejection, correlation_id),
    };

    let cross_group_only = request
        .cross_group_only
        .unwrap_or(state.config().policy().cross_group_only);
    let candidates = candidates_from_rows(&request.requests);

    let start_time = Instant::now();
    let index = compute_overlaps(&candidates, cross_group_only);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        requests_count = request.requests.len(),
        usable_count = candidates.len(),
        flagged = index.len(),
        cross_group_only,
        duration_us = duration.as_micros(),
        "Overlaps computed"
    );

    json_ok(OverlapResponse {
        count: index.len(),
        overlapping_ids: index,
        cross_group_only,
        group_by: None,
    })
}

/// Handler for POST /calendar/overlaps.
///
/// Labels each request with its employee's `group_by` attribute from the
/// policy, then flags overlaps.
async fn calendar_overlaps_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalendarOverlapRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calendar overlap request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(rejection, correlation_id),
    };

    let policy = state.config().policy();
    let cross_group_only = request.cross_group_only.unwrap_or(policy.cross_group_only);
    let requests = normalize_requests(&request.requests);
    let employees = normalize_employees(&request.employees);
    let candidates = overlap_candidates(&requests, &employees, policy.group_by);

    let start_time = Instant::now();
    let index = compute_overlaps_sweep(&candidates, cross_group_only);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        requests_count = request.requests.len(),
        usable_count = requests.len(),
        employees_count = employees.len(),
        group_by = %policy.group_by,
        flagged = index.len(),
        cross_group_only,
        duration_us = duration.as_micros(),
        "Calendar overlaps computed"
    );

    json_ok(OverlapResponse {
        count: index.len(),
        overlapping_ids: index,
        cross_group_only,
        group_by: Some(policy.group_by),
    })
}

/// Handler for POST /concurrency.
///
/// A window with a missing or unparsable end yields no days.
async fn concurrency_handler(
    State(state): State<AppState>,
    payload: Result<Json<ConcurrencyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing concurrency request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(rejection, correlation_id),
    };

    let window = (
        parse_optional_date(request.first.as_deref()),
        parse_optional_date(request.last.as_deref()),
    );
    let (Some(first), Some(last)) = window else {
        debug!(
            correlation_id = %correlation_id,
            first = ?request.first,
            last = ?request.last,
            "Concurrency window has unusable dates"
        );
        return json_ok(ConcurrencyResponse { days: Vec::new() });
    };

    let mut calendar = state.config().calendar().clone();
    for text in &request.holidays {
        match parse_calendar_date(text) {
            Some(date) => {
                calendar.holidays.insert(date);
            }
            None => debug!(correlation_id = %correlation_id, value = %text, "Skipping holiday"),
        }
    }

    let requests = normalize_requests(&request.requests);
    let employees = normalize_employees(&request.employees);
    let filtered = filter_requests(&requests, &employees, &request.filter);
    let days = daily_concurrency(
        filtered,
        first,
        last,
        state.config().concurrency(),
        &calendar,
    );

    info!(
        correlation_id = %correlation_id,
        requests_count = request.requests.len(),
        usable_count = requests.len(),
        busy_days = days.len(),
        "Concurrency computed"
    );
    json_ok(ConcurrencyResponse { days })
}

/// Handler for POST /groups.
async fn groups_handler(
    State(state): State<AppState>,
    payload: Result<Json<GroupsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing groups request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(rejection, correlation_id),
    };

    let attribute = request
        .attribute
        .unwrap_or(state.config().policy().group_by);
    let employees = normalize_employees(&request.employees);
    let groups: Vec<GroupOption> = group_buckets(&employees, attribute)
        .into_iter()
        .map(|bucket| GroupOption {
            label: bucket.display_label(attribute).to_string(),
            bucket,
        })
        .collect();

    info!(
        correlation_id = %correlation_id,
        attribute = %attribute,
        groups = groups.len(),
        "Groups listed"
    );
    json_ok(GroupsResponse { attribute, groups })
}

/// Handler for POST /requests/check.
async fn request_check_handler(
    State(state): State<AppState>,
    payload: Result<Json<RequestCheckRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing request check");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(rejection, correlation_id),
    };

    let employee = match normalize_employee(&request.employee) {
        Ok(employee) => employee,
        Err(err) => return error_response(err, correlation_id),
    };
    let Some(reference_date) = parse_optional_date(request.reference_date.as_deref()) else {
        let err = VacationError::InvalidRequest {
            request_id: String::new(),
            message: "missing or invalid reference date".to_string(),
        };
        return error_response(err, correlation_id);
    };

    let policy = state.config().policy();
    let used = request.used_days.unwrap_or_else(|| {
        used_days(
            &normalize_requests(&request.requests),
            &policy.consuming_statuses,
        )
    });

    match check_new_request(
        &employee,
        parse_optional_date(request.start_date.as_deref()),
        parse_optional_date(request.end_date.as_deref()),
        reference_date,
        used,
    ) {
        Ok(assessment) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                requested_days = assessment.requested_days,
                remaining_after = assessment.remaining_after,
                "Request accepted"
            );
            json_ok(assessment)
        }
        Err(err) => error_response(err, correlation_id),
    }
}
