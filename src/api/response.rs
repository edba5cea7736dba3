//! Response types for the vacation engine API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from [`VacationError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::{DayLoad, OverlapIndex};
use crate::error::VacationError;
use crate::models::{GroupAttribute, GroupBucket};

/// Response body for `POST /overlaps`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlapResponse {
    /// IDs of the requests taking part in an overlap, sorted.
    pub overlapping_ids: OverlapIndex,
    /// Number of flagged requests.
    pub count: usize,
    /// The policy that was applied.
    pub cross_group_only: bool,
    /// The attribute requests were labelled with, when the server labelled them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupAttribute>,
}

/// Response body for `POST /concurrency`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcurrencyResponse {
    /// Days with at least one person out, in date order.
    pub days: Vec<DayLoad>,
}

/// One selectable group in a filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupOption {
    /// The value to send back in a filter selection.
    pub bucket: GroupBucket,
    /// Text to show for the option.
    pub label: String,
}

/// Response body for `POST /groups`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupsResponse {
    /// The attribute the employees were grouped by.
    pub attribute: GroupAttribute,
    /// Distinct groups, sorted, with the ungrouped option last.
    pub groups: Vec<GroupOption>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<VacationError> for ApiErrorResponse {
    fn from(error: VacationError) -> Self {
        let message = error.to_string();
        match error {
            VacationError::ConfigNotFound { .. }
            | VacationError::ConfigParseError { .. }
            | VacationError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            VacationError::InvalidEmployee { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    message,
                    "The employee data contains invalid information",
                ),
            },
            VacationError::InvalidRequest { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_REQUEST",
                    message,
                    "The vacation request contains invalid information",
                ),
            },
            VacationError::InsufficientBalance {
                requested,
                remaining,
            } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "INSUFFICIENT_BALANCE",
                    message,
                    format!(
                        "The request covers {} business days but only {} remain",
                        requested, remaining
                    ),
                ),
            },
        }
    }
}
