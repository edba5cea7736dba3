//! HTTP API module for the vacation engine.
//!
//! This module exposes the calculators as JSON endpoints for the request
//! tool's front end.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CalendarOverlapRequest, CandidateRow, ConcurrencyRequest, EntitlementRequest, GroupsRequest,
    OverlapRequest, RequestCheckRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, ConcurrencyResponse, GroupOption, GroupsResponse, OverlapResponse,
};
pub use state::AppState;
