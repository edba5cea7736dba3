//! Core data models for the vacation engine.
//!
//! This module contains the domain models shared by the calculators, the
//! normalization boundary and the API.

mod employee;
mod entitlement;
mod vacation_request;

pub use employee::{Employee, GroupAttribute, GroupBucket};
pub use entitlement::EntitlementResult;
pub use vacation_request::{RequestStatus, VacationRequest};
