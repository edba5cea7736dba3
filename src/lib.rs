//! Vacation Entitlement and Conflict Engine
//!
//! This crate computes statutory vacation entitlements under the Mexican
//! Federal Labour Law (years of service, allotment, business days, remaining
//! balance) and detects overlapping vacation requests across warehouses or
//! departments for the vacation request tool.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
