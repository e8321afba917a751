//! Loan decision engine and the ambient service plumbing around it.
//!
//! [`decision::DecisionEngine`] turns a personal identity code plus a requested amount and
//! period into a [`decision::Decision`]: either the largest approvable offer or a rejection
//! reason. The remaining modules carry configuration, telemetry, and service errors for hosts
//! such as the HTTP API.

pub mod config;
pub mod decision;
pub mod error;
pub mod telemetry;
