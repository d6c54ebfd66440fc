//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `PayrollEngine` which acts as the primary entry point
//! for running a payroll batch against the configured store and gateway.

pub mod engine;
