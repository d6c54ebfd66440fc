//! Payroll batch engine: pays every employee on a roster through a banking
//! gateway, isolating per-employee payment failures.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
