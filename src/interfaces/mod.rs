//! Inbound and outbound adapters for the CSV surface.

pub mod csv;
