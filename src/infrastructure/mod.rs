//! Concrete adapters behind the domain ports.

pub mod bank;
pub mod in_memory;
