use crate::domain::employee::Employee;
use crate::error::{PayrollError, Result};
use std::io::Read;

/// Reads an employee roster from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<Employee>`.
/// It handles whitespace trimming and flexible record lengths automatically.
pub struct EmployeeReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EmployeeReader<R> {
    /// Creates a new `EmployeeReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes employees.
    ///
    /// This allows processing large rosters in a streaming fashion without
    /// loading the entire file into memory.
    pub fn employees(self) -> impl Iterator<Item = Result<Employee>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PayrollError::from))
    }
}
