use crate::domain::employee::Employee;
use crate::error::Result;
use std::io::Write;

/// Writes the final payroll roster as CSV.
///
/// Output columns are `id, salary, paid`, one record per employee in roster
/// order.
pub struct PayrollWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PayrollWriter<W> {
    /// Creates a new `PayrollWriter` over any `Write` sink (e.g., Stdout, File).
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes the header followed by one record per employee.
    pub fn write_roster(&mut self, employees: Vec<Employee>) -> Result<()> {
        self.writer.write_record(["id", "salary", "paid"])?;
        for employee in employees {
            self.writer.write_record([
                employee.id.as_str(),
                &employee.salary.value().to_string(),
                if employee.paid { "true" } else { "false" },
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
