pub mod employee_reader;
pub mod payroll_writer;
