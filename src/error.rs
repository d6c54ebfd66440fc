use thiserror::Error;

pub type Result<T> = std::result::Result<T, PayrollError>;

#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Payment for employee '{employee_id}' failed: {reason}")]
    Payment { employee_id: String, reason: String },
}
