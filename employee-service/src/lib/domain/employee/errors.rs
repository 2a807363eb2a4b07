use thiserror::Error;

/// Error for EmployeeId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmployeeIdError {
    #[error("Invalid employee id: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all employee operations
#[derive(Debug, Clone, Error)]
pub enum EmployeeError {
    #[error("Invalid employee ID: {0}")]
    InvalidEmployeeId(#[from] EmployeeIdError),

    #[error("Employee not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
