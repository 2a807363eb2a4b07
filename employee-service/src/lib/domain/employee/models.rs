use std::fmt;

use crate::employee::errors::EmployeeIdError;

/// Employee record.
///
/// Identity is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
}

impl Employee {
    /// Build the record the store returns for an inserted row.
    pub fn from_details(id: EmployeeId, details: EmployeeDetails) -> Self {
        Self {
            id,
            name: details.name,
            position: details.position,
            department: details.department,
            salary: details.salary,
        }
    }
}

/// Store-assigned employee identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmployeeId(pub i64);

impl EmployeeId {
    /// Parse an employee ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a base-10 integer
    pub fn from_string(s: &str) -> Result<Self, EmployeeIdError> {
        s.parse::<i64>()
            .map(EmployeeId)
            .map_err(|e| EmployeeIdError::InvalidFormat(format!("{}: {}", s, e)))
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Every mutable employee field.
///
/// Used both for inserts and for full-row replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetails {
    pub name: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
}

/// Command to create a new employee
#[derive(Debug, Clone, PartialEq)]
pub struct CreateEmployeeCommand {
    pub details: EmployeeDetails,
}

/// Command to replace every field of an existing employee.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateEmployeeCommand {
    pub details: EmployeeDetails,
}
