use async_trait::async_trait;

use crate::employee::errors::EmployeeError;
use crate::employee::models::CreateEmployeeCommand;
use crate::employee::models::Employee;
use crate::employee::models::EmployeeDetails;
use crate::employee::models::EmployeeId;
use crate::employee::models::UpdateEmployeeCommand;

/// Port for employee domain service operations.
#[async_trait]
pub trait EmployeeServicePort: Send + Sync + 'static {
    /// Retrieve every employee.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError>;

    /// Retrieve employee by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, EmployeeError>;

    /// Create a new employee.
    ///
    /// # Returns
    /// Created employee including its store-assigned id
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_employee(
        &self,
        command: CreateEmployeeCommand,
    ) -> Result<Employee, EmployeeError>;

    /// Replace every field of an employee.
    ///
    /// Succeeds whether or not a row with `id` exists.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn update_employee(
        &self,
        id: &EmployeeId,
        command: UpdateEmployeeCommand,
    ) -> Result<EmployeeId, EmployeeError>;

    /// Delete an employee.
    ///
    /// Succeeds whether or not a row with `id` exists.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_employee(&self, id: &EmployeeId) -> Result<EmployeeId, EmployeeError>;
}

/// Persistence operations for employees.
#[async_trait]
pub trait EmployeeRepository: Send + Sync + 'static {
    /// Retrieve all employees ordered by id.
    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError>;

    /// Retrieve employee by identifier.
    ///
    /// # Returns
    /// Optional employee (None if not found)
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError>;

    /// Insert a row and return it with its assigned id.
    async fn create(&self, details: EmployeeDetails) -> Result<Employee, EmployeeError>;

    /// Overwrite the row with `id`.
    ///
    /// # Returns
    /// Number of rows affected
    async fn update(&self, id: &EmployeeId, details: EmployeeDetails)
        -> Result<u64, EmployeeError>;

    /// Remove the row with `id`.
    ///
    /// # Returns
    /// Number of rows affected
    async fn delete(&self, id: &EmployeeId) -> Result<u64, EmployeeError>;
}
