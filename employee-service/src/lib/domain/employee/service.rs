use std::sync::Arc;

use async_trait::async_trait;

use crate::employee::errors::EmployeeError;
use crate::employee::models::CreateEmployeeCommand;
use crate::employee::models::Employee;
use crate::employee::models::EmployeeId;
use crate::employee::models::UpdateEmployeeCommand;
use crate::employee::ports::EmployeeRepository;
use crate::employee::ports::EmployeeServicePort;

/// Domain service implementation for employee operations.
pub struct EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    repository: Arc<ER>,
}

impl<ER> EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    pub fn new(repository: Arc<ER>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<ER> EmployeeServicePort for EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        self.repository.list_all().await
    }

    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, EmployeeError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound(id.to_string()))
    }

    async fn create_employee(
        &self,
        command: CreateEmployeeCommand,
    ) -> Result<Employee, EmployeeError> {
        let employee = self.repository.create(command.details).await?;
        tracing::info!(employee_id = %employee.id, "Employee created");
        Ok(employee)
    }

    async fn update_employee(
        &self,
        id: &EmployeeId,
        command: UpdateEmployeeCommand,
    ) -> Result<EmployeeId, EmployeeError> {
        let rows = self.repository.update(id, command.details).await?;
        if rows == 0 {
            tracing::debug!(employee_id = %id, "Update matched no employee");
        }
        Ok(*id)
    }

    async fn delete_employee(&self, id: &EmployeeId) -> Result<EmployeeId, EmployeeError> {
        let rows = self.repository.delete(id).await?;
        if rows == 0 {
            tracing::debug!(employee_id = %id, "Delete matched no employee");
        }
        Ok(*id)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::employee::models::EmployeeDetails;

    mock! {
        pub TestEmployeeRepository {}

        #[async_trait]
        impl EmployeeRepository for TestEmployeeRepository {
            async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError>;
            async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError>;
            async fn create(&self, details: EmployeeDetails) -> Result<Employee, EmployeeError>;
            async fn update(&self, id: &EmployeeId, details: EmployeeDetails) -> Result<u64, EmployeeError>;
            async fn delete(&self, id: &EmployeeId) -> Result<u64, EmployeeError>;
        }
    }

    fn details() -> EmployeeDetails {
        EmployeeDetails {
            name: "Siti".to_string(),
            position: "Analyst".to_string(),
            department: "Finance".to_string(),
            salary: 7200.0,
        }
    }

    #[tokio::test]
    async fn test_create_employee_returns_assigned_id() {
        let mut repository = MockTestEmployeeRepository::new();

        repository
            .expect_create()
            .withf(|d| d.name == "Siti" && d.salary == 7200.0)
            .times(1)
            .returning(|d| Ok(Employee::from_details(EmployeeId(11), d)));

        let service = EmployeeService::new(Arc::new(repository));

        let employee = service
            .create_employee(CreateEmployeeCommand { details: details() })
            .await
            .unwrap();

        assert_eq!(employee.id, EmployeeId(11));
        assert_eq!(employee.department, "Finance");
    }

    #[tokio::test]
    async fn test_list_employees() {
        let mut repository = MockTestEmployeeRepository::new();

        repository.expect_list_all().times(1).returning(|| {
            Ok(vec![
                Employee::from_details(EmployeeId(1), details()),
                Employee::from_details(EmployeeId(2), details()),
            ])
        });

        let service = EmployeeService::new(Arc::new(repository));

        let employees = service.list_employees().await.unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[1].id, EmployeeId(2));
    }

    #[tokio::test]
    async fn test_get_employee_success() {
        let mut repository = MockTestEmployeeRepository::new();

        repository
            .expect_find_by_id()
            .withf(|id| *id == EmployeeId(5))
            .times(1)
            .returning(|id| Ok(Some(Employee::from_details(*id, details()))));

        let service = EmployeeService::new(Arc::new(repository));

        let employee = service.get_employee(&EmployeeId(5)).await.unwrap();
        assert_eq!(employee, Employee::from_details(EmployeeId(5), details()));
    }

    #[tokio::test]
    async fn test_get_employee_not_found() {
        let mut repository = MockTestEmployeeRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = EmployeeService::new(Arc::new(repository));

        let result = service.get_employee(&EmployeeId(404)).await;
        assert!(matches!(result, Err(EmployeeError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_missing_employee_still_succeeds() {
        let mut repository = MockTestEmployeeRepository::new();

        repository
            .expect_update()
            .withf(|id, d| *id == EmployeeId(9) && d.position == "Analyst")
            .times(1)
            .returning(|_, _| Ok(0));

        let service = EmployeeService::new(Arc::new(repository));

        let result = service
            .update_employee(&EmployeeId(9), UpdateEmployeeCommand { details: details() })
            .await;
        assert_eq!(result.unwrap(), EmployeeId(9));
    }

    #[tokio::test]
    async fn test_delete_missing_employee_still_succeeds() {
        let mut repository = MockTestEmployeeRepository::new();

        repository.expect_delete().times(1).returning(|_| Ok(0));

        let service = EmployeeService::new(Arc::new(repository));

        let result = service.delete_employee(&EmployeeId(999)).await;
        assert_eq!(result.unwrap(), EmployeeId(999));
    }

    #[tokio::test]
    async fn test_database_error_is_propagated() {
        let mut repository = MockTestEmployeeRepository::new();

        repository
            .expect_delete()
            .times(1)
            .returning(|_| Err(EmployeeError::DatabaseError("connection reset".to_string())));

        let service = EmployeeService::new(Arc::new(repository));

        let result = service.delete_employee(&EmployeeId(1)).await;
        assert!(matches!(result, Err(EmployeeError::DatabaseError(_))));
    }
}
