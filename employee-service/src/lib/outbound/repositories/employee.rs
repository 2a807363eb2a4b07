use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::employee::errors::EmployeeError;
use crate::employee::models::Employee;
use crate::employee::models::EmployeeDetails;
use crate::employee::models::EmployeeId;
use crate::employee::ports::EmployeeRepository;

pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct EmployeeRow {
    id: i64,
    name: String,
    position: String,
    department: String,
    salary: f64,
}

impl From<EmployeeRow> for Employee {
    fn from(r: EmployeeRow) -> Self {
        Employee {
            id: EmployeeId(r.id),
            name: r.name,
            position: r.position,
            department: r.department,
            salary: r.salary,
        }
    }
}

fn database_error(e: sqlx::Error) -> EmployeeError {
    tracing::error!(error = %e, "Employee query failed");
    EmployeeError::DatabaseError(e.to_string())
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, position, department, salary
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, position, department, salary
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.map(Employee::from))
    }

    async fn create(&self, details: EmployeeDetails) -> Result<Employee, EmployeeError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO employees (name, position, department, salary)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&details.name)
        .bind(&details.position)
        .bind(&details.department)
        .bind(details.salary)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(Employee::from_details(EmployeeId(id), details))
    }

    async fn update(
        &self,
        id: &EmployeeId,
        details: EmployeeDetails,
    ) -> Result<u64, EmployeeError> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET name = $2, position = $3, department = $4, salary = $5
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .bind(&details.name)
        .bind(&details.position)
        .bind(&details.department)
        .bind(details.salary)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &EmployeeId) -> Result<u64, EmployeeError> {
        let result = sqlx::query(
            r#"
            DELETE FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected())
    }
}
