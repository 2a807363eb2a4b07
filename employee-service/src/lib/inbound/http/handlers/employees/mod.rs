use serde::Deserialize;

use crate::employee::models::EmployeeDetails;

pub mod create_employee;
pub mod delete_employee;
pub mod get_employee;
pub mod list_employees;
pub mod update_employee;

pub use create_employee::create_employee;
pub use delete_employee::delete_employee;
pub use get_employee::get_employee;
pub use list_employees::list_employees;
pub use update_employee::update_employee;

/// HTTP request body carrying every employee field (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmployeeRequestBody {
    name: String,
    position: String,
    department: String,
    salary: f64,
}

impl From<EmployeeRequestBody> for EmployeeDetails {
    fn from(body: EmployeeRequestBody) -> Self {
        EmployeeDetails {
            name: body.name,
            position: body.position,
            department: body.department,
            salary: body.salary,
        }
    }
}
