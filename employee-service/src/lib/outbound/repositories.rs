pub mod employee;
pub mod user;

pub use employee::PostgresEmployeeRepository;
pub use user::PostgresUserRepository;
