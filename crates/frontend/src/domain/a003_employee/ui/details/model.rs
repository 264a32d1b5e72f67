use contracts::domain::a003_employee::{Employee, EmployeeDto};

use crate::shared::config::{ApiDomain, AppConfig};
use crate::shared::rest::JsonResource;

pub type EmployeeService = JsonResource<Employee, EmployeeDto>;

pub fn employee_service(config: &AppConfig) -> EmployeeService {
    JsonResource::new(config.base_url(ApiDomain::Employees), "/api/employees")
}
