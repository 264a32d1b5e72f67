mod model;
mod view;
mod view_model;

pub use model::{employee_service, EmployeeService};
pub use view::EmployeeDetails;
