use contracts::domain::a003_employee::{Employee, EmployeeDto};
use contracts::shared::validation::FieldErrors;

use crate::shared::form::{FormDraft, FormMode};

impl FormDraft for EmployeeDto {
    type Record = Employee;
    const LABEL: &'static str = "Employee";

    fn from_record(_blank: &Self, record: &Employee) -> Self {
        EmployeeDto::from(record)
    }

    fn validate(&self, _mode: &FormMode) -> FieldErrors {
        EmployeeDto::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;

    #[test]
    fn test_joining_timestamp_becomes_input_date() {
        let employee = Employee {
            id: "e1".into(),
            name: "Kiran Rao".into(),
            email: "kiran@example.com".into(),
            joining_date: Some("2023-04-03T00:00:00.000Z".into()),
            ..Default::default()
        };
        let mut form = FormState::new(EmployeeDto::default());
        form.open_edit(&employee);
        assert_eq!(form.draft.joining_date, "2023-04-03");
    }

    #[test]
    fn test_name_is_enough_but_bad_email_is_rejected() {
        let mut form = FormState::new(EmployeeDto::default());
        form.open_create();
        form.edit(|d| d.name = "Kiran Rao".into());
        assert!(form.validate());

        form.edit(|d| d.email = "kiran.example.com".into());
        assert!(!form.validate());
        assert!(form.error("email").is_some());
        assert_eq!(form.error("name"), None);
    }
}
