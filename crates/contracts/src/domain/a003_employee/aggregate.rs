use serde::{Deserialize, Serialize};

use crate::shared::address::Address;
use crate::shared::dates::normalize_input_date;
use crate::shared::record::Record;
use crate::shared::status::RecordStatus;
use crate::shared::validation::{check_email, check_phone, require, FieldErrors};

/// Сотрудник (раздел HR / команды)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub designation: String,
    pub joining_date: Option<String>,
    pub address: Address,
    pub status: RecordStatus,
    pub created_at: Option<String>,
}

impl Record for Employee {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn status(&self) -> Option<RecordStatus> {
        Some(self.status)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub designation: String,
    /// `YYYY-MM-DD` or empty
    pub joining_date: String,
    pub address: Address,
    pub status: RecordStatus,
}

impl From<&Employee> for EmployeeDto {
    fn from(e: &Employee) -> Self {
        Self {
            name: e.name.clone(),
            email: e.email.clone(),
            phone: e.phone.clone(),
            department: e.department.clone(),
            designation: e.designation.clone(),
            joining_date: e
                .joining_date
                .as_deref()
                .map(normalize_input_date)
                .unwrap_or_default(),
            address: e.address.clone(),
            status: e.status,
        }
    }
}

impl EmployeeDto {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Name");
        check_email(&mut errors, "email", &self.email);
        check_phone(&mut errors, "phone", &self.phone);
        self.address.validate_into(&mut errors);
        errors
    }
}
