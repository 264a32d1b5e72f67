use serde::{Deserialize, Serialize};

use crate::shared::address::Address;
use crate::shared::record::Record;
use crate::shared::status::RecordStatus;
use crate::shared::validation::{check_email, check_phone, require, FieldErrors};

/// Клиент
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub gst_number: String,
    pub address: Address,
    pub status: RecordStatus,
    pub created_at: Option<String>,
}

impl Record for Customer {
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

/// Тело запроса создания/изменения клиента
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub gst_number: String,
    pub address: Address,
    pub status: RecordStatus,
}

impl From<&Customer> for CustomerDto {
    fn from(c: &Customer) -> Self {
        Self {
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            company: c.company.clone(),
            gst_number: c.gst_number.clone(),
            address: c.address.clone(),
            status: c.status,
        }
    }
}

impl CustomerDto {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Name");
        check_email(&mut errors, "email", &self.email);
        check_phone(&mut errors, "phone", &self.phone);
        self.address.validate_into(&mut errors);
        errors
    }
}
