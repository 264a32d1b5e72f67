use serde::{Deserialize, Serialize};

use crate::shared::address::Address;
use crate::shared::record::Record;
use crate::shared::status::RecordStatus;
use crate::shared::validation::{check_email, check_phone, require, FieldErrors};

/// Поставщик
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Supplier {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub gst_number: String,
    pub address: Address,
    pub status: RecordStatus,
    pub created_at: Option<String>,
}

impl Record for Supplier {
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
pub struct SupplierDto {
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub gst_number: String,
    pub address: Address,
    pub status: RecordStatus,
}

impl From<&Supplier> for SupplierDto {
    fn from(s: &Supplier) -> Self {
        Self {
            name: s.name.clone(),
            contact_person: s.contact_person.clone(),
            email: s.email.clone(),
            phone: s.phone.clone(),
            gst_number: s.gst_number.clone(),
            address: s.address.clone(),
            status: s.status,
        }
    }
}

impl SupplierDto {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Name");
        check_email(&mut errors, "email", &self.email);
        check_phone(&mut errors, "phone", &self.phone);
        self.address.validate_into(&mut errors);
        errors
    }
}
