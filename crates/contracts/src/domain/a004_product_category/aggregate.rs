use serde::{Deserialize, Serialize};

use crate::shared::record::{Positioned, Record};
use crate::shared::status::RecordStatus;
use crate::shared::validation::{require, FieldErrors};

/// Категория товаров; порядок в каталоге задаётся вручную
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductCategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub order: u32,
    pub status: RecordStatus,
    pub created_at: Option<String>,
}

impl Record for ProductCategory {
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

impl Positioned for ProductCategory {
    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductCategoryDto {
    pub name: String,
    pub description: String,
    pub status: RecordStatus,
}

impl From<&ProductCategory> for ProductCategoryDto {
    fn from(c: &ProductCategory) -> Self {
        Self {
            name: c.name.clone(),
            description: c.description.clone(),
            status: c.status,
        }
    }
}

impl ProductCategoryDto {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Category name");
        errors
    }
}
