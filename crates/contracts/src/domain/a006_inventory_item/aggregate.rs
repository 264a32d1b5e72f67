use serde::{Deserialize, Serialize};

use crate::shared::record::Record;
use crate::shared::status::RecordStatus;
use crate::shared::validation::{require, FieldErrors};

/// Складской остаток
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    pub sku: String,
    pub warehouse: String,
    pub quantity: i64,
    pub reorder_level: i64,
    pub status: RecordStatus,
    pub created_at: Option<String>,
}

impl InventoryItem {
    pub fn needs_reorder(&self) -> bool {
        self.quantity <= self.reorder_level
    }
}

impl Record for InventoryItem {
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
pub struct InventoryItemDto {
    pub product_name: String,
    pub sku: String,
    pub warehouse: String,
    pub quantity: i64,
    pub reorder_level: i64,
    pub status: RecordStatus,
}

impl From<&InventoryItem> for InventoryItemDto {
    fn from(i: &InventoryItem) -> Self {
        Self {
            product_name: i.product_name.clone(),
            sku: i.sku.clone(),
            warehouse: i.warehouse.clone(),
            quantity: i.quantity,
            reorder_level: i.reorder_level,
            status: i.status,
        }
    }
}

impl InventoryItemDto {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "product_name", &self.product_name, "Product name");
        require(&mut errors, "sku", &self.sku, "SKU");
        if self.quantity < 0 {
            errors.add("quantity", "Quantity cannot be negative");
        }
        if self.reorder_level < 0 {
            errors.add("reorder_level", "Reorder level cannot be negative");
        }
        errors
    }
}
