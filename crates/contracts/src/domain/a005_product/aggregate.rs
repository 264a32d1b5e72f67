use serde::{Deserialize, Serialize};

use crate::shared::record::Record;
use crate::shared::status::RecordStatus;
use crate::shared::validation::{require, FieldErrors};

/// Товар каталога
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub sku: String,
    /// `_id` of the product category
    pub category: String,
    pub price: f64,
    pub unit: String,
    pub image_url: String,
    pub description: String,
    pub status: RecordStatus,
    pub created_at: Option<String>,
}

impl Record for Product {
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
pub struct ProductDto {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: f64,
    pub unit: String,
    pub image_url: String,
    pub description: String,
    pub status: RecordStatus,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            sku: p.sku.clone(),
            category: p.category.clone(),
            price: p.price,
            unit: p.unit.clone(),
            image_url: p.image_url.clone(),
            description: p.description.clone(),
            status: p.status,
        }
    }
}

impl ProductDto {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Product name");
        require(&mut errors, "sku", &self.sku, "SKU");
        if !self.price.is_finite() || self.price < 0.0 {
            errors.add("price", "Price cannot be negative");
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_price_rejected() {
        let dto = ProductDto {
            name: "Steel bolt".into(),
            sku: "SB-10".into(),
            price: -1.0,
            ..Default::default()
        };
        let errors = dto.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("price"));
    }
}
