use serde::{Deserialize, Serialize};

use crate::shared::dates::normalize_input_date;
use crate::shared::record::Record;
use crate::shared::validation::{check_date_order, require, FieldErrors};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseState {
    #[default]
    Draft,
    Ordered,
    Received,
    Cancelled,
}

impl PurchaseState {
    pub const ALL: [PurchaseState; 4] = [
        PurchaseState::Draft,
        PurchaseState::Ordered,
        PurchaseState::Received,
        PurchaseState::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseState::Draft => "Draft",
            PurchaseState::Ordered => "Ordered",
            PurchaseState::Received => "Received",
            PurchaseState::Cancelled => "Cancelled",
        }
    }

    pub fn from_str_lossy(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(value))
            .unwrap_or_default()
    }
}

/// Заказ поставщику
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PurchaseOrder {
    #[serde(rename = "_id")]
    pub id: String,
    pub order_number: String,
    pub supplier_name: String,
    pub order_date: Option<String>,
    pub expected_date: Option<String>,
    pub total_amount: f64,
    #[serde(rename = "status")]
    pub state: PurchaseState,
    pub notes: String,
    pub created_at: Option<String>,
}

impl Record for PurchaseOrder {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PurchaseOrderDto {
    pub order_number: String,
    pub supplier_name: String,
    pub order_date: String,
    pub expected_date: String,
    pub total_amount: f64,
    #[serde(rename = "status")]
    pub state: PurchaseState,
    pub notes: String,
}

impl From<&PurchaseOrder> for PurchaseOrderDto {
    fn from(p: &PurchaseOrder) -> Self {
        Self {
            order_number: p.order_number.clone(),
            supplier_name: p.supplier_name.clone(),
            order_date: p.order_date.as_deref().map(normalize_input_date).unwrap_or_default(),
            expected_date: p
                .expected_date
                .as_deref()
                .map(normalize_input_date)
                .unwrap_or_default(),
            total_amount: p.total_amount,
            state: p.state,
            notes: p.notes.clone(),
        }
    }
}

impl PurchaseOrderDto {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "order_number", &self.order_number, "Order number");
        require(&mut errors, "supplier_name", &self.supplier_name, "Supplier");
        if self.total_amount < 0.0 {
            errors.add("total_amount", "Amount cannot be negative");
        }
        check_date_order(
            &mut errors,
            "expected_date",
            &self.order_date,
            &self.expected_date,
            "Expected date cannot be before the order date",
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_before_order_date() {
        let dto = PurchaseOrderDto {
            order_number: "PO-1".into(),
            supplier_name: "Shree Metals".into(),
            order_date: "2024-05-10".into(),
            expected_date: "2024-05-01".into(),
            ..Default::default()
        };
        assert!(dto.validate().contains("expected_date"));
    }

    #[test]
    fn test_state_travels_as_status() {
        let json = serde_json::to_value(PurchaseOrderDto {
            state: PurchaseState::Received,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json["status"], "Received");
    }
}
