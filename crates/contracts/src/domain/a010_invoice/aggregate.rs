use serde::{Deserialize, Serialize};

use crate::shared::dates::normalize_input_date;
use crate::shared::record::Record;
use crate::shared::validation::{check_date_order, check_phone, require, FieldErrors};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceState {
    #[default]
    Unpaid,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceState {
    pub const ALL: [InvoiceState; 4] = [
        InvoiceState::Unpaid,
        InvoiceState::Paid,
        InvoiceState::Overdue,
        InvoiceState::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceState::Unpaid => "Unpaid",
            InvoiceState::Paid => "Paid",
            InvoiceState::Overdue => "Overdue",
            InvoiceState::Cancelled => "Cancelled",
        }
    }

    pub fn from_str_lossy(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(value))
            .unwrap_or_default()
    }
}

/// Счёт на оплату (раздел биллинга)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Invoice {
    #[serde(rename = "_id")]
    pub id: String,
    pub invoice_number: String,
    pub customer_name: String,
    pub phone: String,
    pub issue_date: Option<String>,
    pub due_date: Option<String>,
    pub amount: f64,
    #[serde(rename = "status")]
    pub state: InvoiceState,
    pub created_at: Option<String>,
}

impl Invoice {
    /// Text of the payment reminder sent over WhatsApp
    pub fn reminder_text(&self) -> String {
        let due = self
            .due_date
            .as_deref()
            .map(normalize_input_date)
            .filter(|d| !d.is_empty());
        match due {
            Some(due) => format!(
                "Dear {}, invoice {} for Rs. {:.2} is due on {}.",
                self.customer_name, self.invoice_number, self.amount, due
            ),
            None => format!(
                "Dear {}, invoice {} for Rs. {:.2} is pending.",
                self.customer_name, self.invoice_number, self.amount
            ),
        }
    }
}

impl Record for Invoice {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceDto {
    pub invoice_number: String,
    pub customer_name: String,
    pub phone: String,
    pub issue_date: String,
    pub due_date: String,
    pub amount: f64,
    #[serde(rename = "status")]
    pub state: InvoiceState,
}

impl From<&Invoice> for InvoiceDto {
    fn from(i: &Invoice) -> Self {
        Self {
            invoice_number: i.invoice_number.clone(),
            customer_name: i.customer_name.clone(),
            phone: i.phone.clone(),
            issue_date: i.issue_date.as_deref().map(normalize_input_date).unwrap_or_default(),
            due_date: i.due_date.as_deref().map(normalize_input_date).unwrap_or_default(),
            amount: i.amount,
            state: i.state,
        }
    }
}

impl InvoiceDto {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "invoice_number", &self.invoice_number, "Invoice number");
        require(&mut errors, "customer_name", &self.customer_name, "Customer name");
        check_phone(&mut errors, "phone", &self.phone);
        if !(self.amount > 0.0) {
            errors.add("amount", "Amount must be greater than zero");
        }
        check_date_order(
            &mut errors,
            "due_date",
            &self.issue_date,
            &self.due_date,
            "Due date cannot be before the issue date",
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_text() {
        let invoice = Invoice {
            invoice_number: "INV-7".into(),
            customer_name: "Asha".into(),
            amount: 1500.0,
            due_date: Some("2024-07-01T00:00:00.000Z".into()),
            ..Default::default()
        };
        assert_eq!(
            invoice.reminder_text(),
            "Dear Asha, invoice INV-7 for Rs. 1500.00 is due on 2024-07-01."
        );
    }

    #[test]
    fn test_amount_must_be_positive() {
        let dto = InvoiceDto {
            invoice_number: "INV-7".into(),
            customer_name: "Asha".into(),
            ..Default::default()
        };
        assert_eq!(dto.validate().get("amount"), Some("Amount must be greater than zero"));
    }
}
