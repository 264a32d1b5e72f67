use contracts::domain::a010_invoice::{Invoice, InvoiceDto, InvoiceState};
use contracts::shared::validation::FieldErrors;

use crate::shared::form::{FormDraft, FormMode};

impl FormDraft for InvoiceDto {
    type Record = Invoice;
    const LABEL: &'static str = "Invoice";

    fn from_record(_blank: &Self, record: &Invoice) -> Self {
        InvoiceDto::from(record)
    }

    fn validate(&self, _mode: &FormMode) -> FieldErrors {
        InvoiceDto::validate(self)
    }
}

pub(super) fn state_options() -> Vec<(String, String)> {
    InvoiceState::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;

    #[test]
    fn test_amount_must_be_positive() {
        let mut form = FormState::new(InvoiceDto::default());
        form.open_create();
        form.edit(|d| {
            d.invoice_number = "INV-2024-031".into();
            d.customer_name = "Meena Stores".into();
        });
        assert!(!form.validate());
        assert_eq!(
            form.error("amount").as_deref(),
            Some("Amount must be greater than zero")
        );

        form.edit(|d| d.amount = 4500.0);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_due_before_issue() {
        let invoice = Invoice {
            id: "inv1".into(),
            invoice_number: "INV-2024-031".into(),
            customer_name: "Meena Stores".into(),
            issue_date: Some("2024-06-10T00:00:00Z".into()),
            due_date: Some("2024-06-01".into()),
            amount: 1200.0,
            ..Default::default()
        };
        let mut form = FormState::new(InvoiceDto::default());
        form.open_edit(&invoice);
        assert_eq!(form.draft.issue_date, "2024-06-10");
        assert!(!form.validate());
        assert!(form.error("due_date").is_some());
        assert_eq!(state_options().len(), 4);
    }
}
