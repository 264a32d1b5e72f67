use contracts::domain::a002_supplier::{Supplier, SupplierDto};
use contracts::shared::validation::FieldErrors;

use crate::shared::form::{FormDraft, FormMode};

impl FormDraft for SupplierDto {
    type Record = Supplier;
    const LABEL: &'static str = "Supplier";

    fn from_record(_blank: &Self, record: &Supplier) -> Self {
        SupplierDto::from(record)
    }

    fn validate(&self, _mode: &FormMode) -> FieldErrors {
        SupplierDto::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;
    use contracts::shared::address::Address;

    #[test]
    fn test_edit_keeps_contact_person_and_address() {
        let supplier = Supplier {
            id: "s7".into(),
            name: "Deccan Steel".into(),
            contact_person: "Meera Iyer".into(),
            address: Address {
                city: "Pune".into(),
                pincode: "411001".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut form = FormState::new(SupplierDto::default());
        form.open_edit(&supplier);
        assert_eq!(form.draft.contact_person, "Meera Iyer");
        assert_eq!(form.draft.address.city, "Pune");
        assert!(form.validate());
        assert_eq!(form.title(), "Edit Supplier");
    }

    #[test]
    fn test_bad_email_is_rejected() {
        let mut form = FormState::new(SupplierDto::default());
        form.open_create();
        form.edit(|d| {
            d.name = "Deccan Steel".into();
            d.email = "sales-at-deccan".into();
        });
        assert!(!form.validate());
        assert!(form.error("email").is_some());
    }
}
