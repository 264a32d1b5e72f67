use contracts::domain::a001_customer::{Customer, CustomerDto};
use contracts::shared::validation::FieldErrors;

use crate::shared::form::{FormDraft, FormMode};

impl FormDraft for CustomerDto {
    type Record = Customer;
    const LABEL: &'static str = "Customer";

    fn from_record(_blank: &Self, record: &Customer) -> Self {
        CustomerDto::from(record)
    }

    fn validate(&self, _mode: &FormMode) -> FieldErrors {
        CustomerDto::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;

    #[test]
    fn test_invalid_pincode_is_reported_on_address() {
        let mut form = FormState::new(CustomerDto::default());
        form.open_create();
        form.edit(|d| {
            d.name = "Ravi Kumar".into();
            d.address.pincode = "5600".into();
        });
        assert!(!form.validate());
        assert!(form.error("pincode").is_some());

        // ошибки пересчитываются на каждый ввод после первой проверки
        form.edit(|d| d.address.pincode = "560001".into());
        assert_eq!(form.error("pincode"), None);
    }
}
