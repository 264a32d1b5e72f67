use contracts::domain::a005_product::{Product, ProductDto};
use contracts::shared::validation::FieldErrors;

use crate::shared::form::{FormDraft, FormMode};

impl FormDraft for ProductDto {
    type Record = Product;
    const LABEL: &'static str = "Product";

    fn from_record(_blank: &Self, record: &Product) -> Self {
        ProductDto::from(record)
    }

    fn validate(&self, _mode: &FormMode) -> FieldErrors {
        ProductDto::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;

    #[test]
    fn test_category_is_optional_price_is_checked() {
        let mut form = FormState::new(ProductDto::default());
        form.open_create();
        form.edit(|d| {
            d.name = "Submersible pump".into();
            d.sku = "PMP-100".into();
            d.price = f64::NAN;
        });
        assert!(!form.validate());
        assert_eq!(form.error("category"), None);
        assert!(form.error("price").is_some());

        form.edit(|d| d.price = -1.0);
        assert!(form.error("price").is_some());

        form.edit(|d| d.price = 4999.0);
        assert!(form.errors.is_empty());
        assert!(form.validate());
    }
}
