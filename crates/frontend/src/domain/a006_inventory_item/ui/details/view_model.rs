use contracts::domain::a006_inventory_item::{InventoryItem, InventoryItemDto};
use contracts::shared::validation::FieldErrors;

use crate::shared::form::{FormDraft, FormMode};

impl FormDraft for InventoryItemDto {
    type Record = InventoryItem;
    const LABEL: &'static str = "Stock item";

    fn from_record(_blank: &Self, record: &InventoryItem) -> Self {
        InventoryItemDto::from(record)
    }

    fn validate(&self, _mode: &FormMode) -> FieldErrors {
        InventoryItemDto::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;

    #[test]
    fn test_negative_quantity_is_rejected() {
        let mut form = FormState::new(InventoryItemDto::default());
        form.open_create();
        form.edit(|d| {
            d.product_name = "Copper wire 2.5mm".into();
            d.sku = "CW-25".into();
            d.quantity = -4;
        });
        assert!(!form.validate());
        assert!(form.error("quantity").is_some());
        assert_eq!(form.error("reorder_level"), None);
    }
}
