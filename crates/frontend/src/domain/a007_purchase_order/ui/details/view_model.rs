use contracts::domain::a007_purchase_order::{PurchaseOrder, PurchaseOrderDto, PurchaseState};
use contracts::shared::validation::FieldErrors;

use crate::shared::form::{FormDraft, FormMode};

impl FormDraft for PurchaseOrderDto {
    type Record = PurchaseOrder;
    const LABEL: &'static str = "Purchase order";

    fn from_record(_blank: &Self, record: &PurchaseOrder) -> Self {
        PurchaseOrderDto::from(record)
    }

    fn validate(&self, _mode: &FormMode) -> FieldErrors {
        PurchaseOrderDto::validate(self)
    }
}

pub fn state_options() -> Vec<(String, String)> {
    PurchaseState::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect()
}
