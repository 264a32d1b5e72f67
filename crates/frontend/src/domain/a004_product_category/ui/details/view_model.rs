use contracts::domain::a004_product_category::{ProductCategory, ProductCategoryDto};
use contracts::shared::validation::FieldErrors;

use crate::shared::form::{FormDraft, FormMode};

// `order` не редактируется в форме: позицию меняют только кнопки в списке
impl FormDraft for ProductCategoryDto {
    type Record = ProductCategory;
    const LABEL: &'static str = "Category";

    fn from_record(_blank: &Self, record: &ProductCategory) -> Self {
        ProductCategoryDto::from(record)
    }

    fn validate(&self, _mode: &FormMode) -> FieldErrors {
        ProductCategoryDto::validate(self)
    }
}
