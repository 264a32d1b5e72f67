use contracts::domain::a004_product_category::{ProductCategory, ProductCategoryDto};

use crate::shared::config::{ApiDomain, AppConfig};
use crate::shared::rest::JsonResource;

/// Also serves the bulk `POST …/reorder`.
pub type CategoryService = JsonResource<ProductCategory, ProductCategoryDto>;

pub fn category_service(config: &AppConfig) -> CategoryService {
    JsonResource::new(config.base_url(ApiDomain::Products), "/api/products/category")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_endpoint() {
        let service = category_service(&AppConfig::parse("[api]\nbase_url = \"http://shop.local\"").unwrap());
        assert_eq!(service.reorder_url(), "http://shop.local/api/products/category/reorder");
    }
}
