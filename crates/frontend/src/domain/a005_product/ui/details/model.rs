use contracts::domain::a004_product_category::ProductCategory;
use contracts::domain::a005_product::{Product, ProductDto};

use crate::shared::config::{ApiDomain, AppConfig};
use crate::shared::rest::{JsonResource, ListQuery, ListSource};

pub type ProductService = JsonResource<Product, ProductDto>;

pub fn product_service(config: &AppConfig) -> ProductService {
    JsonResource::new(config.base_url(ApiDomain::Products), "/api/products")
}

/// (category `_id`, name) for the category select.
pub type CategoryOption = (String, String);

/// Категории для выпадающего списка, в порядке каталога.
/// Ошибка загрузки не мешает работе с товарами: список просто пустой.
pub async fn load_category_options<S>(source: &S) -> Vec<CategoryOption>
where
    S: ListSource<ProductCategory> + ?Sized,
{
    match source.list(&ListQuery::default()).await {
        Ok(mut categories) => {
            categories.sort_by_key(|c| c.order);
            categories.into_iter().map(|c| (c.id, c.name)).collect()
        }
        Err(e) => {
            log::warn!("failed to load product categories: {}", e);
            Vec::new()
        }
    }
}

/// Name of the category with `id`; unknown ids are shown as is.
pub fn category_label(options: &[CategoryOption], id: &str) -> String {
    options
        .iter()
        .find(|(key, _)| key == id)
        .map(|(_, name)| name.clone())
        .unwrap_or_else(|| id.to_string())
}
