use contracts::domain::a002_supplier::{Supplier, SupplierDto};

use crate::shared::config::{ApiDomain, AppConfig};
use crate::shared::rest::JsonResource;

pub type SupplierService = JsonResource<Supplier, SupplierDto>;

pub fn supplier_service(config: &AppConfig) -> SupplierService {
    JsonResource::new(config.base_url(ApiDomain::Suppliers), "/api/suppliers")
}
