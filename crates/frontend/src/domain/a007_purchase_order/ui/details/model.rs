use contracts::domain::a007_purchase_order::{PurchaseOrder, PurchaseOrderDto};

use crate::shared::config::{ApiDomain, AppConfig};
use crate::shared::rest::JsonResource;

pub type PurchaseService = JsonResource<PurchaseOrder, PurchaseOrderDto>;

pub fn purchase_service(config: &AppConfig) -> PurchaseService {
    JsonResource::new(config.base_url(ApiDomain::Purchases), "/api/purchases")
}
