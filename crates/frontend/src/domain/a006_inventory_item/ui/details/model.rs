use contracts::domain::a006_inventory_item::{InventoryItem, InventoryItemDto};

use crate::shared::config::{ApiDomain, AppConfig};
use crate::shared::rest::JsonResource;

pub type InventoryService = JsonResource<InventoryItem, InventoryItemDto>;

pub fn inventory_service(config: &AppConfig) -> InventoryService {
    JsonResource::new(config.base_url(ApiDomain::Inventory), "/api/inventory")
}
