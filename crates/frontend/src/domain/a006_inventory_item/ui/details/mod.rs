mod model;
mod view;
mod view_model;

pub use model::{inventory_service, InventoryService};
pub use view::InventoryItemDetails;
