mod model;
mod view;
mod view_model;

pub use model::{purchase_service, PurchaseService};
pub use view::PurchaseOrderDetails;
pub use view_model::state_options;
