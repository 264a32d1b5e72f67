mod model;
mod view;
mod view_model;

pub use model::{supplier_service, SupplierService};
pub use view::SupplierDetails;
