mod model;
mod view;
mod view_model;

pub use model::{invoice_service, InvoiceService};
pub use view::InvoiceDetails;
