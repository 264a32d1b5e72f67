//! Customer form
//!
//! - model.rs: REST resource
//! - view_model.rs: draft rules (`FormDraft`)
//! - view.rs: modal with the fields

mod model;
mod view;
mod view_model;

pub use model::{customer_service, CustomerService};
pub use view::CustomerDetails;
