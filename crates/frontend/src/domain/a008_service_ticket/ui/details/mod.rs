mod model;
mod view;
mod view_model;

pub use model::{ticket_service, TicketService};
pub use view::ServiceTicketDetails;
