use contracts::domain::a008_service_ticket::{ServiceTicket, ServiceTicketDto};

use crate::shared::config::{ApiDomain, AppConfig};
use crate::shared::rest::JsonResource;

pub type TicketService = JsonResource<ServiceTicket, ServiceTicketDto>;

pub fn ticket_service(config: &AppConfig) -> TicketService {
    JsonResource::new(config.base_url(ApiDomain::ServiceTickets), "/api/service-tickets")
}
