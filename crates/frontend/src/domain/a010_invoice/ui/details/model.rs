use contracts::domain::a010_invoice::{Invoice, InvoiceDto};

use crate::shared::config::{ApiDomain, AppConfig};
use crate::shared::rest::JsonResource;

pub type InvoiceService = JsonResource<Invoice, InvoiceDto>;

pub fn invoice_service(config: &AppConfig) -> InvoiceService {
    JsonResource::new(config.base_url(ApiDomain::Billing), "/api/invoices")
}
