use contracts::domain::a001_customer::{Customer, CustomerDto};

use crate::shared::config::{ApiDomain, AppConfig};
use crate::shared::rest::JsonResource;

pub type CustomerService = JsonResource<Customer, CustomerDto>;

pub fn customer_service(config: &AppConfig) -> CustomerService {
    JsonResource::new(config.base_url(ApiDomain::Customers), "/api/customers")
}
