//! Section registry: единственный источник правды для маппинга key → страница.

use leptos::prelude::*;

use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_supplier::ui::list::SupplierList;
use crate::domain::a003_employee::ui::list::EmployeeList;
use crate::domain::a004_product_category::ui::list::ProductCategoryList;
use crate::domain::a005_product::ui::list::ProductList;
use crate::domain::a006_inventory_item::ui::list::InventoryItemList;
use crate::domain::a007_purchase_order::ui::list::PurchaseOrderList;
use crate::domain::a008_service_ticket::ui::list::ServiceTicketList;
use crate::domain::a009_advertisement::ui::list::AdvertisementList;
use crate::domain::a010_invoice::ui::list::InvoiceList;
use crate::layout::center::home::Overview;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn s(key: &'static str, label: &'static str, icon: &'static str) -> Section {
    Section { key, label, icon }
}

pub const SECTIONS: &[Section] = &[
    s("overview", "Overview", "dashboard"),
    s("a001_customer", "Customers", "customers"),
    s("a002_supplier", "Suppliers", "suppliers"),
    s("a003_employee", "Employees", "employees"),
    s("a004_product_category", "Categories", "categories"),
    s("a005_product", "Products", "products"),
    s("a006_inventory_item", "Inventory", "inventory"),
    s("a007_purchase_order", "Purchase orders", "purchases"),
    s("a008_service_ticket", "Service tickets", "tickets"),
    s("a009_advertisement", "Advertisements", "advertisements"),
    s("a010_invoice", "Invoices", "invoices"),
];

pub fn section(key: &str) -> Option<Section> {
    SECTIONS.iter().copied().find(|s| s.key == key)
}

/// Рендерит страницу раздела по ключу; неизвестный ключ даёт заглушку.
pub fn render_section(key: &str) -> AnyView {
    match key {
        "overview" => view! { <Overview /> }.into_any(),
        "a001_customer" => view! { <CustomerList /> }.into_any(),
        "a002_supplier" => view! { <SupplierList /> }.into_any(),
        "a003_employee" => view! { <EmployeeList /> }.into_any(),
        "a004_product_category" => view! { <ProductCategoryList /> }.into_any(),
        "a005_product" => view! { <ProductList /> }.into_any(),
        "a006_inventory_item" => view! { <InventoryItemList /> }.into_any(),
        "a007_purchase_order" => view! { <PurchaseOrderList /> }.into_any(),
        "a008_service_ticket" => view! { <ServiceTicketList /> }.into_any(),
        "a009_advertisement" => view! { <AdvertisementList /> }.into_any(),
        "a010_invoice" => view! { <InvoiceList /> }.into_any(),
        other => {
            log::warn!("unknown section: {}", other);
            let other = other.to_string();
            view! {
                <div class="page">
                    <div class="page__content">
                        <div class="warning-box">"Unknown section: " {other}</div>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_keys_are_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            assert!(SECTIONS[i + 1..].iter().all(|b| b.key != a.key), "duplicate {}", a.key);
        }
        assert_eq!(section("a010_invoice").map(|s| s.label), Some("Invoices"));
        assert_eq!(section("a999_missing"), None);
    }
}
