pub mod a001_customer;
pub mod a002_supplier;
pub mod a003_employee;
pub mod a004_product_category;
pub mod a005_product;
pub mod a006_inventory_item;
pub mod a007_purchase_order;
pub mod a008_service_ticket;
pub mod a009_advertisement;
pub mod a010_invoice;
