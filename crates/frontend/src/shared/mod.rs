pub mod api_utils;
pub mod attachment;
pub mod components;
pub mod config;
pub mod date_filter;
pub mod date_utils;
pub mod debounce;
pub mod delete;
pub mod form;
pub mod hooks;
pub mod http;
pub mod icons;
pub mod list_controller;
pub mod list_utils;
pub mod notify;
pub mod page_frame;
pub mod pincode;
pub mod reorder;
pub mod rest;
pub mod state;
pub mod toast;
pub mod whatsapp;

#[cfg(test)]
pub mod testing;
