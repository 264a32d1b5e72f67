pub mod action_buttons;
pub mod address_fields;
pub mod date_filter_dropdown;
pub mod form_fields;
pub mod page_header;
pub mod record_modal;
pub mod record_table;
pub mod search_input;
pub mod stat_card;
pub mod status_badge;
