use contracts::domain::a006_inventory_item::InventoryItemDto;
use contracts::shared::status::RecordStatus;
use leptos::prelude::*;

use super::model::InventoryService;
use crate::shared::components::form_fields::{parse_number, NumberField, SelectField, TextField};
use crate::shared::components::record_modal::RecordModal;
use crate::shared::components::status_badge::status_options;
use crate::shared::hooks::FormHandle;

#[component]
pub fn InventoryItemDetails(form: FormHandle<InventoryItemDto, InventoryService>) -> impl IntoView {
    let read_only = form.read_only();

    view! {
        <RecordModal
            title=form.title()
            on_close=Callback::new(move |_| form.close())
            on_submit=Callback::new(move |_| form.submit())
            submitting=form.submitting()
            read_only=read_only
        >
            <TextField
                label="Product"
                required=true
                value=form.field(|d| d.product_name.clone())
                on_input=Callback::new(move |v: String| form.edit(|d| d.product_name = v))
                error=form.error("product_name")
                disabled=read_only
            />
            <div class="form__row">
                <TextField
                    label="SKU"
                    required=true
                    value=form.field(|d| d.sku.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.sku = v))
                    error=form.error("sku")
                    disabled=read_only
                />
                <TextField
                    label="Warehouse"
                    value=form.field(|d| d.warehouse.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.warehouse = v))
                    disabled=read_only
                />
            </div>
            <div class="form__row">
                <NumberField
                    label="Quantity"
                    step="1"
                    value=form.field(|d| d.quantity.to_string())
                    on_input=Callback::new(move |v: String| {
                        if let Some(quantity) = parse_number(&v) {
                            form.edit(|d| d.quantity = quantity)
                        }
                    })
                    error=form.error("quantity")
                    disabled=read_only
                />
                <NumberField
                    label="Reorder level"
                    step="1"
                    value=form.field(|d| d.reorder_level.to_string())
                    on_input=Callback::new(move |v: String| {
                        if let Some(level) = parse_number(&v) {
                            form.edit(|d| d.reorder_level = level)
                        }
                    })
                    error=form.error("reorder_level")
                    disabled=read_only
                />
            </div>
            <SelectField
                label="Status"
                value=form.field(|d| d.status.as_str().to_string())
                options=Signal::derive(status_options)
                on_change=Callback::new(move |v: String| form.edit(|d| d.status = RecordStatus::from_str_lossy(&v)))
                disabled=read_only
            />
        </RecordModal>
    }
}
