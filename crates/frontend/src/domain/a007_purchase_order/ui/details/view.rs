use contracts::domain::a007_purchase_order::{PurchaseOrderDto, PurchaseState};
use leptos::prelude::*;

use super::model::PurchaseService;
use super::view_model::state_options;
use crate::shared::components::form_fields::{parse_number, NumberField, SelectField, TextAreaField, TextField};
use crate::shared::components::record_modal::RecordModal;
use crate::shared::hooks::FormHandle;

#[component]
pub fn PurchaseOrderDetails(form: FormHandle<PurchaseOrderDto, PurchaseService>) -> impl IntoView {
    let read_only = form.read_only();

    view! {
        <RecordModal
            title=form.title()
            on_close=Callback::new(move |_| form.close())
            on_submit=Callback::new(move |_| form.submit())
            submitting=form.submitting()
            read_only=read_only
            wide=true
        >
            <div class="form__row">
                <TextField
                    label="Order number"
                    required=true
                    value=form.field(|d| d.order_number.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.order_number = v))
                    error=form.error("order_number")
                    disabled=read_only
                />
                <TextField
                    label="Supplier"
                    required=true
                    value=form.field(|d| d.supplier_name.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.supplier_name = v))
                    error=form.error("supplier_name")
                    disabled=read_only
                />
            </div>
            <div class="form__row">
                <TextField
                    label="Order date"
                    input_type="date"
                    value=form.field(|d| d.order_date.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.order_date = v))
                    disabled=read_only
                />
                <TextField
                    label="Expected delivery"
                    input_type="date"
                    value=form.field(|d| d.expected_date.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.expected_date = v))
                    error=form.error("expected_date")
                    disabled=read_only
                />
            </div>
            <div class="form__row">
                <NumberField
                    label="Total amount (Rs.)"
                    step="0.01"
                    value=form.field(|d| d.total_amount.to_string())
                    on_input=Callback::new(move |v: String| {
                        let amount = parse_number(&v).unwrap_or(-1.0);
                        form.edit(|d| d.total_amount = amount)
                    })
                    error=form.error("total_amount")
                    disabled=read_only
                />
                <SelectField
                    label="State"
                    value=form.field(|d| d.state.as_str().to_string())
                    options=Signal::derive(state_options)
                    on_change=Callback::new(move |v: String| form.edit(|d| d.state = PurchaseState::from_str_lossy(&v)))
                    disabled=read_only
                />
            </div>
            <TextAreaField
                label="Notes"
                value=form.field(|d| d.notes.clone())
                on_input=Callback::new(move |v: String| form.edit(|d| d.notes = v))
                disabled=read_only
            />
        </RecordModal>
    }
}
