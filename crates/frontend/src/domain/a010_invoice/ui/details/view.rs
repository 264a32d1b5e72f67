use contracts::domain::a010_invoice::{InvoiceDto, InvoiceState};
use leptos::prelude::*;

use super::model::InvoiceService;
use super::view_model::state_options;
use crate::shared::components::form_fields::{parse_number, NumberField, SelectField, TextField};
use crate::shared::components::record_modal::RecordModal;
use crate::shared::hooks::FormHandle;

#[component]
pub fn InvoiceDetails(form: FormHandle<InvoiceDto, InvoiceService>) -> impl IntoView {
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
                    label="Invoice number"
                    required=true
                    value=form.field(|d| d.invoice_number.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.invoice_number = v))
                    error=form.error("invoice_number")
                    disabled=read_only
                />
                <SelectField
                    label="State"
                    value=form.field(|d| d.state.as_str().to_string())
                    options=Signal::derive(state_options)
                    on_change=Callback::new(move |v: String| form.edit(|d| d.state = InvoiceState::from_str_lossy(&v)))
                    disabled=read_only
                />
            </div>
            <div class="form__row">
                <TextField
                    label="Customer"
                    required=true
                    value=form.field(|d| d.customer_name.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.customer_name = v))
                    error=form.error("customer_name")
                    disabled=read_only
                />
                <TextField
                    label="Phone"
                    input_type="tel"
                    value=form.field(|d| d.phone.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.phone = v))
                    error=form.error("phone")
                    disabled=read_only
                />
            </div>
            <div class="form__row">
                <TextField
                    label="Issue date"
                    input_type="date"
                    value=form.field(|d| d.issue_date.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.issue_date = v))
                    disabled=read_only
                />
                <TextField
                    label="Due date"
                    input_type="date"
                    value=form.field(|d| d.due_date.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.due_date = v))
                    error=form.error("due_date")
                    disabled=read_only
                />
            </div>
            <NumberField
                label="Amount (Rs.)"
                step="0.01"
                required=true
                value=form.field(|d| d.amount.to_string())
                on_input=Callback::new(move |v: String| {
                    // непарсящийся ввод не пройдёт проверку "> 0"
                    let amount = parse_number(&v).unwrap_or(0.0);
                    form.edit(|d| d.amount = amount)
                })
                error=form.error("amount")
                disabled=read_only
            />
        </RecordModal>
    }
}
