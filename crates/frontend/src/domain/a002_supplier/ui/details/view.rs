use contracts::domain::a002_supplier::SupplierDto;
use contracts::shared::status::RecordStatus;
use leptos::prelude::*;

use super::model::SupplierService;
use crate::shared::components::address_fields::AddressFields;
use crate::shared::components::form_fields::{SelectField, TextField};
use crate::shared::components::record_modal::RecordModal;
use crate::shared::components::status_badge::status_options;
use crate::shared::hooks::FormHandle;

#[component]
pub fn SupplierDetails(form: FormHandle<SupplierDto, SupplierService>) -> impl IntoView {
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
                    label="Name"
                    required=true
                    value=form.field(|d| d.name.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.name = v))
                    error=form.error("name")
                    disabled=read_only
                />
                <TextField
                    label="Contact person"
                    value=form.field(|d| d.contact_person.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.contact_person = v))
                    disabled=read_only
                />
            </div>
            <div class="form__row">
                <TextField
                    label="Email"
                    input_type="email"
                    value=form.field(|d| d.email.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.email = v))
                    error=form.error("email")
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
                    label="GST number"
                    value=form.field(|d| d.gst_number.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.gst_number = v))
                    disabled=read_only
                />
                <SelectField
                    label="Status"
                    value=form.field(|d| d.status.as_str().to_string())
                    options=Signal::derive(status_options)
                    on_change=Callback::new(move |v: String| form.edit(|d| d.status = RecordStatus::from_str_lossy(&v)))
                    disabled=read_only
                />
            </div>
            <AddressFields
                address=form.address(|d| &d.address)
                on_input=form.address_input(|d| &mut d.address)
                pincode_error=form.error("pincode")
                disabled=read_only
            />
        </RecordModal>
    }
}
