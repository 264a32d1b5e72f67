use contracts::domain::a003_employee::EmployeeDto;
use contracts::shared::status::RecordStatus;
use leptos::prelude::*;

use super::model::EmployeeService;
use crate::shared::components::address_fields::AddressFields;
use crate::shared::components::form_fields::{SelectField, TextField};
use crate::shared::components::record_modal::RecordModal;
use crate::shared::components::status_badge::status_options;
use crate::shared::hooks::FormHandle;

#[component]
pub fn EmployeeDetails(form: FormHandle<EmployeeDto, EmployeeService>) -> impl IntoView {
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
                    label="Full name"
                    required=true
                    value=form.field(|d| d.name.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.name = v))
                    error=form.error("name")
                    disabled=read_only
                />
                <TextField
                    label="Email"
                    input_type="email"
                    value=form.field(|d| d.email.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.email = v))
                    error=form.error("email")
                    disabled=read_only
                />
            </div>
            <div class="form__row">
                <TextField
                    label="Phone"
                    input_type="tel"
                    value=form.field(|d| d.phone.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.phone = v))
                    error=form.error("phone")
                    disabled=read_only
                />
                <TextField
                    label="Joining date"
                    input_type="date"
                    value=form.field(|d| d.joining_date.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.joining_date = v))
                    disabled=read_only
                />
            </div>
            <div class="form__row">
                <TextField
                    label="Department"
                    value=form.field(|d| d.department.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.department = v))
                    disabled=read_only
                />
                <TextField
                    label="Designation"
                    value=form.field(|d| d.designation.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.designation = v))
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
