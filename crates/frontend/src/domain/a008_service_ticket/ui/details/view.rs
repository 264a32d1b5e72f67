use contracts::domain::a008_service_ticket::{ServiceTicketDto, TicketPriority, TicketState};
use leptos::prelude::*;

use super::model::TicketService;
use super::view_model::{priority_options, state_options};
use crate::shared::components::form_fields::{SelectField, TextAreaField, TextField};
use crate::shared::components::record_modal::RecordModal;
use crate::shared::hooks::FormHandle;

#[component]
pub fn ServiceTicketDetails(form: FormHandle<ServiceTicketDto, TicketService>) -> impl IntoView {
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
                label="Title"
                required=true
                value=form.field(|d| d.title.clone())
                on_input=Callback::new(move |v: String| form.edit(|d| d.title = v))
                error=form.error("title")
                disabled=read_only
            />
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
                <SelectField
                    label="Priority"
                    value=form.field(|d| d.priority.as_str().to_string())
                    options=Signal::derive(priority_options)
                    on_change=Callback::new(move |v: String| form.edit(|d| d.priority = TicketPriority::from_str_lossy(&v)))
                    disabled=read_only
                />
                <SelectField
                    label="State"
                    value=form.field(|d| d.state.as_str().to_string())
                    options=Signal::derive(state_options)
                    on_change=Callback::new(move |v: String| form.edit(|d| d.state = TicketState::from_str_lossy(&v)))
                    disabled=read_only
                />
            </div>
            <TextAreaField
                label="Description"
                value=form.field(|d| d.description.clone())
                on_input=Callback::new(move |v: String| form.edit(|d| d.description = v))
                disabled=read_only
            />
        </RecordModal>
    }
}
