use contracts::domain::a004_product_category::ProductCategoryDto;
use contracts::shared::status::RecordStatus;
use leptos::prelude::*;

use super::model::CategoryService;
use crate::shared::components::form_fields::{SelectField, TextAreaField, TextField};
use crate::shared::components::record_modal::RecordModal;
use crate::shared::components::status_badge::status_options;
use crate::shared::hooks::FormHandle;

#[component]
pub fn ProductCategoryDetails(form: FormHandle<ProductCategoryDto, CategoryService>) -> impl IntoView {
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
                label="Name"
                required=true
                value=form.field(|d| d.name.clone())
                on_input=Callback::new(move |v: String| form.edit(|d| d.name = v))
                error=form.error("name")
                disabled=read_only
            />
            <TextAreaField
                label="Description"
                value=form.field(|d| d.description.clone())
                on_input=Callback::new(move |v: String| form.edit(|d| d.description = v))
                disabled=read_only
            />
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
