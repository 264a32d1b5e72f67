use contracts::domain::a005_product::ProductDto;
use contracts::shared::status::RecordStatus;
use leptos::prelude::*;

use super::model::{CategoryOption, ProductService};
use crate::shared::components::form_fields::{parse_number, NumberField, SelectField, TextAreaField, TextField};
use crate::shared::components::record_modal::RecordModal;
use crate::shared::components::status_badge::status_options;
use crate::shared::hooks::FormHandle;

#[component]
pub fn ProductDetails(
    form: FormHandle<ProductDto, ProductService>,
    #[prop(into)]
    categories: Signal<Vec<CategoryOption>>,
) -> impl IntoView {
    let read_only = form.read_only();
    let image_url = form.field(|d| d.image_url.clone());

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
                    label="SKU"
                    required=true
                    value=form.field(|d| d.sku.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.sku = v))
                    error=form.error("sku")
                    disabled=read_only
                />
            </div>
            <div class="form__row">
                <SelectField
                    label="Category"
                    placeholder="Select a category"
                    value=form.field(|d| d.category.clone())
                    options=categories
                    on_change=Callback::new(move |v: String| form.edit(|d| d.category = v))
                    error=form.error("category")
                    disabled=read_only
                />
                <NumberField
                    label="Price (Rs.)"
                    required=true
                    step="0.01"
                    value=form.field(|d| d.price.to_string())
                    on_input=Callback::new(move |v: String| {
                        let price = parse_number(&v).unwrap_or(f64::NAN);
                        form.edit(|d| d.price = price)
                    })
                    error=form.error("price")
                    disabled=read_only
                />
                <TextField
                    label="Unit"
                    placeholder="pcs, kg, m"
                    value=form.field(|d| d.unit.clone())
                    on_input=Callback::new(move |v: String| form.edit(|d| d.unit = v))
                    disabled=read_only
                />
            </div>
            <TextField
                label="Image URL"
                input_type="url"
                value=image_url
                on_input=Callback::new(move |v: String| form.edit(|d| d.image_url = v))
                disabled=read_only
            />
            {move || {
                let src = image_url.get();
                (!src.trim().is_empty()).then(|| view! { <img class="form__preview" src=src alt="product" /> })
            }}
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
