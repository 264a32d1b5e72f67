use contracts::shared::address::Address;
use leptos::prelude::*;

use crate::shared::components::form_fields::TextField;
use crate::shared::pincode::AddressField;

/// Address block shared by customers, suppliers and employees.
///
/// State and district are filled automatically once a 6-digit pincode is entered.
#[component]
pub fn AddressFields(
    #[prop(into)]
    address: Signal<Address>,
    on_input: Callback<(AddressField, String)>,
    #[prop(optional, into)]
    pincode_error: Signal<Option<String>>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let value = move |field: AddressField| Signal::derive(move || address.with(|a| field.get(a).to_string()));
    let setter = move |field: AddressField| Callback::new(move |v: String| on_input.run((field, v)));

    view! {
        <fieldset class="form__fieldset">
            <legend class="form__legend">"Address"</legend>
            <TextField label="Address line 1" value=value(AddressField::Line1) on_input=setter(AddressField::Line1) disabled=disabled />
            <TextField label="Address line 2" value=value(AddressField::Line2) on_input=setter(AddressField::Line2) disabled=disabled />
            <div class="form__row">
                <TextField
                    label="Pincode"
                    value=value(AddressField::Pincode)
                    on_input=setter(AddressField::Pincode)
                    error=pincode_error
                    placeholder="6 digits"
                    disabled=disabled
                />
                <TextField label="City" value=value(AddressField::City) on_input=setter(AddressField::City) disabled=disabled />
            </div>
            <div class="form__row">
                <TextField label="District" value=value(AddressField::District) on_input=setter(AddressField::District) disabled=disabled />
                <TextField label="State" value=value(AddressField::State) on_input=setter(AddressField::State) disabled=disabled />
            </div>
            <TextField label="Country" value=value(AddressField::Country) on_input=setter(AddressField::Country) disabled=disabled />
        </fieldset>
    }
}
