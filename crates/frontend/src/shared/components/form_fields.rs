//! Поля формы с подписью и сообщением об ошибке.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Text of a number input: empty means zero, anything unparsable is `None`.
pub fn parse_number<T: std::str::FromStr + Default>(text: &str) -> Option<T> {
    let text = text.trim();
    if text.is_empty() {
        return Some(T::default());
    }
    text.parse().ok()
}

fn field_class(error: Option<String>) -> &'static str {
    if error.is_some() {
        "form__input form__input--invalid"
    } else {
        "form__input"
    }
}

#[component]
fn FieldShell(
    label: &'static str,
    required: bool,
    error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            {children()}
            {move || error.get().map(|message| view! { <div class="form__error">{message}</div> })}
        </div>
    }
}

#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional)]
    required: bool,
    /// "text" (default), "email", "tel", "date", "url"
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional, into)]
    placeholder: Option<&'static str>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <FieldShell label=label required=required error=error>
            <input
                class=move || field_class(error.get())
                type=input_type.unwrap_or("text")
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </FieldShell>
    }
}

/// Numeric input. The DOM keeps the text, so partial input like "12." survives re-renders;
/// `on_input` receives the raw text, see [`parse_number`].
#[component]
pub fn NumberField(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional)]
    required: bool,
    #[prop(optional)]
    step: Option<&'static str>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let initial = value.get_untracked();
    view! {
        <FieldShell label=label required=required error=error>
            <input
                class=move || field_class(error.get())
                type="number"
                step=step.unwrap_or("any")
                prop:value=initial
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </FieldShell>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <FieldShell label=label required=required error=error>
            <textarea
                class=move || field_class(error.get())
                rows="3"
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </FieldShell>
    }
}

/// `options`: (value, label) pairs.
#[component]
pub fn SelectField(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    placeholder: Option<&'static str>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <FieldShell label=label required=required error=error>
            <select
                class=move || field_class(error.get())
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {move || {
                    let current = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(key, text)| {
                            let selected = key == current;
                            view! { <option value=key selected=selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </FieldShell>
    }
}

/// File picker with a preview of the current image or video.
#[component]
pub fn FileField(
    label: &'static str,
    /// MIME filter, e.g. "image/*"
    accept: &'static str,
    #[prop(into)]
    preview: Signal<Option<String>>,
    on_select: Callback<web_sys::File>,
    #[prop(optional)]
    video: bool,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            on_select.run(file);
        }
    };

    view! {
        <FieldShell label=label required=required error=error>
            <input
                class="form__input form__input--file"
                type="file"
                accept=accept
                disabled=move || disabled.get()
                on:change=on_change
            />
            {move || {
                preview
                    .get()
                    .map(|src| {
                        if video {
                            view! { <video class="form__preview" src=src controls=true></video> }.into_any()
                        } else {
                            view! { <img class="form__preview" src=src alt="preview" /> }.into_any()
                        }
                    })
            }}
        </FieldShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<f64>(" 12.5 "), Some(12.5));
        assert_eq!(parse_number::<f64>(""), Some(0.0));
        assert_eq!(parse_number::<i64>("-3"), Some(-3));
        assert_eq!(parse_number::<i64>("1.5"), None);
        assert_eq!(parse_number::<f64>("abc"), None);
    }
}
