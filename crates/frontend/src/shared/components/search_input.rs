use leptos::prelude::*;

use crate::shared::icons::icon_sized;

/// Поле поиска с кнопкой очистки.
///
/// Каждое нажатие уходит в `on_change` как есть; задержку перед запросом
/// делает список (`ListHandle::search`).
#[component]
pub fn SearchInput(
    #[prop(into)]
    on_change: Callback<String>,
    /// Highlights the box while a search is applied
    #[prop(optional, into)]
    active: Signal<bool>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };
    let (input_value, set_input_value) = signal(String::new());

    let clear = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon_sized("search", 16)}</span>
            <input
                type="text"
                class=move || {
                    if active.get() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_input_value.set(value.clone());
                    on_change.run(value);
                }
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=clear>
                    {icon_sized("x", 14)}
                </button>
            </Show>
        </div>
    }
}
