use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::shared::icons::icon_sized;

/// Per-row view / edit / delete triggers. Extra buttons go in `children`.
#[component]
pub fn ActionButtons(
    #[prop(optional)]
    on_view: Option<Callback<()>>,
    #[prop(optional)]
    on_edit: Option<Callback<()>>,
    #[prop(optional)]
    on_delete: Option<Callback<()>>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let button = |cb: Callback<()>, title: &'static str, icon_name: &'static str, class: &'static str| {
        view! {
            <button
                class=class
                title=title
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    cb.run(());
                }
            >
                {icon_sized(icon_name, 16)}
            </button>
        }
    };

    view! {
        <div class="table__actions">
            {children.map(|c| c())}
            {on_view.map(|cb| button(cb, "View", "eye", "button button--icon"))}
            {on_edit.map(|cb| button(cb, "Edit", "edit", "button button--icon"))}
            {on_delete.map(|cb| button(cb, "Delete", "trash", "button button--icon button--danger"))}
        </div>
    }
}

/// Icon button for additional row actions (move up/down, WhatsApp).
#[component]
pub fn RowIconButton(
    title: &'static str,
    icon_name: &'static str,
    on_click: Callback<()>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            class="button button--icon"
            title=title
            disabled=move || disabled.get()
            on:click=move |ev: MouseEvent| {
                ev.stop_propagation();
                on_click.run(());
            }
        >
            {icon_sized(icon_name, 16)}
        </button>
    }
}
