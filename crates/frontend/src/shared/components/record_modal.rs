//! Модальное окно формы записи: оверлей, заголовок, тело-форма, кнопки.

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon_sized;

#[component]
pub fn RecordModal(
    #[prop(into)]
    title: Signal<String>,
    on_close: Callback<()>,
    on_submit: Callback<()>,
    #[prop(into)]
    submitting: Signal<bool>,
    /// View mode: inputs are disabled and there is no Save button
    #[prop(optional, into)]
    read_only: Signal<bool>,
    #[prop(optional)]
    wide: bool,
    children: Children,
) -> impl IntoView {
    // close only when both press and release happened on the overlay itself,
    // so selecting text in an input and releasing outside keeps the modal open
    let pressed_on_overlay = RwSignal::new(false);
    let is_overlay = |ev: &ev::MouseEvent| matches!((ev.target(), ev.current_target()), (Some(t), Some(ct)) if t == ct);

    let request_close = move || {
        if submitting.get_untracked() {
            return;
        }
        // the overlay must not be removed during its own click dispatch
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let modal_class = if wide { "modal modal--wide" } else { "modal" };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=move |ev: ev::MouseEvent| pressed_on_overlay.set(is_overlay(&ev))
            on:click=move |ev: ev::MouseEvent| {
                let close = pressed_on_overlay.get_untracked() && is_overlay(&ev);
                pressed_on_overlay.set(false);
                if close {
                    request_close();
                }
            }
        >
            <div class=modal_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal__header">
                    <h2 class="modal__title">{move || title.get()}</h2>
                    <button class="button button--icon" title="Close" on:click=move |_| request_close()>
                        {icon_sized("x", 16)}
                    </button>
                </div>
                <form
                    class="modal__body form"
                    novalidate=true
                    on:submit=move |ev: ev::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    {children()}
                    <div class="modal__footer">
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| request_close()
                        >
                            {move || if read_only.get() { "Close" } else { "Cancel" }}
                        </button>
                        <Show when=move || !read_only.get()>
                            <button
                                type="submit"
                                class="button button--primary"
                                disabled=move || submitting.get()
                            >
                                {move || if submitting.get() { "Saving..." } else { "Save" }}
                            </button>
                        </Show>
                    </div>
                </form>
            </div>
        </div>
    }
}
