use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;
use crate::shared::notify::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone)]
struct ToastEntry {
    id: u64,
    level: ToastLevel,
    message: String,
}

/// Stack of transient notifications shown in the corner of the screen.
///
/// Provided once in the app root; pages get it with [`use_toasts`].
#[derive(Clone, Copy)]
pub struct ToastService {
    stack: RwSignal<Vec<ToastEntry>>,
    next_id: StoredValue<u64>,
    timeout_ms: u32,
}

impl ToastService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
            timeout_ms,
        }
    }

    pub fn push(&self, level: ToastLevel, message: &str) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.stack.update(|s| {
            s.push(ToastEntry {
                id,
                level,
                message: message.to_string(),
            })
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(svc.timeout_ms).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        // the host may be gone already
        self.stack.try_update(|s| s.retain(|e| e.id != id));
    }
}

impl Notifier for ToastService {
    fn success(&self, message: &str) {
        log::debug!("toast: {}", message);
        self.push(ToastLevel::Success, message);
    }

    fn error(&self, message: &str) {
        log::warn!("toast: {}", message);
        self.push(ToastLevel::Error, message);
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)")
}

/// Renders the toast stack. Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || svc.stack.get()
                key=|entry| entry.id
                children=move |entry| {
                    let (class, icon_name) = match entry.level {
                        ToastLevel::Success => ("toast toast--success", "check"),
                        ToastLevel::Error => ("toast toast--error", "alert"),
                    };
                    let id = entry.id;
                    view! {
                        <div class=class role="status">
                            {icon(icon_name)}
                            <span class="toast__message">{entry.message}</span>
                            <button
                                class="toast__close"
                                title="Close"
                                on:click=move |_| svc.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
