pub mod home;
pub mod sections;

use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use sections::render_section;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}

/// Renders the active section. Switching sections unmounts the previous page,
/// so its list and draft state are dropped.
#[component]
pub fn SectionView() -> impl IntoView {
    let ctx = use_app_context();
    let active = Memo::new(move |_| ctx.active.get());

    move || {
        let key = active.get();
        leptos::logging::log!("render section: {}", key);
        render_section(&key)
    }
}
