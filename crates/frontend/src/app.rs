use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::center::SectionView;
use crate::layout::Shell;
use crate::shared::config::AppConfig;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Toasts are shared by every page; one host renders them.
    provide_context(ToastService::new(config.notifications.toast_timeout_ms));
    provide_context(config);

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    ctx.init_url_sync();
    provide_context(ctx);

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <SectionView /> }.into_any()
        />
        <ToastHost />
    }
}
