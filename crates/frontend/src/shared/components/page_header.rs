use leptos::prelude::*;

/// Page header: title, optional subtitle, actions on the right
#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Buttons shown on the right
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page__subtitle">{s}</div>
                })}
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
