use leptos::prelude::*;

use crate::layout::center::sections::SECTIONS;
use crate::layout::global_context::{use_app_context, HOME_SECTION};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};

/// Start page: a card per section.
#[component]
pub fn Overview() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <PageFrame page_id="overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Overview" subtitle="Choose a section to manage".to_string()>
                <span />
            </PageHeader>
            <div class="page__content">
                <div class="section-grid">
                    {SECTIONS
                        .iter()
                        .filter(|s| s.key != HOME_SECTION)
                        .map(|s| {
                            let key = s.key;
                            view! {
                                <button class="section-card" on:click=move |_| ctx.open_section(key)>
                                    <span class="section-card__icon">{icon(s.icon)}</span>
                                    <span class="section-card__label">{s.label}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}
