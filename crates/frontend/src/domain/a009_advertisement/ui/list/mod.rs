use std::cmp::Ordering;

use contracts::domain::a009_advertisement::{Advertisement, AdvertisementKind};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a009_advertisement::ui::details::{AdvertisementDetails, AdvertisementDraft, AdvertisementService};
use crate::shared::components::action_buttons::ActionButtons;
use crate::shared::components::date_filter_dropdown::DateFilterDropdown;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::record_table::{Column, RecordTable};
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::StatCards;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_filter::DateFilterValue;
use crate::shared::date_utils::format_optional_date;
use crate::shared::hooks::{use_app_config, use_record_form, use_record_list};
use crate::shared::icons::{icon, icon_sized};
use crate::shared::list_utils::{compare_text, Sortable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

impl Sortable for Advertisement {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => compare_text(&self.title, &other.title),
            "start_date" => self.start_date.cmp(&other.start_date),
            "end_date" => self.end_date.cmp(&other.end_date),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

fn columns(kind: AdvertisementKind) -> Vec<Column> {
    let mut columns = vec![
        Column::plain("preview", ""),
        Column::sortable("title", "Title"),
    ];
    if kind == AdvertisementKind::CardPoints {
        columns.push(Column::plain("description", "Points"));
    } else {
        columns.push(Column::plain("link", "Link"));
    }
    if kind.has_schedule() {
        columns.push(Column::sortable("start_date", "Starts"));
        columns.push(Column::sortable("end_date", "Ends"));
    }
    columns.push(Column::sortable("status", "Status"));
    columns.push(Column::sortable("created_at", "Created"));
    columns.push(Column::plain("actions", ""));
    columns
}

/// Start/end cells for kinds with a schedule
fn schedule_cells(kind: AdvertisementKind, ad: &Advertisement) -> Option<(String, String)> {
    kind.has_schedule().then(|| {
        (
            format_optional_date(ad.start_date.as_deref()),
            format_optional_date(ad.end_date.as_deref()),
        )
    })
}

fn preview_cell(ad: &Advertisement) -> AnyView {
    match (&ad.image, &ad.video) {
        (_, Some(_)) => view! { <span class="table__thumb table__thumb--video">{icon_sized("advertisements", 16)}</span> }.into_any(),
        (Some(src), None) if !src.is_empty() => view! { <img class="table__thumb" src=src.clone() alt="" /> }.into_any(),
        _ => view! { <span class="table__thumb table__thumb--empty"></span> }.into_any(),
    }
}

/// Страница рекламы: вкладки по видам материала, у каждой своя таблица.
#[component]
#[allow(non_snake_case)]
pub fn AdvertisementList() -> impl IntoView {
    let kind = RwSignal::new(AdvertisementKind::Cards);

    view! {
        <PageFrame page_id="a009_advertisement--list" category=PAGE_CAT_LIST>
            <div class="tabs">
                {AdvertisementKind::ALL
                    .into_iter()
                    .map(|k| {
                        view! {
                            <button
                                class="tabs__item"
                                class:tabs__item--active=move || kind.get() == k
                                on:click=move |_| {
                                    leptos::logging::log!("advertisement tab: {}", k.path());
                                    kind.set(k)
                                }
                            >
                                {k.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            // отдельный экземпляр списка на каждую вкладку
            {move || {
                let k = kind.get();
                view! { <AdvertisementKindList kind=k /> }
            }}
        </PageFrame>
    }
}

#[component]
#[allow(non_snake_case)]
fn AdvertisementKindList(kind: AdvertisementKind) -> impl IntoView {
    let service = AdvertisementService::for_kind(&use_app_config(), kind);
    let list = use_record_list(service.clone());
    let form = use_record_form(AdvertisementDraft::new(kind), service, Callback::new(move |_| list.refresh()));
    let is_open = form.is_open();

    let row = Callback::new(move |(_, ad): (usize, Advertisement)| {
        let (for_view, for_edit) = (ad.clone(), ad.clone());
        let (id, title) = (ad.id.clone(), ad.title.clone());
        let middle = if kind == AdvertisementKind::CardPoints {
            ad.description.clone()
        } else {
            ad.link.clone()
        };
        let preview = preview_cell(&ad);
        let schedule = schedule_cells(kind, &ad);
        let created = format_optional_date(ad.created_at.as_deref());
        let status = ad.status;
        view! {
            <TableRow>
                <TableCell>{preview}</TableCell>
                <TableCell><TableCellLayout truncate=true>{ad.title}</TableCellLayout></TableCell>
                <TableCell><TableCellLayout truncate=true>{middle}</TableCellLayout></TableCell>
                {schedule.map(|(start, end)| view! {
                    <TableCell>{start}</TableCell>
                    <TableCell>{end}</TableCell>
                })}
                <TableCell><StatusBadge status=status /></TableCell>
                <TableCell>{created}</TableCell>
                <TableCell>
                    <ActionButtons
                        on_view=Callback::new(move |_| form.open_view(&for_view))
                        on_edit=Callback::new(move |_| form.open_edit(&for_edit))
                        on_delete=Callback::new(move |_| list.delete(id.clone(), title.clone()))
                    />
                </TableCell>
            </TableRow>
        }
        .into_any()
    });

    view! {
        <PageHeader title=kind.label() subtitle="Advertising material shown in the shop".to_string()>
            <button class="button button--secondary" on:click=move |_| list.refresh()>
                {icon("refresh")}
                "Refresh"
            </button>
            <button class="button button--primary" on:click=move |_| form.open_create()>
                {icon("plus")}
                "New"
            </button>
        </PageHeader>

        <div class="page__content">
            <StatCards stats=list.stats() icon_name="advertisements" />

            <div class="filter-bar">
                <SearchInput
                    placeholder="Search by title".to_string()
                    active=list.search_active()
                    on_change=Callback::new(move |v: String| list.search(v))
                />
                <DateFilterDropdown on_change=Callback::new(move |v: DateFilterValue| list.set_date_filter(v)) />
            </div>

            <RecordTable
                items=list.items()
                columns=columns(kind)
                loading=list.loading()
                row=row
                empty_text="Nothing here yet"
            />
        </div>

        <Show when=move || is_open.get()>
            <AdvertisementDetails form=form kind=kind />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_follow_kind() {
        let keys = |kind| columns(kind).into_iter().map(|c| c.key).collect::<Vec<_>>();
        assert!(keys(AdvertisementKind::Posters).contains(&"end_date"));
        assert!(!keys(AdvertisementKind::Cards).contains(&"end_date"));
        assert!(keys(AdvertisementKind::CardPoints).contains(&"description"));
    }

    #[test]
    fn test_schedule_cells_only_for_scheduled_kinds() {
        let ad = Advertisement {
            title: "Monsoon sale".into(),
            start_date: Some("2024-06-01".into()),
            end_date: None,
            ..Default::default()
        };
        assert_eq!(
            schedule_cells(AdvertisementKind::Posters, &ad),
            Some(("01.06.2024".to_string(), "—".to_string()))
        );
        assert_eq!(schedule_cells(AdvertisementKind::Cards, &ad), None);
    }
}
