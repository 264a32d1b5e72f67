use std::cmp::Ordering;

use contracts::domain::a004_product_category::{ProductCategory, ProductCategoryDto};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_product_category::ui::details::{category_service, ProductCategoryDetails};
use crate::shared::components::action_buttons::{ActionButtons, RowIconButton};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::record_table::{Column, RecordTable};
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::StatCards;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::hooks::{use_app_config, use_record_form, use_record_list};
use crate::shared::icons::icon;
use crate::shared::list_utils::Sortable;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::reorder::MoveDirection;

// Порядок строк задаёт только поле order: сортировка по колонкам и фильтр по дате
// сломали бы соответствие индекса строки и позиции в списке.
impl Sortable for ProductCategory {
    fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
        self.order.cmp(&other.order)
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::plain("order", "#"),
        Column::plain("name", "Name"),
        Column::plain("description", "Description"),
        Column::plain("status", "Status"),
        Column::plain("actions", ""),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn ProductCategoryList() -> impl IntoView {
    let service = category_service(&use_app_config());
    let list = use_record_list(service.clone());
    let form = use_record_form(ProductCategoryDto::default(), service, Callback::new(move |_| list.refresh()));
    let is_open = form.is_open();
    let search_active = list.search_active();
    let count = Signal::derive(move || list.state.with(|s| s.items.len()));

    let row = Callback::new(move |(index, c): (usize, ProductCategory)| {
        let (for_view, for_edit) = (c.clone(), c.clone());
        let (id, name) = (c.id.clone(), c.name.clone());
        let first = index == 0;
        view! {
            <TableRow>
                <TableCell>{c.order + 1}</TableCell>
                <TableCell><TableCellLayout truncate=true>{c.name.clone()}</TableCellLayout></TableCell>
                <TableCell><TableCellLayout truncate=true>{c.description.clone()}</TableCellLayout></TableCell>
                <TableCell><StatusBadge status=c.status /></TableCell>
                <TableCell>
                    <ActionButtons
                        on_view=Callback::new(move |_| form.open_view(&for_view))
                        on_edit=Callback::new(move |_| form.open_edit(&for_edit))
                        on_delete=Callback::new(move |_| list.delete(id.clone(), name.clone()))
                    >
                        <RowIconButton
                            title="Move up"
                            icon_name="arrow-up"
                            disabled=Signal::derive(move || first || search_active.get())
                            on_click=Callback::new(move |_| list.move_item(index, MoveDirection::Up))
                        />
                        <RowIconButton
                            title="Move down"
                            icon_name="arrow-down"
                            disabled=Signal::derive(move || index + 1 >= count.get() || search_active.get())
                            on_click=Callback::new(move |_| list.move_item(index, MoveDirection::Down))
                        />
                    </ActionButtons>
                </TableCell>
            </TableRow>
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a004_product_category--list" category=PAGE_CAT_LIST>
            <PageHeader title="Product categories" subtitle="Use the arrows to set the catalog order".to_string()>
                <button class="button button--secondary" on:click=move |_| list.refresh()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button class="button button--primary" on:click=move |_| form.open_create()>
                    {icon("plus")}
                    "New category"
                </button>
            </PageHeader>

            <div class="page__content">
                <StatCards stats=list.stats() icon_name="categories" />

                <div class="filter-bar">
                    <SearchInput
                        placeholder="Search categories".to_string()
                        active=search_active
                        on_change=Callback::new(move |v: String| list.search(v))
                    />
                </div>

                <RecordTable
                    items=list.items()
                    columns=columns()
                    loading=list.loading()
                    row=row
                    empty_text="No categories yet"
                />
            </div>

            <Show when=move || is_open.get()>
                <ProductCategoryDetails form=form />
            </Show>
        </PageFrame>
    }
}
