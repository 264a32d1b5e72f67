use std::cmp::Ordering;

use contracts::domain::a005_product::{Product, ProductDto};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a004_product_category::ui::details::category_service;
use crate::domain::a005_product::ui::details::{
    category_label, load_category_options, product_service, CategoryOption, ProductDetails,
};
use crate::shared::components::action_buttons::ActionButtons;
use crate::shared::components::date_filter_dropdown::DateFilterDropdown;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::record_table::{Column, RecordTable};
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::StatCards;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_filter::DateFilterValue;
use crate::shared::date_utils::format_money;
use crate::shared::hooks::{use_app_config, use_record_form, use_record_list};
use crate::shared::icons::icon;
use crate::shared::list_utils::{compare_f64, compare_text, Sortable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => compare_text(&self.name, &other.name),
            "sku" => compare_text(&self.sku, &other.sku),
            "price" => compare_f64(self.price, other.price),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::plain("image", ""),
        Column::sortable("name", "Name"),
        Column::sortable("sku", "SKU"),
        Column::plain("category", "Category"),
        Column::sortable("price", "Price"),
        Column::sortable("status", "Status"),
        Column::plain("actions", ""),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let config = use_app_config();
    let service = product_service(&config);
    let list = use_record_list(service.clone());
    let form = use_record_form(ProductDto::default(), service, Callback::new(move |_| list.refresh()));
    let is_open = form.is_open();

    let categories = RwSignal::new(Vec::<CategoryOption>::new());
    let categories_source = category_service(&config);
    spawn_local(async move {
        let options = load_category_options(&categories_source).await;
        categories.try_set(options);
    });

    let row = Callback::new(move |(_, p): (usize, Product)| {
        let (for_view, for_edit) = (p.clone(), p.clone());
        let (id, name) = (p.id.clone(), p.name.clone());
        let category_id = p.category.clone();
        let unit = if p.unit.is_empty() { String::new() } else { format!(" / {}", p.unit) };
        view! {
            <TableRow>
                <TableCell>
                    {(!p.image_url.is_empty()).then(|| view! {
                        <img class="table__thumb" src=p.image_url.clone() alt="" />
                    })}
                </TableCell>
                <TableCell><TableCellLayout truncate=true>{p.name.clone()}</TableCellLayout></TableCell>
                <TableCell>{p.sku.clone()}</TableCell>
                <TableCell>{move || categories.with(|c| category_label(c, &category_id))}</TableCell>
                <TableCell class="text-right">{format_money(p.price)}{unit}</TableCell>
                <TableCell><StatusBadge status=p.status /></TableCell>
                <TableCell>
                    <ActionButtons
                        on_view=Callback::new(move |_| form.open_view(&for_view))
                        on_edit=Callback::new(move |_| form.open_edit(&for_edit))
                        on_delete=Callback::new(move |_| list.delete(id.clone(), name.clone()))
                    />
                </TableCell>
            </TableRow>
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a005_product--list" category=PAGE_CAT_LIST>
            <PageHeader title="Products" subtitle="Catalog items and prices".to_string()>
                <button class="button button--secondary" on:click=move |_| list.refresh()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button class="button button--primary" on:click=move |_| form.open_create()>
                    {icon("plus")}
                    "New product"
                </button>
            </PageHeader>

            <div class="page__content">
                <StatCards stats=list.stats() icon_name="products" />

                <div class="filter-bar">
                    <SearchInput
                        placeholder="Search by name or SKU".to_string()
                        active=list.search_active()
                        on_change=Callback::new(move |v: String| list.search(v))
                    />
                    <DateFilterDropdown on_change=Callback::new(move |v: DateFilterValue| list.set_date_filter(v)) />
                </div>

                <RecordTable
                    items=list.items()
                    columns=columns()
                    loading=list.loading()
                    row=row
                    empty_text="No products found"
                />
            </div>

            <Show when=move || is_open.get()>
                <ProductDetails form=form categories=categories />
            </Show>
        </PageFrame>
    }
}
