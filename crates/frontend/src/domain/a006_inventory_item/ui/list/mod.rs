use std::cmp::Ordering;

use contracts::domain::a006_inventory_item::{InventoryItem, InventoryItemDto};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a006_inventory_item::ui::details::{inventory_service, InventoryItemDetails};
use crate::shared::components::action_buttons::ActionButtons;
use crate::shared::components::date_filter_dropdown::DateFilterDropdown;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::record_table::{Column, RecordTable};
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::{StatCard, StatCards};
use crate::shared::components::status_badge::{StateBadge, StatusBadge};
use crate::shared::date_filter::DateFilterValue;
use crate::shared::hooks::{use_app_config, use_record_form, use_record_list};
use crate::shared::icons::icon;
use crate::shared::list_utils::{compare_text, Sortable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

impl Sortable for InventoryItem {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "product_name" => compare_text(&self.product_name, &other.product_name),
            "sku" => compare_text(&self.sku, &other.sku),
            "warehouse" => compare_text(&self.warehouse, &other.warehouse),
            "quantity" => self.quantity.cmp(&other.quantity),
            "reorder_level" => self.reorder_level.cmp(&other.reorder_level),
            _ => Ordering::Equal,
        }
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::sortable("product_name", "Product"),
        Column::sortable("sku", "SKU"),
        Column::sortable("warehouse", "Warehouse"),
        Column::sortable("quantity", "Quantity"),
        Column::sortable("reorder_level", "Reorder level"),
        Column::plain("status", "Status"),
        Column::plain("actions", ""),
    ]
}

fn low_stock_count(items: &[InventoryItem]) -> usize {
    items.iter().filter(|i| i.needs_reorder()).count()
}

#[component]
#[allow(non_snake_case)]
pub fn InventoryItemList() -> impl IntoView {
    let service = inventory_service(&use_app_config());
    let list = use_record_list(service.clone());
    let form = use_record_form(InventoryItemDto::default(), service, Callback::new(move |_| list.refresh()));
    let is_open = form.is_open();
    let low_stock = Signal::derive(move || {
        list.state.with(|s| low_stock_count(&s.items))
    });

    let row = Callback::new(move |(_, item): (usize, InventoryItem)| {
        let (for_view, for_edit) = (item.clone(), item.clone());
        let (id, name) = (item.id.clone(), item.product_name.clone());
        // значения вычисляются до view!, чтобы дочерние замыкания не забирали item
        let low_stock = item.needs_reorder();
        let InventoryItem { product_name, sku, warehouse, quantity, reorder_level, status, .. } = item;
        view! {
            <TableRow>
                <TableCell><TableCellLayout truncate=true>{product_name}</TableCellLayout></TableCell>
                <TableCell>{sku}</TableCell>
                <TableCell>{warehouse}</TableCell>
                <TableCell class="text-right">{quantity}</TableCell>
                <TableCell class="text-right">{reorder_level}</TableCell>
                <TableCell>
                    <Flex gap=FlexGap::Small>
                        <StatusBadge status=status />
                        {low_stock.then(|| view! {
                            <StateBadge label="Low stock" color=BadgeColor::Danger />
                        })}
                    </Flex>
                </TableCell>
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
        <PageFrame page_id="a006_inventory_item--list" category=PAGE_CAT_LIST>
            <PageHeader title="Inventory" subtitle="Stock on hand per warehouse".to_string()>
                <button class="button button--secondary" on:click=move |_| list.refresh()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button class="button button--primary" on:click=move |_| form.open_create()>
                    {icon("plus")}
                    "New stock item"
                </button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-cards-row">
                    <StatCards stats=list.stats() icon_name="inventory" />
                    <StatCard label="Low stock" icon_name="alert" tone="error" value=low_stock />
                </div>

                <div class="filter-bar">
                    <SearchInput
                        placeholder="Search by product, SKU or warehouse".to_string()
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
                    empty_text="No stock items found"
                />
            </div>

            <Show when=move || is_open.get()>
                <InventoryItemDetails form=form />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_stock_includes_items_at_reorder_level() {
        let item = |quantity, reorder_level| InventoryItem {
            product_name: "Pump".into(),
            quantity,
            reorder_level,
            ..Default::default()
        };
        let items = vec![item(3, 5), item(5, 5), item(12, 5)];
        assert_eq!(low_stock_count(&items), 2);
        assert_eq!(low_stock_count(&[]), 0);
    }
}
