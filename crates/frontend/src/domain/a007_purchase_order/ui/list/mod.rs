use std::cmp::Ordering;

use contracts::domain::a007_purchase_order::{PurchaseOrder, PurchaseOrderDto, PurchaseState};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a007_purchase_order::ui::details::{purchase_service, PurchaseOrderDetails};
use crate::shared::components::action_buttons::ActionButtons;
use crate::shared::components::date_filter_dropdown::DateFilterDropdown;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::record_table::{Column, RecordTable};
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_badge::StateBadge;
use crate::shared::date_filter::DateFilterValue;
use crate::shared::date_utils::{format_money, format_optional_date};
use crate::shared::hooks::{use_app_config, use_record_form, use_record_list};
use crate::shared::icons::icon;
use crate::shared::list_utils::{compare_f64, compare_text, Sortable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

impl Sortable for PurchaseOrder {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "order_number" => compare_text(&self.order_number, &other.order_number),
            "supplier_name" => compare_text(&self.supplier_name, &other.supplier_name),
            "order_date" => self.order_date.cmp(&other.order_date),
            "expected_date" => self.expected_date.cmp(&other.expected_date),
            "total_amount" => compare_f64(self.total_amount, other.total_amount),
            "state" => self.state.as_str().cmp(other.state.as_str()),
            _ => Ordering::Equal,
        }
    }
}

fn state_color(state: PurchaseState) -> BadgeColor {
    match state {
        PurchaseState::Draft => BadgeColor::Informative,
        PurchaseState::Ordered => BadgeColor::Brand,
        PurchaseState::Received => BadgeColor::Success,
        PurchaseState::Cancelled => BadgeColor::Danger,
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::sortable("order_number", "Order #"),
        Column::sortable("supplier_name", "Supplier"),
        Column::sortable("order_date", "Ordered"),
        Column::sortable("expected_date", "Expected"),
        Column::sortable("total_amount", "Amount"),
        Column::sortable("state", "State"),
        Column::plain("actions", ""),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn PurchaseOrderList() -> impl IntoView {
    let service = purchase_service(&use_app_config());
    let list = use_record_list(service.clone());
    let form = use_record_form(PurchaseOrderDto::default(), service, Callback::new(move |_| list.refresh()));
    let is_open = form.is_open();

    let count = move |state: Option<PurchaseState>| {
        Signal::derive(move || {
            list.state.with(|s| {
                s.items
                    .iter()
                    .filter(|o| state.map_or(true, |st| o.state == st))
                    .count()
            })
        })
    };

    let row = Callback::new(move |(_, o): (usize, PurchaseOrder)| {
        let (for_view, for_edit) = (o.clone(), o.clone());
        let (id, number) = (o.id.clone(), o.order_number.clone());
        view! {
            <TableRow>
                <TableCell>{o.order_number.clone()}</TableCell>
                <TableCell><TableCellLayout truncate=true>{o.supplier_name.clone()}</TableCellLayout></TableCell>
                <TableCell>{format_optional_date(o.order_date.as_deref())}</TableCell>
                <TableCell>{format_optional_date(o.expected_date.as_deref())}</TableCell>
                <TableCell class="text-right">{format_money(o.total_amount)}</TableCell>
                <TableCell><StateBadge label=o.state.as_str() color=state_color(o.state) /></TableCell>
                <TableCell>
                    <ActionButtons
                        on_view=Callback::new(move |_| form.open_view(&for_view))
                        on_edit=Callback::new(move |_| form.open_edit(&for_edit))
                        on_delete=Callback::new(move |_| list.delete(id.clone(), number.clone()))
                    />
                </TableCell>
            </TableRow>
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a007_purchase_order--list" category=PAGE_CAT_LIST>
            <PageHeader title="Purchase orders" subtitle="Orders placed with suppliers".to_string()>
                <button class="button button--secondary" on:click=move |_| list.refresh()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button class="button button--primary" on:click=move |_| form.open_create()>
                    {icon("plus")}
                    "New order"
                </button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-cards">
                    <StatCard label="Total" icon_name="purchases" value=count(None) />
                    <StatCard label="Ordered" icon_name="calendar" value=count(Some(PurchaseState::Ordered)) />
                    <StatCard label="Received" icon_name="check" tone="success" value=count(Some(PurchaseState::Received)) />
                    <StatCard label="Cancelled" icon_name="x" tone="error" value=count(Some(PurchaseState::Cancelled)) />
                </div>

                <div class="filter-bar">
                    <SearchInput
                        placeholder="Search by order number or supplier".to_string()
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
                    empty_text="No purchase orders found"
                />
            </div>

            <Show when=move || is_open.get()>
                <PurchaseOrderDetails form=form />
            </Show>
        </PageFrame>
    }
}
