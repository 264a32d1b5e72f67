use std::cmp::Ordering;

use contracts::domain::a001_customer::{Customer, CustomerDto};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_customer::ui::details::{customer_service, CustomerDetails};
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
use crate::shared::icons::icon;
use crate::shared::list_utils::{compare_text, Sortable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

impl Sortable for Customer {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => compare_text(&self.name, &other.name),
            "company" => compare_text(&self.company, &other.company),
            "email" => compare_text(&self.email, &other.email),
            "city" => compare_text(&self.address.city, &other.address.city),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::sortable("name", "Name"),
        Column::sortable("company", "Company"),
        Column::sortable("email", "Email"),
        Column::plain("phone", "Phone"),
        Column::sortable("city", "City"),
        Column::sortable("status", "Status"),
        Column::sortable("created_at", "Created"),
        Column::plain("actions", ""),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let service = customer_service(&use_app_config());
    let list = use_record_list(service.clone());
    let form = use_record_form(CustomerDto::default(), service, Callback::new(move |_| list.refresh()));

    let is_open = form.is_open();

    let row = Callback::new(move |(_, c): (usize, Customer)| {
        let (for_view, for_edit) = (c.clone(), c.clone());
        let (id, name) = (c.id.clone(), c.name.clone());
        view! {
            <TableRow>
                <TableCell><TableCellLayout truncate=true>{c.name.clone()}</TableCellLayout></TableCell>
                <TableCell><TableCellLayout truncate=true>{c.company.clone()}</TableCellLayout></TableCell>
                <TableCell>{c.email.clone()}</TableCell>
                <TableCell>{c.phone.clone()}</TableCell>
                <TableCell>{c.address.city.clone()}</TableCell>
                <TableCell><StatusBadge status=c.status /></TableCell>
                <TableCell>{format_optional_date(c.created_at.as_deref())}</TableCell>
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
        <PageFrame page_id="a001_customer--list" category=PAGE_CAT_LIST>
            <PageHeader title="Customers" subtitle="People and companies you sell to".to_string()>
                <button class="button button--secondary" on:click=move |_| list.refresh()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button class="button button--primary" on:click=move |_| form.open_create()>
                    {icon("plus")}
                    "New customer"
                </button>
            </PageHeader>

            <div class="page__content">
                <StatCards stats=list.stats() icon_name="customers" />

                <div class="filter-bar">
                    <SearchInput
                        placeholder="Search by name, email or phone".to_string()
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
                    empty_text="No customers found"
                />
            </div>

            <Show when=move || is_open.get()>
                <CustomerDetails form=form />
            </Show>
        </PageFrame>
    }
}
