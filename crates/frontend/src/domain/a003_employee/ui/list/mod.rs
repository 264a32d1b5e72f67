use std::cmp::Ordering;

use contracts::domain::a003_employee::{Employee, EmployeeDto};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_employee::ui::details::{employee_service, EmployeeDetails};
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

impl Sortable for Employee {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => compare_text(&self.name, &other.name),
            "department" => compare_text(&self.department, &other.department),
            "designation" => compare_text(&self.designation, &other.designation),
            // ISO-даты сравниваются как строки
            "joining_date" => self.joining_date.cmp(&other.joining_date),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::sortable("name", "Name"),
        Column::sortable("department", "Department"),
        Column::sortable("designation", "Designation"),
        Column::plain("contact", "Contact"),
        Column::sortable("joining_date", "Joined"),
        Column::sortable("status", "Status"),
        Column::plain("actions", ""),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let service = employee_service(&use_app_config());
    let list = use_record_list(service.clone());
    let form = use_record_form(EmployeeDto::default(), service, Callback::new(move |_| list.refresh()));
    let is_open = form.is_open();

    let row = Callback::new(move |(_, e): (usize, Employee)| {
        let (for_view, for_edit) = (e.clone(), e.clone());
        let (id, name) = (e.id.clone(), e.name.clone());
        view! {
            <TableRow>
                <TableCell><TableCellLayout truncate=true>{e.name.clone()}</TableCellLayout></TableCell>
                <TableCell>{e.department.clone()}</TableCell>
                <TableCell>{e.designation.clone()}</TableCell>
                <TableCell>
                    <div class="table__cell-stack">
                        <span>{e.email.clone()}</span>
                        <span class="text-muted">{e.phone.clone()}</span>
                    </div>
                </TableCell>
                <TableCell>{format_optional_date(e.joining_date.as_deref())}</TableCell>
                <TableCell><StatusBadge status=e.status /></TableCell>
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
        <PageFrame page_id="a003_employee--list" category=PAGE_CAT_LIST>
            <PageHeader title="Employees" subtitle="Team members and their departments".to_string()>
                <button class="button button--secondary" on:click=move |_| list.refresh()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button class="button button--primary" on:click=move |_| form.open_create()>
                    {icon("plus")}
                    "New employee"
                </button>
            </PageHeader>

            <div class="page__content">
                <StatCards stats=list.stats() icon_name="employees" />

                <div class="filter-bar">
                    <SearchInput
                        placeholder="Search by name, department or email".to_string()
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
                    empty_text="No employees found"
                />
            </div>

            <Show when=move || is_open.get()>
                <EmployeeDetails form=form />
            </Show>
        </PageFrame>
    }
}
