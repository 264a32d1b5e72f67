use std::cmp::Ordering;

use contracts::domain::a008_service_ticket::{ServiceTicket, ServiceTicketDto, TicketPriority, TicketState};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a008_service_ticket::ui::details::{ticket_service, ServiceTicketDetails};
use crate::shared::components::action_buttons::{ActionButtons, RowIconButton};
use crate::shared::components::date_filter_dropdown::DateFilterDropdown;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::record_table::{Column, RecordTable};
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_badge::StateBadge;
use crate::shared::date_filter::DateFilterValue;
use crate::shared::date_utils::format_optional_date;
use crate::shared::hooks::{use_app_config, use_record_form, use_record_list};
use crate::shared::icons::icon;
use crate::shared::list_utils::{compare_text, Sortable};
use crate::shared::notify::Notifier;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::use_toasts;
use crate::shared::whatsapp::open_whatsapp;

impl Sortable for ServiceTicket {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => compare_text(&self.title, &other.title),
            "customer_name" => compare_text(&self.customer_name, &other.customer_name),
            // High > Medium > Low
            "priority" => priority_rank(self.priority).cmp(&priority_rank(other.priority)),
            "state" => self.state.as_str().cmp(other.state.as_str()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

fn priority_rank(priority: TicketPriority) -> u8 {
    match priority {
        TicketPriority::Low => 0,
        TicketPriority::Medium => 1,
        TicketPriority::High => 2,
    }
}

fn priority_color(priority: TicketPriority) -> BadgeColor {
    match priority {
        TicketPriority::Low => BadgeColor::Informative,
        TicketPriority::Medium => BadgeColor::Warning,
        TicketPriority::High => BadgeColor::Danger,
    }
}

fn state_color(state: TicketState) -> BadgeColor {
    match state {
        TicketState::Open => BadgeColor::Brand,
        TicketState::InProgress => BadgeColor::Warning,
        TicketState::Resolved => BadgeColor::Success,
        TicketState::Closed => BadgeColor::Informative,
    }
}

/// Text of the WhatsApp message sent to the ticket's customer.
fn ticket_message(ticket: &ServiceTicket) -> String {
    format!(
        "Hello {}, this is about your service request \"{}\". Current status: {}.",
        ticket.customer_name.trim(),
        ticket.title.trim(),
        ticket.state.label()
    )
}

fn columns() -> Vec<Column> {
    vec![
        Column::sortable("title", "Title"),
        Column::sortable("customer_name", "Customer"),
        Column::plain("phone", "Phone"),
        Column::sortable("priority", "Priority"),
        Column::sortable("state", "State"),
        Column::sortable("created_at", "Created"),
        Column::plain("actions", ""),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn ServiceTicketList() -> impl IntoView {
    let service = ticket_service(&use_app_config());
    let list = use_record_list(service.clone());
    let form = use_record_form(ServiceTicketDto::default(), service, Callback::new(move |_| list.refresh()));
    let is_open = form.is_open();
    let toasts = use_toasts();

    let count = move |state: Option<TicketState>| {
        Signal::derive(move || {
            list.state.with(|s| {
                s.items
                    .iter()
                    .filter(|t| state.map_or(true, |st| t.state == st))
                    .count()
            })
        })
    };

    let row = Callback::new(move |(_, t): (usize, ServiceTicket)| {
        let (for_view, for_edit) = (t.clone(), t.clone());
        let (id, title) = (t.id.clone(), t.title.clone());
        let (phone, message) = (t.phone.clone(), ticket_message(&t));
        let no_phone = t.phone.trim().is_empty();
        view! {
            <TableRow>
                <TableCell><TableCellLayout truncate=true>{t.title.clone()}</TableCellLayout></TableCell>
                <TableCell>{t.customer_name.clone()}</TableCell>
                <TableCell>{t.phone.clone()}</TableCell>
                <TableCell><StateBadge label=t.priority.as_str() color=priority_color(t.priority) /></TableCell>
                <TableCell><StateBadge label=t.state.label() color=state_color(t.state) /></TableCell>
                <TableCell>{format_optional_date(t.created_at.as_deref())}</TableCell>
                <TableCell>
                    <ActionButtons
                        on_view=Callback::new(move |_| form.open_view(&for_view))
                        on_edit=Callback::new(move |_| form.open_edit(&for_edit))
                        on_delete=Callback::new(move |_| list.delete(id.clone(), title.clone()))
                    >
                        <RowIconButton
                            title="Message on WhatsApp"
                            icon_name="whatsapp"
                            disabled=no_phone
                            on_click=Callback::new(move |_| {
                                if !open_whatsapp(&phone, &message) {
                                    toasts.error("Could not open WhatsApp. Allow pop-ups for this site.");
                                }
                            })
                        />
                    </ActionButtons>
                </TableCell>
            </TableRow>
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a008_service_ticket--list" category=PAGE_CAT_LIST>
            <PageHeader title="Service tickets" subtitle="Customer service requests".to_string()>
                <button class="button button--secondary" on:click=move |_| list.refresh()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button class="button button--primary" on:click=move |_| form.open_create()>
                    {icon("plus")}
                    "New ticket"
                </button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-cards">
                    <StatCard label="Total" icon_name="tickets" value=count(None) />
                    <StatCard label="Open" icon_name="alert" tone="error" value=count(Some(TicketState::Open)) />
                    <StatCard label="In progress" icon_name="calendar" value=count(Some(TicketState::InProgress)) />
                    <StatCard label="Resolved" icon_name="check" tone="success" value=count(Some(TicketState::Resolved)) />
                </div>

                <div class="filter-bar">
                    <SearchInput
                        placeholder="Search by title, customer or phone".to_string()
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
                    empty_text="No service tickets found"
                />
            </div>

            <Show when=move || is_open.get()>
                <ServiceTicketDetails form=form />
            </Show>
        </PageFrame>
    }
}
