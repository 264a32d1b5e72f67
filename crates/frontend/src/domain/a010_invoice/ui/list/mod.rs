use std::cmp::Ordering;

use contracts::domain::a010_invoice::{Invoice, InvoiceDto, InvoiceState};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a010_invoice::ui::details::{invoice_service, InvoiceDetails};
use crate::shared::components::action_buttons::{ActionButtons, RowIconButton};
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
use crate::shared::notify::Notifier;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::use_toasts;
use crate::shared::whatsapp::open_whatsapp;

impl Sortable for Invoice {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "invoice_number" => compare_text(&self.invoice_number, &other.invoice_number),
            "customer_name" => compare_text(&self.customer_name, &other.customer_name),
            "issue_date" => self.issue_date.cmp(&other.issue_date),
            "due_date" => self.due_date.cmp(&other.due_date),
            "amount" => compare_f64(self.amount, other.amount),
            "state" => self.state.as_str().cmp(other.state.as_str()),
            _ => Ordering::Equal,
        }
    }
}

fn state_color(state: InvoiceState) -> BadgeColor {
    match state {
        InvoiceState::Unpaid => BadgeColor::Warning,
        InvoiceState::Paid => BadgeColor::Success,
        InvoiceState::Overdue => BadgeColor::Danger,
        InvoiceState::Cancelled => BadgeColor::Informative,
    }
}

/// Reminders make sense only while money is still owed.
fn can_remind(invoice: &Invoice) -> bool {
    matches!(invoice.state, InvoiceState::Unpaid | InvoiceState::Overdue) && !invoice.phone.trim().is_empty()
}

/// Сумма к оплате по неоплаченным и просроченным счетам
fn outstanding(items: &[Invoice]) -> f64 {
    items
        .iter()
        .filter(|i| matches!(i.state, InvoiceState::Unpaid | InvoiceState::Overdue))
        .map(|i| i.amount)
        .sum()
}

fn columns() -> Vec<Column> {
    vec![
        Column::sortable("invoice_number", "Invoice #"),
        Column::sortable("customer_name", "Customer"),
        Column::sortable("issue_date", "Issued"),
        Column::sortable("due_date", "Due"),
        Column::sortable("amount", "Amount"),
        Column::sortable("state", "State"),
        Column::plain("actions", ""),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn InvoiceList() -> impl IntoView {
    let service = invoice_service(&use_app_config());
    let list = use_record_list(service.clone());
    let form = use_record_form(InvoiceDto::default(), service, Callback::new(move |_| list.refresh()));
    let is_open = form.is_open();
    let toasts = use_toasts();

    let count = move |state: Option<InvoiceState>| {
        Signal::derive(move || {
            list.state.with(|s| {
                s.items
                    .iter()
                    .filter(|i| state.map_or(true, |st| i.state == st))
                    .count()
            })
        })
    };
    let due_total = Memo::new(move |_| list.state.with(|s| outstanding(&s.items)));

    let row = Callback::new(move |(_, inv): (usize, Invoice)| {
        let (for_view, for_edit) = (inv.clone(), inv.clone());
        let (id, number) = (inv.id.clone(), inv.invoice_number.clone());
        let (phone, reminder) = (inv.phone.clone(), inv.reminder_text());
        let remind_disabled = !can_remind(&inv);
        view! {
            <TableRow>
                <TableCell>{inv.invoice_number.clone()}</TableCell>
                <TableCell><TableCellLayout truncate=true>{inv.customer_name.clone()}</TableCellLayout></TableCell>
                <TableCell>{format_optional_date(inv.issue_date.as_deref())}</TableCell>
                <TableCell>{format_optional_date(inv.due_date.as_deref())}</TableCell>
                <TableCell class="text-right">{format_money(inv.amount)}</TableCell>
                <TableCell><StateBadge label=inv.state.as_str() color=state_color(inv.state) /></TableCell>
                <TableCell>
                    <ActionButtons
                        on_view=Callback::new(move |_| form.open_view(&for_view))
                        on_edit=Callback::new(move |_| form.open_edit(&for_edit))
                        on_delete=Callback::new(move |_| list.delete(id.clone(), number.clone()))
                    >
                        <RowIconButton
                            title="Send payment reminder"
                            icon_name="whatsapp"
                            disabled=remind_disabled
                            on_click=Callback::new(move |_| {
                                if !open_whatsapp(&phone, &reminder) {
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
        <PageFrame page_id="a010_invoice--list" category=PAGE_CAT_LIST>
            <PageHeader title="Invoices" subtitle=Signal::derive(move || Some(format!("Outstanding: {}", format_money(due_total.get()))))>
                <button class="button button--secondary" on:click=move |_| list.refresh()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button class="button button--primary" on:click=move |_| form.open_create()>
                    {icon("plus")}
                    "New invoice"
                </button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-cards">
                    <StatCard label="Total" icon_name="invoices" value=count(None) />
                    <StatCard label="Unpaid" icon_name="calendar" value=count(Some(InvoiceState::Unpaid)) />
                    <StatCard label="Overdue" icon_name="alert" tone="error" value=count(Some(InvoiceState::Overdue)) />
                    <StatCard label="Paid" icon_name="check" tone="success" value=count(Some(InvoiceState::Paid)) />
                </div>

                <div class="filter-bar">
                    <SearchInput
                        placeholder="Search by invoice number or customer".to_string()
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
                    empty_text="No invoices found"
                />
            </div>

            <Show when=move || is_open.get()>
                <InvoiceDetails form=form />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(state: InvoiceState, amount: f64, phone: &str) -> Invoice {
        Invoice {
            invoice_number: "INV-1".into(),
            phone: phone.into(),
            amount,
            state,
            ..Default::default()
        }
    }

    #[test]
    fn test_outstanding_counts_unpaid_and_overdue() {
        let items = vec![
            invoice(InvoiceState::Unpaid, 1000.0, ""),
            invoice(InvoiceState::Overdue, 250.5, ""),
            invoice(InvoiceState::Paid, 9999.0, ""),
            invoice(InvoiceState::Cancelled, 10.0, ""),
        ];
        assert_eq!(outstanding(&items), 1250.5);
    }

    #[test]
    fn test_can_remind() {
        assert!(can_remind(&invoice(InvoiceState::Overdue, 10.0, "9876543210")));
        assert!(!can_remind(&invoice(InvoiceState::Paid, 10.0, "9876543210")));
        assert!(!can_remind(&invoice(InvoiceState::Unpaid, 10.0, " ")));
    }
}
