//! Таблица записей: заголовки с сортировкой, пустое состояние, строки рисует страница.

use contracts::shared::record::Record;
use leptos::prelude::*;
use thaw::*;

use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, toggle_sort, Sortable};

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub key: &'static str,
    pub title: &'static str,
    pub sortable: bool,
}

impl Column {
    pub const fn sortable(key: &'static str, title: &'static str) -> Self {
        Self {
            key,
            title,
            sortable: true,
        }
    }

    pub const fn plain(key: &'static str, title: &'static str) -> Self {
        Self {
            key,
            title,
            sortable: false,
        }
    }
}

/// Rows in display order, each with its position.
fn table_rows<T: Sortable>(mut items: Vec<T>, field: &str, ascending: bool) -> Vec<(usize, T)> {
    if !field.is_empty() {
        sort_list(&mut items, field, ascending);
    }
    items.into_iter().enumerate().collect()
}

#[component]
pub fn RecordTable<T>(
    #[prop(into)]
    items: Signal<Vec<T>>,
    columns: Vec<Column>,
    #[prop(into)]
    loading: Signal<bool>,
    /// Renders one `<TableRow>`; receives the row position and the record.
    row: Callback<(usize, T), AnyView>,
    #[prop(optional, into)]
    empty_text: Option<String>,
) -> impl IntoView
where
    T: Record + Sortable + Clone + Send + Sync + 'static,
{
    let sort = RwSignal::new((String::new(), true));
    let empty_text = empty_text.unwrap_or_else(|| "No records found".to_string());
    let colspan = columns.len().to_string();

    // строки пересобираются целиком при каждом изменении items или сортировки
    let rows = move || {
        let (field, ascending) = sort.get();
        table_rows(items.get(), &field, ascending)
            .into_iter()
            .map(|entry| row.run(entry))
            .collect_view()
    };

    let header = columns
        .into_iter()
        .map(|column| {
            if !column.sortable {
                return view! { <TableHeaderCell>{column.title}</TableHeaderCell> }.into_any();
            }
            let key = column.key;
            view! {
                <TableHeaderCell>
                    <div
                        class="table__sortable-header"
                        style="cursor: pointer;"
                        on:click=move |_| {
                            sort.update(|(field, ascending)| {
                                let (next_field, next_ascending) = toggle_sort(field, *ascending, key);
                                *field = next_field;
                                *ascending = next_ascending;
                            })
                        }
                    >
                        {column.title}
                        <span class=move || sort.with(|(field, _)| get_sort_class(field, key))>
                            {move || sort.with(|(field, ascending)| get_sort_indicator(field, key, *ascending))}
                        </span>
                    </div>
                </TableHeaderCell>
            }
            .into_any()
        })
        .collect_view();

    view! {
        <div class="table-wrapper">
            <Show when=move || loading.get()>
                <div class="table__loading"><Spinner /></div>
            </Show>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>{header}</TableRow>
                </TableHeader>
                <TableBody>
                    {rows}
                    <Show when=move || !loading.get() && items.with(Vec::is_empty)>
                        <tr class="table__row table__row--empty">
                            <td class="table__cell table__cell--empty" colspan=colspan.clone()>
                                {empty_text.clone()}
                            </td>
                        </tr>
                    </Show>
                </TableBody>
            </Table>
        </div>
    }
}
