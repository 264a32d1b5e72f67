use chrono::NaiveDate;
use contracts::shared::dates::{parse_date_prefix, to_input_date};
use leptos::prelude::*;

use crate::shared::date_filter::{today_local, DateFilterOption, DateFilterState, DateFilterValue};
use crate::shared::icons::icon_sized;

fn input_value(date: Option<NaiveDate>) -> String {
    date.map(to_input_date).unwrap_or_default()
}

/// Кнопка с выпадающим списком периодов: все / сегодня / неделя / произвольный.
#[component]
pub fn DateFilterDropdown(on_change: Callback<DateFilterValue>) -> impl IntoView {
    let state = RwSignal::new(DateFilterState::default());

    let notify = move |value: Option<DateFilterValue>| {
        if let Some(value) = value {
            on_change.run(value);
        }
    };

    let select = move |option: DateFilterOption| {
        let value = state.try_update(|s| s.select(option, today_local())).flatten();
        notify(value);
    };

    view! {
        <div class="date-filter">
            <button
                class=move || {
                    if state.with(|s| s.value().is_active()) {
                        "button button--secondary date-filter__toggle date-filter__toggle--active"
                    } else {
                        "button button--secondary date-filter__toggle"
                    }
                }
                on:click=move |_| state.update(DateFilterState::toggle_open)
            >
                {icon_sized("calendar", 16)}
                <span>{move || state.with(|s| s.value().label())}</span>
                {icon_sized("chevron-down", 14)}
            </button>

            <Show when=move || state.with(|s| s.is_open)>
                <div class="date-filter__menu">
                    {DateFilterOption::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class=move || {
                                        if state.with(|s| s.option == option) {
                                            "date-filter__option date-filter__option--selected"
                                        } else {
                                            "date-filter__option"
                                        }
                                    }
                                    on:click=move |_| select(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}

                    <Show when=move || state.with(|s| s.option == DateFilterOption::Custom)>
                        <div class="date-filter__custom">
                            <label class="form__label">"From"</label>
                            <input
                                type="date"
                                class="form__input"
                                prop:value=move || state.with(|s| input_value(s.range.from))
                                on:change=move |ev| {
                                    let from = parse_date_prefix(&event_target_value(&ev));
                                    notify(state.try_update(|s| s.set_custom_from(from)).flatten());
                                }
                            />
                            <label class="form__label">"To"</label>
                            <input
                                type="date"
                                class="form__input"
                                min=move || state.with(|s| input_value(s.range.from))
                                prop:value=move || state.with(|s| input_value(s.range.to))
                                on:change=move |ev| {
                                    let to = parse_date_prefix(&event_target_value(&ev));
                                    notify(state.try_update(|s| s.set_custom_to(to)).flatten());
                                }
                            />
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
