//! Модель фильтра по дате: все / сегодня / неделя / произвольный период.

use chrono::{Datelike, Duration, NaiveDate};

use crate::shared::date_utils::format_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilterOption {
    #[default]
    All,
    Today,
    Week,
    Custom,
}

impl DateFilterOption {
    pub const ALL: [DateFilterOption; 4] = [
        DateFilterOption::All,
        DateFilterOption::Today,
        DateFilterOption::Week,
        DateFilterOption::Custom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DateFilterOption::All => "All time",
            DateFilterOption::Today => "Today",
            DateFilterOption::Week => "This week",
            DateFilterOption::Custom => "Custom range",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn single(date: NaiveDate) -> Self {
        Self {
            from: Some(date),
            to: Some(date),
        }
    }

    /// Monday..Sunday week containing `date`.
    pub fn week_of(date: NaiveDate) -> Self {
        let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        Self {
            from: Some(monday),
            to: Some(monday + Duration::days(6)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Both ends set and ordered.
    pub fn is_complete(&self) -> bool {
        matches!((self.from, self.to), (Some(from), Some(to)) if to >= from)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

/// What the list receives from the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateFilterValue {
    pub option: DateFilterOption,
    pub range: DateRange,
}

impl DateFilterValue {
    pub fn is_active(&self) -> bool {
        self.option != DateFilterOption::All && self.range.is_complete()
    }

    /// Records without a known date are kept: there is nothing to compare.
    pub fn matches(&self, date: Option<NaiveDate>) -> bool {
        if !self.is_active() {
            return true;
        }
        date.map_or(true, |d| self.range.contains(d))
    }

    pub fn label(&self) -> String {
        match (self.option, self.range.from, self.range.to) {
            (DateFilterOption::Custom, Some(from), Some(to)) => format!(
                "{} – {}",
                format_date(&from.to_string()),
                format_date(&to.to_string())
            ),
            (option, _, _) => option.label().to_string(),
        }
    }
}

/// Dropdown state. `select`/`set_custom_*` return the value to hand to the parent,
/// `None` when the parent must not be notified yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateFilterState {
    pub option: DateFilterOption,
    pub range: DateRange,
    pub is_open: bool,
}

impl DateFilterState {
    pub fn value(&self) -> DateFilterValue {
        DateFilterValue {
            option: self.option,
            range: self.range,
        }
    }

    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn select(&mut self, option: DateFilterOption, today: NaiveDate) -> Option<DateFilterValue> {
        self.option = option;
        match option {
            DateFilterOption::All => {
                self.range = DateRange::default();
                self.is_open = false;
                Some(self.value())
            }
            DateFilterOption::Today => {
                self.range = DateRange::single(today);
                self.is_open = false;
                Some(self.value())
            }
            DateFilterOption::Week => {
                self.range = DateRange::week_of(today);
                self.is_open = false;
                Some(self.value())
            }
            DateFilterOption::Custom => {
                self.range = DateRange::default();
                self.is_open = true;
                None
            }
        }
    }

    pub fn set_custom_from(&mut self, from: Option<NaiveDate>) -> Option<DateFilterValue> {
        if self.option != DateFilterOption::Custom {
            return None;
        }
        self.range.from = from;
        self.custom_value()
    }

    pub fn set_custom_to(&mut self, to: Option<NaiveDate>) -> Option<DateFilterValue> {
        if self.option != DateFilterOption::Custom {
            return None;
        }
        self.range.to = to;
        self.custom_value()
    }

    fn custom_value(&self) -> Option<DateFilterValue> {
        self.range.is_complete().then(|| self.value())
    }
}

pub fn today_local() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_today_closes_and_notifies() {
        let mut state = DateFilterState {
            is_open: true,
            ..Default::default()
        };
        let value = state.select(DateFilterOption::Today, date(2024, 5, 15));
        assert_eq!(
            value.map(|v| v.range),
            Some(DateRange::single(date(2024, 5, 15)))
        );
        assert!(!state.is_open);
    }

    #[test]
    fn test_week_is_monday_to_sunday() {
        // 2024-05-15 is a Wednesday
        let range = DateRange::week_of(date(2024, 5, 15));
        assert_eq!(range.from, Some(date(2024, 5, 13)));
        assert_eq!(range.to, Some(date(2024, 5, 19)));

        // a Sunday belongs to the week that started six days earlier
        let range = DateRange::week_of(date(2024, 5, 19));
        assert_eq!(range.from, Some(date(2024, 5, 13)));
    }

    #[test]
    fn test_all_resets_range_from_any_option() {
        let today = date(2024, 5, 15);
        for option in DateFilterOption::ALL {
            let mut state = DateFilterState::default();
            state.select(option, today);
            state.set_custom_from(Some(date(2024, 5, 1)));
            state.set_custom_to(Some(date(2024, 5, 2)));
            state.is_open = true;

            let value = state.select(DateFilterOption::All, today);
            assert_eq!(value.map(|v| v.range), Some(DateRange::default()));
            assert!(state.range.is_empty());
            assert!(!state.is_open);
        }
    }

    #[test]
    fn test_custom_waits_for_both_ends() {
        let mut state = DateFilterState::default();
        assert_eq!(state.select(DateFilterOption::Custom, date(2024, 5, 15)), None);
        assert!(state.is_open);

        assert_eq!(state.set_custom_from(Some(date(2024, 5, 1))), None);
        let value = state.set_custom_to(Some(date(2024, 5, 10))).unwrap();
        assert_eq!(value.option, DateFilterOption::Custom);
        assert_eq!(value.range.from, Some(date(2024, 5, 1)));
        assert_eq!(value.range.to, Some(date(2024, 5, 10)));
        assert!(state.is_open);
    }

    #[test]
    fn test_custom_reversed_range_never_notifies() {
        let mut state = DateFilterState::default();
        state.select(DateFilterOption::Custom, date(2024, 5, 15));
        assert_eq!(state.set_custom_to(Some(date(2024, 5, 1))), None);
        assert_eq!(state.set_custom_from(Some(date(2024, 5, 10))), None);
        // fixing the end notifies again
        assert!(state.set_custom_to(Some(date(2024, 5, 10))).is_some());
    }

    #[test]
    fn test_custom_setters_ignored_for_other_options() {
        let mut state = DateFilterState::default();
        state.select(DateFilterOption::Today, date(2024, 5, 15));
        assert_eq!(state.set_custom_from(Some(date(2024, 1, 1))), None);
        assert_eq!(state.range, DateRange::single(date(2024, 5, 15)));
    }

    #[test]
    fn test_value_matches() {
        let value = DateFilterValue {
            option: DateFilterOption::Custom,
            range: DateRange {
                from: Some(date(2024, 5, 1)),
                to: Some(date(2024, 5, 10)),
            },
        };
        assert!(value.matches(Some(date(2024, 5, 1))));
        assert!(value.matches(Some(date(2024, 5, 10))));
        assert!(!value.matches(Some(date(2024, 5, 11))));
        assert!(value.matches(None));
        assert!(DateFilterValue::default().matches(Some(date(1999, 1, 1))));
    }

    #[test]
    fn test_label() {
        let value = DateFilterValue {
            option: DateFilterOption::Custom,
            range: DateRange {
                from: Some(date(2024, 5, 1)),
                to: Some(date(2024, 5, 10)),
            },
        };
        assert_eq!(value.label(), "01.05.2024 – 10.05.2024");
        assert_eq!(DateFilterValue::default().label(), "All time");
    }
}
