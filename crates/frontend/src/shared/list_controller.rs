//! Контроллер списка: загрузка, поиск, фильтр по дате, статистика.
//!
//! Каждый запрос получает возрастающий номер; ответ применяется только если
//! его номер последний, поэтому медленный старый ответ не затрёт свежий.

use contracts::shared::dates::parse_date_prefix;
use contracts::shared::record::Record;
use contracts::shared::status::RecordStatus;

use crate::shared::date_filter::DateFilterValue;
use crate::shared::http::ApiError;
use crate::shared::notify::Notifier;
use crate::shared::rest::{ListQuery, ListSource};
use crate::shared::state::StateHandle;

#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    /// Applied (debounced) search term.
    pub search: String,
    pub date_filter: DateFilterValue,
    pub is_loaded: bool,
    latest_request: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            search: String::new(),
            date_filter: DateFilterValue::default(),
            is_loaded: false,
            latest_request: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub id: u64,
    pub query: ListQuery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied(usize),
    /// A newer request was issued meanwhile; the response was dropped.
    Stale,
    Failed(ApiError),
    Detached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl<T> ListState<T> {
    /// Local edit of `items` wins over any response still in flight.
    pub fn supersede_pending(&mut self) {
        self.latest_request += 1;
        self.loading = false;
    }
}

impl<T: Record + Clone> ListState<T> {
    pub fn query(&self) -> ListQuery {
        let (from, to) = if self.date_filter.is_active() {
            (self.date_filter.range.from, self.date_filter.range.to)
        } else {
            (None, None)
        };
        ListQuery {
            search: self.search.trim().to_string(),
            from,
            to,
        }
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_request += 1;
        self.loading = true;
        FetchTicket {
            id: self.latest_request,
            query: self.query(),
        }
    }

    pub fn finish_fetch(&mut self, request_id: u64, result: Result<Vec<T>, ApiError>) -> FetchOutcome {
        if request_id != self.latest_request {
            return FetchOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                self.is_loaded = true;
                FetchOutcome::Applied(count)
            }
            Err(e) => FetchOutcome::Failed(e),
        }
    }

    pub fn is_search_active(&self) -> bool {
        !self.search.trim().is_empty()
    }

    /// Items after the client-side date filter.
    pub fn visible_items(&self) -> Vec<T> {
        if !self.date_filter.is_active() {
            return self.items.clone();
        }
        self.items
            .iter()
            .filter(|item| {
                self.date_filter
                    .matches(item.created_at().and_then(parse_date_prefix))
            })
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> ListStats {
        self.items.iter().fold(ListStats::default(), |mut acc, item| {
            acc.total += 1;
            match item.status() {
                Some(RecordStatus::Active) => acc.active += 1,
                Some(RecordStatus::Inactive) => acc.inactive += 1,
                None => {}
            }
            acc
        })
    }
}

/// Loads the list for the current search and date filter into `state`.
pub async fn fetch_list<T, H, S, N>(state: &H, source: &S, notifier: &N) -> FetchOutcome
where
    T: Record + Clone + 'static,
    H: StateHandle<ListState<T>>,
    S: ListSource<T> + ?Sized,
    N: Notifier + ?Sized,
{
    let Some(ticket) = state.update_with(ListState::begin_fetch) else {
        return FetchOutcome::Detached;
    };
    let result = source.list(&ticket.query).await;
    let outcome = state
        .update_with(|s| s.finish_fetch(ticket.id, result))
        .unwrap_or(FetchOutcome::Detached);

    match &outcome {
        FetchOutcome::Applied(count) => log::debug!("list request #{} loaded {} items", ticket.id, count),
        FetchOutcome::Stale => log::debug!("list request #{} superseded, response dropped", ticket.id),
        FetchOutcome::Failed(e) => {
            log::warn!("list request #{} failed: {}", ticket.id, e);
            notifier.error(&e.user_message("Failed to load data"));
        }
        FetchOutcome::Detached => {}
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::date_filter::{DateFilterOption, DateRange};
    use crate::shared::testing::{shared, RecordingNotifier, ScriptedResource};
    use chrono::NaiveDate;
    use contracts::domain::a001_customer::Customer;

    fn customer(id: &str, created: &str, status: RecordStatus) -> Customer {
        Customer {
            id: id.into(),
            name: format!("Customer {}", id),
            status,
            created_at: Some(created.into()),
            ..Default::default()
        }
    }

    fn ids(items: &[Customer]) -> Vec<&str> {
        items.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_stale_response_never_overwrites_newer() {
        let mut state = ListState::<Customer>::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        let newer = vec![customer("new", "2024-05-01", RecordStatus::Active)];
        assert_eq!(state.finish_fetch(second.id, Ok(newer)), FetchOutcome::Applied(1));
        assert!(!state.loading);

        let older = vec![customer("old", "2024-05-01", RecordStatus::Active)];
        assert_eq!(state.finish_fetch(first.id, Ok(older)), FetchOutcome::Stale);
        assert_eq!(ids(&state.items), vec!["new"]);
    }

    #[test]
    fn test_loading_stays_until_latest_completes() {
        let mut state = ListState::<Customer>::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();
        state.finish_fetch(first.id, Ok(Vec::new()));
        assert!(state.loading);
        state.finish_fetch(second.id, Err(ApiError::Status(500)));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_items() {
        let state = shared(ListState::<Customer>::default());
        let notifier = RecordingNotifier::default();
        let source = ScriptedResource::default()
            .respond(Ok(vec![customer("a", "2024-05-01", RecordStatus::Active)]))
            .respond(Err(ApiError::Network("offline".into())));

        fetch_list(&state, &source, &notifier).await;
        let outcome = fetch_list(&state, &source, &notifier).await;

        assert!(matches!(outcome, FetchOutcome::Failed(_)));
        assert_eq!(ids(&state.borrow().items), vec!["a"]);
        assert!(!state.borrow().loading);
        assert_eq!(notifier.errors(), vec!["Failed to load data".to_string()]);
    }

    #[tokio::test]
    async fn test_query_carries_search_and_range() {
        let state = shared(ListState::<Customer>::default());
        let notifier = RecordingNotifier::default();
        let source = ScriptedResource::default();
        let from = NaiveDate::from_ymd_opt(2024, 5, 13);
        let to = NaiveDate::from_ymd_opt(2024, 5, 19);
        {
            let mut s = state.borrow_mut();
            s.search = "  asha ".into();
            s.date_filter = DateFilterValue {
                option: DateFilterOption::Week,
                range: DateRange { from, to },
            };
        }

        fetch_list(&state, &source, &notifier).await;

        assert_eq!(
            source.queries(),
            vec![ListQuery {
                search: "asha".into(),
                from,
                to
            }]
        );
    }

    #[test]
    fn test_visible_items_apply_date_range() {
        let mut state = ListState::default();
        state.items = vec![
            customer("a", "2024-05-01T09:00:00.000Z", RecordStatus::Active),
            customer("b", "2024-05-14T09:00:00.000Z", RecordStatus::Active),
            Customer {
                id: "c".into(),
                ..Default::default()
            },
        ];
        state.date_filter = DateFilterValue {
            option: DateFilterOption::Today,
            range: DateRange::single(NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()),
        };
        assert_eq!(ids(&state.visible_items()), vec!["b", "c"]);

        state.date_filter = DateFilterValue::default();
        assert_eq!(state.visible_items().len(), 3);
    }

    #[test]
    fn test_stats() {
        let mut state = ListState::default();
        state.items = vec![
            customer("a", "2024-05-01", RecordStatus::Active),
            customer("b", "2024-05-01", RecordStatus::Inactive),
            customer("c", "2024-05-01", RecordStatus::Active),
        ];
        assert_eq!(
            state.stats(),
            ListStats {
                total: 3,
                active: 2,
                inactive: 1
            }
        );
    }
}
