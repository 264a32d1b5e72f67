//! Ручная сортировка списка кнопками вверх/вниз.
//!
//! Перемещение применяется к локальному списку сразу, затем весь порядок
//! уходит на сервер одним запросом. При ошибке список перечитывается с сервера.
//! Незавершённая загрузка списка после перемещения считается устаревшей.

use contracts::shared::record::Positioned;
use contracts::shared::reorder::ReorderEntry;
use thiserror::Error;

use crate::shared::http::ApiError;
use crate::shared::list_controller::{fetch_list, ListState};
use crate::shared::notify::Notifier;
use crate::shared::rest::{ListSource, ReorderService};
use crate::shared::state::StateHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

impl MoveDirection {
    fn target(self, index: usize, len: usize) -> Option<usize> {
        if index >= len {
            return None;
        }
        match self {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => Some(index + 1).filter(|&t| t < len),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejected {
    #[error("Clear the search to change the order")]
    FilterActive,
    #[error("Item is already at the edge of the list")]
    OutOfBounds,
}

pub fn renumber<T: Positioned>(items: &mut [T]) {
    for (position, item) in items.iter_mut().enumerate() {
        item.set_order(position as u32);
    }
}

/// New sequence after moving `items[index]` one step in `direction`.
pub fn plan_move<T: Positioned + Clone>(
    items: &[T],
    index: usize,
    direction: MoveDirection,
    filter_active: bool,
) -> Result<Vec<T>, MoveRejected> {
    if filter_active {
        return Err(MoveRejected::FilterActive);
    }
    let target = direction
        .target(index, items.len())
        .ok_or(MoveRejected::OutOfBounds)?;
    let mut next = items.to_vec();
    let moved = next.remove(index);
    next.insert(target, moved);
    renumber(&mut next);
    Ok(next)
}

pub fn reorder_payload<T: Positioned>(items: &[T]) -> Vec<ReorderEntry> {
    items
        .iter()
        .map(|item| ReorderEntry::new(item.id(), item.order()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Rejected(MoveRejected),
    Persisted,
    RolledBack(ApiError),
    Detached,
}

pub async fn move_and_persist<T, H, S, N>(
    state: &H,
    service: &S,
    notifier: &N,
    index: usize,
    direction: MoveDirection,
) -> MoveOutcome
where
    T: Positioned + Clone + 'static,
    H: StateHandle<ListState<T>>,
    S: ReorderService + ListSource<T> + ?Sized,
    N: Notifier + ?Sized,
{
    let planned = state.update_with(|s| {
        let next = plan_move(&s.items, index, direction, s.is_search_active())?;
        let payload = reorder_payload(&next);
        s.items = next;
        s.supersede_pending();
        Ok::<_, MoveRejected>(payload)
    });
    let payload = match planned {
        None => return MoveOutcome::Detached,
        Some(Err(rejected)) => {
            if rejected == MoveRejected::FilterActive {
                notifier.error(&rejected.to_string());
            }
            return MoveOutcome::Rejected(rejected);
        }
        Some(Ok(payload)) => payload,
    };

    match service.reorder(&payload).await {
        Ok(()) => {
            log::debug!("reordered {} items", payload.len());
            MoveOutcome::Persisted
        }
        Err(e) => {
            log::warn!("reorder failed, reloading list: {}", e);
            notifier.error(&e.user_message("Failed to save the new order"));
            fetch_list(state, service, notifier).await;
            MoveOutcome::RolledBack(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_controller::FetchOutcome;
    use crate::shared::testing::{shared, RecordingNotifier, ScriptedResource};
    use contracts::domain::a004_product_category::ProductCategory;

    fn category(id: &str, order: u32) -> ProductCategory {
        ProductCategory {
            id: id.into(),
            name: id.to_uppercase(),
            order,
            ..Default::default()
        }
    }

    fn abc() -> Vec<ProductCategory> {
        vec![category("a", 0), category("b", 1), category("c", 2)]
    }

    fn layout(items: &[ProductCategory]) -> Vec<(String, u32)> {
        items.iter().map(|c| (c.id.clone(), c.order)).collect()
    }

    #[test]
    fn test_order_equals_position_after_any_move() {
        for index in 0..3 {
            for direction in [MoveDirection::Up, MoveDirection::Down] {
                if let Ok(next) = plan_move(&abc(), index, direction, false) {
                    for (position, item) in next.iter().enumerate() {
                        assert_eq!(item.order as usize, position);
                    }
                    let expected = match direction {
                        MoveDirection::Up => index - 1,
                        MoveDirection::Down => index + 1,
                    };
                    assert_eq!(next[expected].id, abc()[index].id);
                }
            }
        }
    }

    #[test]
    fn test_bounds_are_noop() {
        assert_eq!(
            plan_move(&abc(), 0, MoveDirection::Up, false).err(),
            Some(MoveRejected::OutOfBounds)
        );
        assert_eq!(
            plan_move(&abc(), 2, MoveDirection::Down, false).err(),
            Some(MoveRejected::OutOfBounds)
        );
        assert_eq!(
            plan_move(&abc(), 7, MoveDirection::Up, false).err(),
            Some(MoveRejected::OutOfBounds)
        );
    }

    #[test]
    fn test_search_blocks_reorder() {
        assert_eq!(
            plan_move(&abc(), 1, MoveDirection::Up, true).err(),
            Some(MoveRejected::FilterActive)
        );
    }

    #[tokio::test]
    async fn test_move_up_sends_full_payload() {
        let state = shared(ListState::default());
        state.borrow_mut().items = abc();
        let service = ScriptedResource::default();
        let notifier = RecordingNotifier::default();

        let outcome = move_and_persist(&state, &service, &notifier, 1, MoveDirection::Up).await;

        assert_eq!(outcome, MoveOutcome::Persisted);
        assert_eq!(
            layout(&state.borrow().items),
            vec![("b".into(), 0), ("a".into(), 1), ("c".into(), 2)]
        );
        assert_eq!(
            service.reorders(),
            vec![vec![
                ReorderEntry::new("b", 0),
                ReorderEntry::new("a", 1),
                ReorderEntry::new("c", 2),
            ]]
        );
    }

    #[tokio::test]
    async fn test_failed_persist_restores_server_list() {
        let state = shared(ListState::default());
        state.borrow_mut().items = abc();
        let server_list = vec![category("a", 0), category("c", 1), category("b", 2)];
        let service = ScriptedResource::default()
            .respond(Ok(server_list.clone()))
            .failing_reorder(ApiError::Status(500));
        let notifier = RecordingNotifier::default();

        let outcome = move_and_persist(&state, &service, &notifier, 1, MoveDirection::Down).await;

        assert_eq!(outcome, MoveOutcome::RolledBack(ApiError::Status(500)));
        assert_eq!(layout(&state.borrow().items), layout(&server_list));
        assert_eq!(
            notifier.errors(),
            vec!["Failed to save the new order".to_string()]
        );
        assert_eq!(service.queries().len(), 1);
    }

    #[tokio::test]
    async fn test_move_drops_refresh_in_flight() {
        let state = shared(ListState::default());
        state.borrow_mut().items = abc();
        let pending = state.borrow_mut().begin_fetch();
        let service = ScriptedResource::default();
        let notifier = RecordingNotifier::default();

        let outcome = move_and_persist(&state, &service, &notifier, 2, MoveDirection::Up).await;
        assert_eq!(outcome, MoveOutcome::Persisted);
        assert!(!state.borrow().loading);

        let late = state.borrow_mut().finish_fetch(pending.id, Ok(abc()));
        assert_eq!(late, FetchOutcome::Stale);
        assert_eq!(
            layout(&state.borrow().items),
            vec![("a".into(), 0), ("c".into(), 1), ("b".into(), 2)]
        );
    }

    #[tokio::test]
    async fn test_rejected_move_makes_no_request() {
        let state = shared(ListState::default());
        {
            let mut s = state.borrow_mut();
            s.items = abc();
            s.search = "b".into();
        }
        let service = ScriptedResource::<ProductCategory>::default();
        let notifier = RecordingNotifier::default();

        let outcome = move_and_persist(&state, &service, &notifier, 1, MoveDirection::Up).await;

        assert_eq!(outcome, MoveOutcome::Rejected(MoveRejected::FilterActive));
        assert!(service.reorders().is_empty());
        assert_eq!(layout(&state.borrow().items), layout(&abc()));
        assert_eq!(notifier.errors().len(), 1);
    }
}
