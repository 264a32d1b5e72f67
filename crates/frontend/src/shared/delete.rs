//! Удаление записи с подтверждением.

use contracts::shared::record::Record;

use crate::shared::http::ApiError;
use crate::shared::list_controller::{fetch_list, ListState};
use crate::shared::notify::Notifier;
use crate::shared::rest::{DeleteRecord, ListSource};
use crate::shared::state::StateHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Deleted,
    Failed(ApiError),
}

/// `confirm` is the only guard: declining returns without touching anything.
pub async fn confirm_and_delete<T, H, S, N>(
    state: &H,
    service: &S,
    notifier: &N,
    id: &str,
    confirm: impl FnOnce() -> bool,
) -> DeleteOutcome
where
    T: Record + Clone + 'static,
    H: StateHandle<ListState<T>>,
    S: DeleteRecord + ListSource<T> + ?Sized,
    N: Notifier + ?Sized,
{
    if !confirm() {
        return DeleteOutcome::Declined;
    }
    match service.delete(id).await {
        Ok(()) => {
            notifier.success("Deleted successfully");
            fetch_list(state, service, notifier).await;
            DeleteOutcome::Deleted
        }
        Err(e) => {
            log::warn!("failed to delete {}: {}", id, e);
            notifier.error(&e.user_message("Failed to delete"));
            DeleteOutcome::Failed(e)
        }
    }
}

/// Blocking `window.confirm`.
pub fn confirm_in_browser(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{shared, RecordingNotifier, ScriptedResource};
    use contracts::domain::a002_supplier::Supplier;

    fn supplier(id: &str) -> Supplier {
        Supplier {
            id: id.into(),
            name: id.to_uppercase(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_declined_has_no_side_effects() {
        let state = shared(ListState::default());
        state.borrow_mut().items = vec![supplier("a")];
        let service = ScriptedResource::<Supplier>::default();
        let notifier = RecordingNotifier::default();

        let outcome = confirm_and_delete(&state, &service, &notifier, "a", || false).await;

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert!(service.deleted().is_empty());
        assert!(service.queries().is_empty());
        assert!(notifier.successes().is_empty());
        assert_eq!(state.borrow().items.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_refetches() {
        let state = shared(ListState::default());
        state.borrow_mut().items = vec![supplier("a"), supplier("b")];
        let service = ScriptedResource::default().respond(Ok(vec![supplier("b")]));
        let notifier = RecordingNotifier::default();

        let outcome = confirm_and_delete(&state, &service, &notifier, "a", || true).await;

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(service.deleted(), vec!["a".to_string()]);
        assert_eq!(state.borrow().items, vec![supplier("b")]);
        assert_eq!(notifier.successes(), vec!["Deleted successfully".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_list() {
        let state = shared(ListState::default());
        state.borrow_mut().items = vec![supplier("a")];
        let service = ScriptedResource::<Supplier>::default().failing_delete(ApiError::Server {
            status: 409,
            message: "Supplier has open purchase orders".into(),
        });
        let notifier = RecordingNotifier::default();

        let outcome = confirm_and_delete(&state, &service, &notifier, "a", || true).await;

        assert!(matches!(outcome, DeleteOutcome::Failed(_)));
        assert!(service.queries().is_empty());
        assert_eq!(state.borrow().items.len(), 1);
        assert_eq!(
            notifier.errors(),
            vec!["Supplier has open purchase orders".to_string()]
        );
    }
}
