//! Доступ к реактивному состоянию из асинхронных сценариев.
//!
//! Контроллеры списков и форм работают через [`StateHandle`], а не напрямую с сигналами,
//! поэтому их можно гонять в обычных `#[tokio::test]` без браузера.

use leptos::prelude::*;

/// Handle to a piece of mutable UI state.
///
/// Both methods return `None` once the state is gone (the owning component was unmounted);
/// callers treat that as "nobody is listening any more" and stop.
pub trait StateHandle<S>: Clone + 'static {
    fn update_with<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;
    fn read_with<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R>;
}

impl<S: Send + Sync + 'static> StateHandle<S> for RwSignal<S> {
    fn update_with<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn read_with<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<S: 'static> StateHandle<S> for RwSignal<S, LocalStorage> {
    fn update_with<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn read_with<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}
