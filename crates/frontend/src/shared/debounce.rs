//! Trailing-edge debounce.
//!
//! Каждое новое значение увеличивает поколение; срабатывает только таймер
//! последнего поколения. Отмена тоже просто сдвигает поколение.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::shared::state::StateHandle;

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    /// Stores `value` as the pending one and returns the ticket its timer must present.
    pub fn schedule(&mut self, value: T) -> u64 {
        self.generation += 1;
        self.pending = Some(value);
        self.generation
    }

    /// Called when a timer expires. Yields the value only for the latest ticket.
    pub fn fire(&mut self, ticket: u64) -> Option<T> {
        if ticket != self.generation {
            return None;
        }
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Schedules `value` and runs `on_settle` after `delay_ms` of quiet.
///
/// If the debouncer state is disposed before the timer expires nothing happens.
pub fn debounce<T, H>(debouncer: H, delay_ms: u32, value: T, on_settle: impl FnOnce(T) + 'static)
where
    T: 'static,
    H: StateHandle<Debouncer<T>>,
{
    let Some(ticket) = debouncer.update_with(|d| d.schedule(value)) else {
        return;
    };
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if let Some(value) = debouncer.update_with(|d| d.fire(ticket)).flatten() {
            on_settle(value);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_ticket_fires() {
        let mut debouncer = Debouncer::default();
        let tickets: Vec<u64> = ["l", "la", "lap", "lapt", "laptop"]
            .into_iter()
            .map(|v| debouncer.schedule(v.to_string()))
            .collect();

        let mut fired = Vec::new();
        for ticket in tickets {
            if let Some(value) = debouncer.fire(ticket) {
                fired.push(value);
            }
        }
        assert_eq!(fired, vec!["laptop".to_string()]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_fire_is_single_shot() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.schedule(1);
        assert_eq!(debouncer.fire(ticket), Some(1));
        assert_eq!(debouncer.fire(ticket), None);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.schedule("abc");
        debouncer.cancel();
        assert_eq!(debouncer.fire(ticket), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_each_quiet_window_fires_once() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.schedule("a");
        assert_eq!(debouncer.fire(first), Some("a"));
        let second = debouncer.schedule("ab");
        assert_eq!(debouncer.fire(second), Some("ab"));
    }
}
