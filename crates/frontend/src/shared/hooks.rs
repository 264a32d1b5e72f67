//! Leptos-обвязка над контроллерами: сигналы, контекст, `spawn_local`.
//!
//! `use_record_list` и `use_record_form` создают состояние страницы и возвращают
//! `Copy`-хэндлы, которые удобно захватывать в обработчиках событий.

use contracts::shared::address::Address;
use contracts::shared::record::{Positioned, Record};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::config::{AppConfig, ApiDomain};
use crate::shared::date_filter::DateFilterValue;
use crate::shared::debounce::{debounce, Debouncer};
use crate::shared::delete::{confirm_and_delete, confirm_in_browser};
use crate::shared::form::{submit_form, FormDraft, FormState};
use crate::shared::list_controller::{fetch_list, ListState, ListStats};
use crate::shared::pincode::{autofill_address, AddressField, PincodeWatcher, PostalPincodeApi};
use crate::shared::reorder::{move_and_persist, MoveDirection};
use crate::shared::rest::{DeleteRecord, ListSource, RecordService, ReorderService};
use crate::shared::toast::{use_toasts, ToastService};

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not provided in context (provide it in app root)")
}

pub fn use_base_url(domain: ApiDomain) -> String {
    use_app_config().base_url(domain)
}

/// List page state plus the service that feeds it.
pub struct ListHandle<T: Send + Sync + 'static, S: Send + Sync + 'static> {
    pub state: RwSignal<ListState<T>>,
    service: StoredValue<S>,
    debouncer: RwSignal<Debouncer<String>>,
    debounce_ms: u32,
    toasts: ToastService,
}

impl<T: Send + Sync + 'static, S: Send + Sync + 'static> Clone for ListHandle<T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static, S: Send + Sync + 'static> Copy for ListHandle<T, S> {}

impl<T, S> ListHandle<T, S>
where
    T: Record + Clone + Send + Sync + 'static,
    S: ListSource<T> + Clone + Send + Sync + 'static,
{
    pub fn refresh(&self) {
        let (state, service, toasts) = (self.state, self.service.get_value(), self.toasts);
        spawn_local(async move {
            fetch_list(&state, &service, &toasts).await;
        });
    }

    /// Raw keystroke from the search box; the fetch happens after the quiet window.
    pub fn search(&self, value: String) {
        let handle = *self;
        debounce(self.debouncer, self.debounce_ms, value, move |term| {
            if handle.state.try_update(|s| s.search = term).is_some() {
                handle.refresh();
            }
        });
    }

    pub fn set_date_filter(&self, value: DateFilterValue) {
        self.state.update(|s| s.date_filter = value);
        self.refresh();
    }

    pub fn service(&self) -> S {
        self.service.get_value()
    }

    pub fn items(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.visible_items()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading))
    }

    pub fn stats(&self) -> Signal<ListStats> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.stats()))
    }

    pub fn search_active(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_search_active()))
    }
}

impl<T, S> ListHandle<T, S>
where
    T: Record + Clone + Send + Sync + 'static,
    S: ListSource<T> + DeleteRecord + Clone + Send + Sync + 'static,
{
    pub fn delete(&self, id: String, name: String) {
        let (state, service, toasts) = (self.state, self.service.get_value(), self.toasts);
        spawn_local(async move {
            let question = format!("Delete \"{}\"? This cannot be undone.", name);
            confirm_and_delete(&state, &service, &toasts, &id, || confirm_in_browser(&question)).await;
        });
    }
}

impl<T, S> ListHandle<T, S>
where
    T: Positioned + Clone + Send + Sync + 'static,
    S: ListSource<T> + ReorderService + Clone + Send + Sync + 'static,
{
    pub fn move_item(&self, index: usize, direction: MoveDirection) {
        let (state, service, toasts) = (self.state, self.service.get_value(), self.toasts);
        spawn_local(async move {
            move_and_persist(&state, &service, &toasts, index, direction).await;
        });
    }
}

/// Creates list state and starts the initial fetch.
pub fn use_record_list<T, S>(service: S) -> ListHandle<T, S>
where
    T: Record + Clone + Send + Sync + 'static,
    S: ListSource<T> + Clone + Send + Sync + 'static,
{
    let debouncer = RwSignal::new(Debouncer::<String>::default());
    on_cleanup(move || {
        debouncer.try_update(Debouncer::cancel);
    });

    let handle = ListHandle {
        state: RwSignal::new(ListState::default()),
        service: StoredValue::new(service),
        debouncer,
        debounce_ms: use_app_config().search.debounce_ms,
        toasts: use_toasts(),
    };
    handle.refresh();
    handle
}

/// Modal form state plus the service that saves it.
pub struct FormHandle<D: FormDraft, S: Send + Sync + 'static> {
    pub state: RwSignal<FormState<D>, LocalStorage>,
    service: StoredValue<S>,
    toasts: ToastService,
    on_saved: Callback<()>,
}

impl<D: FormDraft, S: Send + Sync + 'static> Clone for FormHandle<D, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: FormDraft, S: Send + Sync + 'static> Copy for FormHandle<D, S> {}

impl<D, S> FormHandle<D, S>
where
    D: FormDraft,
    S: RecordService<D> + Clone + Send + Sync + 'static,
{
    pub fn open_create(&self) {
        self.state.update(FormState::open_create);
    }

    pub fn open_edit(&self, record: &D::Record) {
        self.state.update(|f| f.open_edit(record));
    }

    pub fn open_view(&self, record: &D::Record) {
        self.state.update(|f| f.open_view(record));
    }

    pub fn close(&self) {
        self.state.update(FormState::close);
    }

    pub fn edit(&self, f: impl FnOnce(&mut D)) {
        self.state.update(|s| s.edit(f));
    }

    pub fn submit(&self) {
        let (state, service, toasts, on_saved) =
            (self.state, self.service.get_value(), self.toasts, self.on_saved);
        spawn_local(async move {
            submit_form(&state, &service, &toasts, |_| on_saved.run(())).await;
        });
    }

    /// Reactive view of one draft field.
    pub fn field<V>(&self, get: fn(&D) -> V) -> Signal<V>
    where
        V: Send + Sync + 'static,
    {
        let state = self.state;
        Signal::derive(move || state.with(|f| get(&f.draft)))
    }

    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|f| f.error(field)))
    }

    pub fn is_open(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|f| f.is_open))
    }

    pub fn submitting(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|f| f.submitting))
    }

    pub fn read_only(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|f| f.mode.is_read_only()))
    }

    pub fn title(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|f| f.title()))
    }

    pub fn address(&self, get: fn(&D) -> &Address) -> Signal<Address> {
        let state = self.state;
        Signal::derive(move || state.with(|f| get(&f.draft).clone()))
    }

    /// Setter for address inputs; a complete pincode triggers the state/district lookup.
    pub fn address_input(&self, address: fn(&mut D) -> &mut Address) -> Callback<(AddressField, String)> {
        let state = self.state;
        let watcher = RwSignal::new(PincodeWatcher::default());
        let lookup = PostalPincodeApi::new(use_app_config().pincode.base_url);

        Callback::new(move |(field, value): (AddressField, String)| {
            let due = if field == AddressField::Pincode {
                watcher.try_update(|w| w.on_input(&value)).flatten()
            } else {
                None
            };
            state.update(|f| f.edit(|d| *field.slot(address(d)) = value));

            if let Some(code) = due {
                let lookup = lookup.clone();
                spawn_local(async move {
                    autofill_address(&state, &lookup, &code, address).await;
                });
            }
        })
    }
}

pub fn use_record_form<D, S>(blank: D, service: S, on_saved: Callback<()>) -> FormHandle<D, S>
where
    D: FormDraft,
    S: RecordService<D> + Clone + Send + Sync + 'static,
{
    let state = RwSignal::new_local(FormState::new(blank));
    on_cleanup(move || {
        state.try_update(FormState::close);
    });

    FormHandle {
        state,
        service: StoredValue::new(service),
        toasts: use_toasts(),
        on_saved,
    }
}
