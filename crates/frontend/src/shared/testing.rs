//! In-memory fakes for the async flows.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use contracts::shared::pincode::PincodeResponse;
use contracts::shared::reorder::ReorderEntry;

use crate::shared::form::FormDraft;
use crate::shared::http::ApiError;
use crate::shared::notify::Notifier;
use crate::shared::pincode::PincodeLookup;
use crate::shared::rest::{DeleteRecord, ListQuery, ListSource, RecordService, ReorderService};
use crate::shared::state::StateHandle;

impl<S: 'static> StateHandle<S> for Rc<RefCell<S>> {
    fn update_with<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn read_with<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

pub fn shared<S>(value: S) -> Rc<RefCell<S>> {
    Rc::new(RefCell::new(value))
}

#[derive(Default)]
pub struct RecordingNotifier {
    successes: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn successes(&self) -> Vec<String> {
        self.successes.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

pub struct FakeRecordService<D: FormDraft> {
    result: Result<D::Record, ApiError>,
    creates: RefCell<Vec<D>>,
    updates: RefCell<Vec<(String, D)>>,
}

impl<D: FormDraft> FakeRecordService<D> {
    pub fn saving(record: D::Record) -> Self {
        Self {
            result: Ok(record),
            creates: RefCell::default(),
            updates: RefCell::default(),
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            result: Err(error),
            creates: RefCell::default(),
            updates: RefCell::default(),
        }
    }

    pub fn create_calls(&self) -> usize {
        self.creates.borrow().len()
    }

    pub fn created(&self) -> Vec<D> {
        self.creates.borrow().clone()
    }

    pub fn update_ids(&self) -> Vec<String> {
        self.updates.borrow().iter().map(|(id, _)| id.clone()).collect()
    }
}

#[async_trait(?Send)]
impl<D: FormDraft> RecordService<D> for FakeRecordService<D> {
    async fn create(&self, draft: &D) -> Result<D::Record, ApiError> {
        self.creates.borrow_mut().push(draft.clone());
        self.result.clone()
    }

    async fn update(&self, id: &str, draft: &D) -> Result<D::Record, ApiError> {
        self.updates.borrow_mut().push((id.to_string(), draft.clone()));
        self.result.clone()
    }
}

/// List endpoint with scripted responses; also records deletes and reorders.
pub struct ScriptedResource<T> {
    responses: RefCell<VecDeque<Result<Vec<T>, ApiError>>>,
    queries: RefCell<Vec<ListQuery>>,
    deleted: RefCell<Vec<String>>,
    delete_result: Result<(), ApiError>,
    reorders: RefCell<Vec<Vec<ReorderEntry>>>,
    reorder_result: Result<(), ApiError>,
}

impl<T> Default for ScriptedResource<T> {
    fn default() -> Self {
        Self {
            responses: RefCell::default(),
            queries: RefCell::default(),
            deleted: RefCell::default(),
            delete_result: Ok(()),
            reorders: RefCell::default(),
            reorder_result: Ok(()),
        }
    }
}

impl<T: Clone> ScriptedResource<T> {
    pub fn respond(self, response: Result<Vec<T>, ApiError>) -> Self {
        self.responses.borrow_mut().push_back(response);
        self
    }

    pub fn failing_delete(mut self, error: ApiError) -> Self {
        self.delete_result = Err(error);
        self
    }

    pub fn failing_reorder(mut self, error: ApiError) -> Self {
        self.reorder_result = Err(error);
        self
    }

    pub fn queries(&self) -> Vec<ListQuery> {
        self.queries.borrow().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.borrow().clone()
    }

    pub fn reorders(&self) -> Vec<Vec<ReorderEntry>> {
        self.reorders.borrow().clone()
    }
}

#[async_trait(?Send)]
impl<T: Clone> ListSource<T> for ScriptedResource<T> {
    async fn list(&self, query: &ListQuery) -> Result<Vec<T>, ApiError> {
        self.queries.borrow_mut().push(query.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[async_trait(?Send)]
impl<T> DeleteRecord for ScriptedResource<T> {
    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.deleted.borrow_mut().push(id.to_string());
        self.delete_result.clone()
    }
}

#[async_trait(?Send)]
impl<T> ReorderService for ScriptedResource<T> {
    async fn reorder(&self, entries: &[ReorderEntry]) -> Result<(), ApiError> {
        self.reorders.borrow_mut().push(entries.to_vec());
        self.reorder_result.clone()
    }
}

pub struct FakePincodeLookup {
    response: Result<Vec<PincodeResponse>, ApiError>,
    calls: Cell<usize>,
    codes: RefCell<Vec<String>>,
}

impl FakePincodeLookup {
    pub fn new(response: Result<Vec<PincodeResponse>, ApiError>) -> Self {
        Self {
            response,
            calls: Cell::new(0),
            codes: RefCell::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn codes(&self) -> Vec<String> {
        self.codes.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PincodeLookup for FakePincodeLookup {
    async fn lookup(&self, pincode: &str) -> Result<Vec<PincodeResponse>, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.codes.borrow_mut().push(pincode.to_string());
        self.response.clone()
    }
}
