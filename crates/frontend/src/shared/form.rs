//! Состояние модальной формы создания/редактирования записи.
//!
//! Черновик живёт только в модалке: при закрытии он выбрасывается,
//! на сервер уходит целиком по кнопке Save.

use contracts::shared::record::Record;
use contracts::shared::validation::FieldErrors;

use crate::shared::http::ApiError;
use crate::shared::notify::Notifier;
use crate::shared::rest::RecordService;
use crate::shared::state::StateHandle;

/// Editable copy of a record.
pub trait FormDraft: Clone + 'static {
    type Record: Record + Clone + 'static;

    /// Entity name used in titles and toasts ("Customer").
    const LABEL: &'static str;

    /// Draft for editing `record`. `blank` is the draft create mode starts from.
    fn from_record(blank: &Self, record: &Self::Record) -> Self;

    fn validate(&self, mode: &FormMode) -> FieldErrors;

    /// Releases resources held by the draft (blob previews).
    fn discard(&self) {}
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit {
        id: String,
    },
    View {
        id: String,
    },
}

impl FormMode {
    pub fn is_create(&self) -> bool {
        matches!(self, FormMode::Create)
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, FormMode::View { .. })
    }
}

#[derive(Debug, Clone)]
pub struct FormState<D> {
    blank: D,
    pub draft: D,
    pub mode: FormMode,
    pub errors: FieldErrors,
    pub submitting: bool,
    pub is_open: bool,
}

/// Result of trying to start a submit.
pub enum SubmitStep<D> {
    Busy,
    ReadOnly,
    Invalid,
    Ready { mode: FormMode, draft: D },
}

#[derive(Debug)]
pub enum SubmitOutcome<T> {
    Busy,
    ReadOnly,
    Invalid,
    Saved(T),
    Failed(ApiError),
    /// The form was unmounted before submit could start.
    Detached,
}

impl<D: FormDraft> FormState<D> {
    pub fn new(blank: D) -> Self {
        Self {
            draft: blank.clone(),
            blank,
            mode: FormMode::Create,
            errors: FieldErrors::new(),
            submitting: false,
            is_open: false,
        }
    }

    pub fn open_create(&mut self) {
        self.replace_draft(self.blank.clone(), FormMode::Create);
    }

    pub fn open_edit(&mut self, record: &D::Record) {
        let draft = D::from_record(&self.blank, record);
        self.replace_draft(
            draft,
            FormMode::Edit {
                id: record.id().to_string(),
            },
        );
    }

    pub fn open_view(&mut self, record: &D::Record) {
        let draft = D::from_record(&self.blank, record);
        self.replace_draft(
            draft,
            FormMode::View {
                id: record.id().to_string(),
            },
        );
    }

    fn replace_draft(&mut self, draft: D, mode: FormMode) {
        self.draft.discard();
        self.draft = draft;
        self.mode = mode;
        self.errors = FieldErrors::new();
        self.submitting = false;
        self.is_open = true;
    }

    /// Applies a field change. Once errors are shown they follow the input.
    pub fn edit(&mut self, f: impl FnOnce(&mut D)) {
        if self.mode.is_read_only() {
            return;
        }
        f(&mut self.draft);
        if !self.errors.is_empty() {
            self.errors = self.draft.validate(&self.mode);
        }
    }

    pub fn validate(&mut self) -> bool {
        self.errors = self.draft.validate(&self.mode);
        self.errors.is_empty()
    }

    pub fn begin_submit(&mut self) -> SubmitStep<D> {
        if self.submitting {
            return SubmitStep::Busy;
        }
        if self.mode.is_read_only() {
            return SubmitStep::ReadOnly;
        }
        if !self.validate() {
            return SubmitStep::Invalid;
        }
        self.submitting = true;
        SubmitStep::Ready {
            mode: self.mode.clone(),
            draft: self.draft.clone(),
        }
    }

    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }

    pub fn close(&mut self) {
        self.draft.discard();
        self.draft = self.blank.clone();
        self.mode = FormMode::Create;
        self.errors = FieldErrors::new();
        self.submitting = false;
        self.is_open = false;
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.errors.get(field).map(str::to_string)
    }

    pub fn title(&self) -> String {
        match self.mode {
            FormMode::Create => format!("New {}", D::LABEL),
            FormMode::Edit { .. } => format!("Edit {}", D::LABEL),
            FormMode::View { .. } => D::LABEL.to_string(),
        }
    }
}

/// Validates and saves the draft held in `form`.
///
/// On success the modal closes after `on_saved`; on failure it stays open with the draft intact.
pub async fn submit_form<D, H, S, N>(
    form: &H,
    service: &S,
    notifier: &N,
    on_saved: impl FnOnce(&D::Record),
) -> SubmitOutcome<D::Record>
where
    D: FormDraft,
    H: StateHandle<FormState<D>>,
    S: RecordService<D> + ?Sized,
    N: Notifier + ?Sized,
{
    let Some(step) = form.update_with(FormState::begin_submit) else {
        return SubmitOutcome::Detached;
    };
    let (mode, draft) = match step {
        SubmitStep::Busy => return SubmitOutcome::Busy,
        SubmitStep::ReadOnly => return SubmitOutcome::ReadOnly,
        SubmitStep::Invalid => return SubmitOutcome::Invalid,
        SubmitStep::Ready { mode, draft } => (mode, draft),
    };

    let result = match &mode {
        FormMode::Edit { id } => service.update(id, &draft).await,
        _ => service.create(&draft).await,
    };

    match result {
        Ok(record) => {
            let message = if mode.is_create() {
                format!("{} created", D::LABEL)
            } else {
                format!("{} updated", D::LABEL)
            };
            notifier.success(&message);
            on_saved(&record);
            form.update_with(FormState::close);
            SubmitOutcome::Saved(record)
        }
        Err(err) => {
            log::warn!("failed to save {}: {}", D::LABEL, err);
            notifier.error(&err.user_message(&format!("Failed to save {}", D::LABEL.to_lowercase())));
            form.update_with(FormState::submit_failed);
            SubmitOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{shared, FakeRecordService, RecordingNotifier};
    use contracts::domain::a001_customer::{Customer, CustomerDto};

    fn customer() -> Customer {
        Customer {
            id: "c1".into(),
            name: "Asha Traders".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_empty_required_field_blocks_create() {
        let form = shared(FormState::new(CustomerDto::default()));
        form.borrow_mut().open_create();
        let service = FakeRecordService::<CustomerDto>::saving(customer());
        let notifier = RecordingNotifier::default();

        let outcome = submit_form(&form, &service, &notifier, |_| {}).await;

        assert!(matches!(outcome, SubmitOutcome::Invalid));
        assert_eq!(service.create_calls(), 0);
        assert!(form.borrow().errors.contains("name"));
        assert!(form.borrow().is_open);
        assert!(!form.borrow().submitting);
    }

    #[tokio::test]
    async fn test_create_success_closes() {
        let form = shared(FormState::new(CustomerDto::default()));
        form.borrow_mut().open_create();
        form.borrow_mut().edit(|d| d.name = "Asha Traders".into());
        let service = FakeRecordService::<CustomerDto>::saving(customer());
        let notifier = RecordingNotifier::default();
        let mut saved = None;

        let outcome = submit_form(&form, &service, &notifier, |r: &Customer| {
            saved = Some(r.id.clone())
        })
        .await;

        assert!(matches!(outcome, SubmitOutcome::Saved(_)));
        assert_eq!(saved.as_deref(), Some("c1"));
        assert_eq!(service.create_calls(), 1);
        assert_eq!(notifier.successes(), vec!["Customer created".to_string()]);
        assert!(!form.borrow().is_open);
    }

    #[tokio::test]
    async fn test_edit_calls_update_with_id() {
        let form = shared(FormState::new(CustomerDto::default()));
        form.borrow_mut().open_edit(&customer());
        let service = FakeRecordService::<CustomerDto>::saving(customer());
        let notifier = RecordingNotifier::default();

        submit_form(&form, &service, &notifier, |_| {}).await;

        assert_eq!(service.update_ids(), vec!["c1".to_string()]);
        assert_eq!(service.create_calls(), 0);
    }

    #[test]
    fn test_edit_prefills_every_field() {
        let mut record = customer();
        record.company = "Asha Group".into();
        record.gst_number = "29ABCDE1234F1Z5".into();
        record.address.city = "Bengaluru".into();
        record.address.pincode = "560001".into();

        let mut form = FormState::new(CustomerDto::default());
        form.open_edit(&record);

        assert_eq!(form.mode, FormMode::Edit { id: "c1".into() });
        assert_eq!(form.draft.name, record.name);
        assert_eq!(form.draft.email, record.email);
        assert_eq!(form.draft.phone, record.phone);
        assert_eq!(form.draft.company, record.company);
        assert_eq!(form.draft.gst_number, record.gst_number);
        assert_eq!(form.draft.address, record.address);
        assert_eq!(form.draft.status, record.status);
    }

    #[tokio::test]
    async fn test_server_error_keeps_modal_open() {
        let form = shared(FormState::new(CustomerDto::default()));
        form.borrow_mut().open_create();
        form.borrow_mut().edit(|d| d.name = "Asha Traders".into());
        let service = FakeRecordService::<CustomerDto>::failing(ApiError::Server {
            status: 409,
            message: "Email already exists".into(),
        });
        let notifier = RecordingNotifier::default();

        let outcome = submit_form(&form, &service, &notifier, |_| {}).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(notifier.errors(), vec!["Email already exists".to_string()]);
        let state = form.borrow();
        assert!(state.is_open);
        assert!(!state.submitting);
        assert_eq!(state.draft.name, "Asha Traders");
    }

    #[tokio::test]
    async fn test_second_submit_while_submitting_is_ignored() {
        let form = shared(FormState::new(CustomerDto::default()));
        form.borrow_mut().open_create();
        form.borrow_mut().edit(|d| d.name = "Asha Traders".into());
        form.borrow_mut().submitting = true;
        let service = FakeRecordService::<CustomerDto>::saving(customer());
        let notifier = RecordingNotifier::default();

        let outcome = submit_form(&form, &service, &notifier, |_| {}).await;

        assert!(matches!(outcome, SubmitOutcome::Busy));
        assert_eq!(service.create_calls(), 0);
    }

    #[tokio::test]
    async fn test_view_mode_never_submits() {
        let form = shared(FormState::new(CustomerDto::default()));
        form.borrow_mut().open_view(&customer());
        form.borrow_mut().edit(|d| d.name.clear());
        let service = FakeRecordService::<CustomerDto>::saving(customer());
        let notifier = RecordingNotifier::default();

        let outcome = submit_form(&form, &service, &notifier, |_| {}).await;

        assert!(matches!(outcome, SubmitOutcome::ReadOnly));
        assert_eq!(form.borrow().draft.name, "Asha Traders");
        assert_eq!(service.update_ids(), Vec::<String>::new());
    }

    #[test]
    fn test_close_discards_draft() {
        let mut form = FormState::new(CustomerDto::default());
        form.open_edit(&customer());
        form.close();
        assert!(!form.is_open);
        assert_eq!(form.mode, FormMode::Create);
        assert_eq!(form.draft.name, "");
        assert_eq!(form.title(), "New Customer");
    }
}
