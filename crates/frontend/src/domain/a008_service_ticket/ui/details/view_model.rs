use contracts::domain::a008_service_ticket::{ServiceTicket, ServiceTicketDto, TicketPriority, TicketState};
use contracts::shared::validation::FieldErrors;

use crate::shared::form::{FormDraft, FormMode};

impl FormDraft for ServiceTicketDto {
    type Record = ServiceTicket;
    const LABEL: &'static str = "Service ticket";

    fn from_record(_blank: &Self, record: &ServiceTicket) -> Self {
        ServiceTicketDto::from(record)
    }

    fn validate(&self, _mode: &FormMode) -> FieldErrors {
        ServiceTicketDto::validate(self)
    }
}

pub(super) fn priority_options() -> Vec<(String, String)> {
    TicketPriority::ALL
        .iter()
        .map(|p| (p.as_str().to_string(), p.as_str().to_string()))
        .collect()
}

pub(super) fn state_options() -> Vec<(String, String)> {
    TicketState::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;

    #[test]
    fn test_new_ticket_defaults() {
        let mut form = FormState::new(ServiceTicketDto::default());
        form.open_create();
        assert_eq!(form.draft.priority, TicketPriority::Medium);
        assert_eq!(form.draft.state, TicketState::Open);

        assert!(!form.validate());
        assert!(form.error("title").is_some());
        assert!(form.error("customer_name").is_some());
    }

    #[test]
    fn test_state_options_use_labels() {
        let options = state_options();
        assert!(options.contains(&("InProgress".to_string(), "In progress".to_string())));
        assert_eq!(priority_options().len(), 3);
    }
}
