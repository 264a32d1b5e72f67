use serde::{Deserialize, Serialize};

use crate::shared::record::Record;
use crate::shared::validation::{check_phone, require, FieldErrors};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 3] = [TicketPriority::Low, TicketPriority::Medium, TicketPriority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
        }
    }

    pub fn from_str_lossy(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(value))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketState {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketState {
    pub const ALL: [TicketState; 4] = [
        TicketState::Open,
        TicketState::InProgress,
        TicketState::Resolved,
        TicketState::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketState::Open => "Open",
            TicketState::InProgress => "InProgress",
            TicketState::Resolved => "Resolved",
            TicketState::Closed => "Closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketState::InProgress => "In progress",
            other => other.as_str(),
        }
    }

    pub fn from_str_lossy(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(value))
            .unwrap_or_default()
    }
}

/// Заявка на сервисное обслуживание
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceTicket {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub customer_name: String,
    pub phone: String,
    pub description: String,
    pub priority: TicketPriority,
    #[serde(rename = "status")]
    pub state: TicketState,
    pub created_at: Option<String>,
}

impl Record for ServiceTicket {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceTicketDto {
    pub title: String,
    pub customer_name: String,
    pub phone: String,
    pub description: String,
    pub priority: TicketPriority,
    #[serde(rename = "status")]
    pub state: TicketState,
}

impl From<&ServiceTicket> for ServiceTicketDto {
    fn from(t: &ServiceTicket) -> Self {
        Self {
            title: t.title.clone(),
            customer_name: t.customer_name.clone(),
            phone: t.phone.clone(),
            description: t.description.clone(),
            priority: t.priority,
            state: t.state,
        }
    }
}

impl ServiceTicketDto {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "title", &self.title, "Title");
        require(&mut errors, "customer_name", &self.customer_name, "Customer name");
        check_phone(&mut errors, "phone", &self.phone);
        errors
    }
}
