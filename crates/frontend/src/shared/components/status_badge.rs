use contracts::shared::status::RecordStatus;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn StatusBadge(status: RecordStatus) -> impl IntoView {
    let color = if status.is_active() {
        BadgeColor::Success
    } else {
        BadgeColor::Informative
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {status.as_str()}
        </Badge>
    }
}

/// Badge for workflow states (order, ticket, invoice).
#[component]
pub fn StateBadge(label: &'static str, color: BadgeColor) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {label}
        </Badge>
    }
}

/// Options for a status `<select>`: (value, label).
pub fn status_options() -> Vec<(String, String)> {
    RecordStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect()
}
