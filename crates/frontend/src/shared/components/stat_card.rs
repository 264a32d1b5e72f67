use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::list_controller::ListStats;

fn format_thousands(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<usize>,
    /// "success", "error" or "" for neutral
    #[prop(optional)]
    tone: &'static str,
) -> impl IntoView {
    let class = match tone {
        "success" => "stat-card stat-card--success",
        "error" => "stat-card stat-card--error",
        _ => "stat-card",
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || format_thousands(value.get())}</div>
            </div>
        </div>
    }
}

/// Total / active / inactive counters of the loaded list.
#[component]
pub fn StatCards(
    #[prop(into)]
    stats: Signal<ListStats>,
    /// Icon for the "Total" card
    icon_name: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat-cards">
            <StatCard label="Total" icon_name=icon_name value=Signal::derive(move || stats.get().total) />
            <StatCard label="Active" icon_name="check" tone="success" value=Signal::derive(move || stats.get().active) />
            <StatCard label="Inactive" icon_name="alert" tone="error" value=Signal::derive(move || stats.get().inactive) />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(7), "7");
        assert_eq!(format_thousands(1234), "1\u{00a0}234");
        assert_eq!(format_thousands(1234567), "1\u{00a0}234\u{00a0}567");
    }
}
