//! Sidebar with collapsible menu groups

use crate::layout::center::sections::{section, Section};
use crate::layout::global_context::{use_app_context, HOME_SECTION};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<&'static str>, // section keys
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "customers",
            items: vec!["a001_customer", "a008_service_ticket", "a010_invoice", "a009_advertisement"],
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "products",
            items: vec!["a004_product_category", "a005_product", "a006_inventory_item"],
        },
        MenuGroup {
            id: "procurement",
            label: "Procurement",
            icon: "purchases",
            items: vec!["a002_supplier", "a007_purchase_order"],
        },
        MenuGroup {
            id: "hr",
            label: "HR",
            icon: "employees",
            items: vec!["a003_employee"],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    // группа активного раздела раскрыта сразу
    let initial: Vec<&'static str> = ctx.active.with_untracked(|active| {
        get_menu_groups()
            .into_iter()
            .filter(|g| g.items.iter().any(|key| key == active))
            .map(|g| g.id)
            .collect()
    });
    let expanded_groups = RwSignal::new(initial);

    let home = section(HOME_SECTION);

    view! {
        <div class="app-sidebar__content">
            {home.map(|s| view! { <SidebarItem section=s padding="12px" /> })}
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                let items: Vec<Section> = group.items.iter().filter_map(|key| section(key)).collect();
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|ids| {
                                    if let Some(pos) = ids.iter().position(|x| *x == group_id) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|ids| ids.contains(&group_id))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|ids| ids.contains(&group_id))>
                            <div class="app-sidebar__children">
                                {items.iter().map(|s| view! { <SidebarItem section=*s padding="10px" /> }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn SidebarItem(section: Section, padding: &'static str) -> impl IntoView {
    let ctx = use_app_context();
    let key = section.key;

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || ctx.is_active(key)
            style:padding-left=padding
            on:click=move |_| ctx.open_section(key)
        >
            <div class="app-sidebar__item-content">
                {icon(section.icon)}
                <span>{section.label}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_is_a_registered_section() {
        for group in get_menu_groups() {
            for key in group.items {
                assert!(section(key).is_some(), "{} is not registered", key);
            }
        }
    }
}
