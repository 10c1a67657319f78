//! Sidebar with collapsible menu groups; entries the user may not view are left out

use contracts::system::auth::UserRoles;
use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    key: &'static str,
    icon: &'static str,
    /// Role whose view permission shows the entry
    role: Option<&'static str>,
}

const fn item(key: &'static str, icon: &'static str, role: Option<&'static str>) -> MenuItem {
    MenuItem { key, icon, role }
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
    staff_only: bool,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "parts",
            label: "Parts",
            icon: "part",
            items: vec![
                item("a001_part", "part", Some("part")),
                item("a001_part_category", "columns", Some("part_category")),
            ],
            staff_only: false,
        },
        MenuGroup {
            id: "stock",
            label: "Stock",
            icon: "stock",
            items: vec![
                item("a003_stock_item", "stock", Some("stock")),
                item("a004_stock_location", "location", Some("stock_location")),
                item("a010_transfer_order", "truck", Some("transfer_order")),
            ],
            staff_only: false,
        },
        MenuGroup {
            id: "purchasing",
            label: "Purchasing",
            icon: "shopping-cart",
            items: vec![
                item("a005_company", "user", None),
                item("a006_supplier_part", "part", Some("purchase_order")),
                item("a007_purchase_order", "shopping-cart", Some("purchase_order")),
            ],
            staff_only: false,
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "truck",
            items: vec![
                item("a008_sales_order", "truck", Some("sales_order")),
                item("a009_return_order", "refresh", Some("return_order")),
            ],
            staff_only: false,
        },
        MenuGroup {
            id: "manufacturing",
            label: "Manufacturing",
            icon: "tool",
            items: vec![item("a011_build_order", "tool", Some("build"))],
            staff_only: false,
        },
        MenuGroup {
            id: "settings",
            label: "Settings",
            icon: "settings",
            items: vec![
                item("a012_project_code", "columns", None),
                item("sys_users", "user", None),
            ],
            staff_only: true,
        },
    ]
}

/// Groups and entries visible with `roles`; empty groups are dropped
fn visible_groups(roles: &UserRoles) -> Vec<MenuGroup> {
    let staff = roles.is_staff || roles.is_superuser;
    get_menu_groups()
        .into_iter()
        .filter(|group| staff || !group.staff_only)
        .filter_map(|mut group| {
            group
                .items
                .retain(|item| item.role.map_or(true, |role| roles.can_view(role)));
            (!group.items.is_empty()).then_some(group)
        })
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, _) = use_auth();
    let expanded_groups = RwSignal::new(vec!["parts".to_string(), "stock".to_string()]);

    move || {
        let groups = auth_state.with(|state| visible_groups(&state.roles));
        view! {
            <div class="app-sidebar__content">
                {groups.into_iter().map(|group| {
                    let gid = StoredValue::new(group.id.to_string());
                    let is_expanded = move || expanded_groups.with(|g| gid.with_value(|id| g.contains(id)));
                    let items = StoredValue::new(group.items);
                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    let id = gid.get_value();
                                    expanded_groups.update(move |groups| {
                                        if let Some(pos) = groups.iter().position(|x| *x == id) {
                                            groups.remove(pos);
                                        } else {
                                            groups.push(id);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div class="app-sidebar__chevron" class:app-sidebar__chevron--expanded=is_expanded>
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {items.get_value().into_iter().map(|entry| {
                                        let key = entry.key;
                                        let label = tab_label_for_key(key);
                                        let title = label.clone();
                                        view! {
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || {
                                                    ctx.active.with(|a| a.as_deref() == Some(key))
                                                }
                                                style:padding-left="10px"
                                                on:click=move |_| ctx.open_tab(key, &title)
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(entry.icon)}
                                                    <span>{label}</span>
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                }).collect_view()}
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(groups: &[MenuGroup]) -> Vec<&'static str> {
        groups.iter().flat_map(|g| g.items.iter().map(|i| i.key)).collect()
    }

    #[test]
    fn every_entry_has_a_title() {
        for key in keys(&get_menu_groups()) {
            assert_ne!(tab_label_for_key(key), key);
        }
    }

    #[test]
    fn entries_follow_view_permission() {
        let mut roles = UserRoles::default();
        roles
            .roles
            .insert("stock".to_string(), Some(vec!["view".to_string()]));
        roles.roles.insert("part".to_string(), None);

        let visible = keys(&visible_groups(&roles));
        assert_eq!(visible, vec!["a003_stock_item", "a005_company"]);
    }

    #[test]
    fn staff_sees_settings() {
        let roles = UserRoles {
            is_staff: true,
            ..UserRoles::default()
        };
        let groups = visible_groups(&roles);
        assert!(groups.iter().any(|g| g.id == "settings"));

        let superuser = UserRoles {
            is_superuser: true,
            ..UserRoles::default()
        };
        assert_eq!(keys(&visible_groups(&superuser)).len(), keys(&get_menu_groups()).len());
    }
}
