//! Sidebar with the admin sections grouped by area

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (path, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Panel",
            items: vec![
                ("/dashboard", "Resumen", "dashboard"),
                ("/analytics", "Analytics", "chart"),
            ],
        },
        MenuGroup {
            label: "Gestión",
            items: vec![
                ("/users", "Usuarios", "users"),
                ("/verification", "Verificaciones", "shield"),
                ("/support", "Soporte", "message"),
            ],
        },
        MenuGroup {
            label: "Finanzas",
            items: vec![("/transactions", "Transacciones", "dollar")],
        },
    ]
}

/// A section stays highlighted on its nested routes (`/users/42` under `/users`).
pub fn is_active(item_path: &str, current: &str) -> bool {
    current == item_path
        || current
            .strip_prefix(item_path)
            .map(|rest| rest.starts_with('/'))
            .unwrap_or(false)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="app-sidebar__content">
            {get_menu_groups()
                .into_iter()
                .map(|group| view! {
                    <div class="app-sidebar__group">
                        <div class="app-sidebar__group-label">{group.label}</div>
                        {group.items.into_iter().map(|(path, label, icon_name)| view! {
                            <A href=path attr:class=move || {
                                if is_active(path, &location.pathname.get()) {
                                    "app-sidebar__item app-sidebar__item--active"
                                } else {
                                    "app-sidebar__item"
                                }
                            }>
                                <div class="app-sidebar__item-content">
                                    {icon(icon_name)}
                                    <span>{label}</span>
                                </div>
                            </A>
                        }).collect_view()}
                    </div>
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        assert!(is_active("/users", "/users"));
        assert!(is_active("/users", "/users/42"));
        assert!(!is_active("/users", "/users-archive"));
        assert!(!is_active("/support", "/dashboard"));
    }

    #[test]
    fn test_every_item_has_an_absolute_path() {
        for group in get_menu_groups() {
            for (path, _, _) in group.items {
                assert!(path.starts_with('/'));
            }
        }
    }
}
