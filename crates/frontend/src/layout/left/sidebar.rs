//! Sidebar with grouped navigation; each item opens (or activates) a
//! tab in the center area.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tab_labels::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (key, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "operations",
            label: "Operations",
            items: vec![
                ("trips", tab_label_for_key("trips"), "trips"),
                ("offers", tab_label_for_key("offers"), "offers"),
            ],
        },
        MenuGroup {
            id: "contracts",
            label: "Contracts",
            items: vec![
                (
                    "rental_agreements",
                    tab_label_for_key("rental_agreements"),
                    "agreements",
                ),
                ("invoices", tab_label_for_key("invoices"), "invoices"),
            ],
        },
        MenuGroup {
            id: "fleet",
            label: "Fleet",
            items: vec![
                ("cars", tab_label_for_key("cars"), "cars"),
                ("drivers", tab_label_for_key("drivers"), "drivers"),
            ],
        },
        MenuGroup {
            id: "finance",
            label: "Finance",
            items: vec![(
                "bank_accounts",
                tab_label_for_key("bank_accounts"),
                "bank",
            )],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let collapsed = RwSignal::new(Vec::<&'static str>::new());

    let toggle_group = move |group_id: &'static str| {
        collapsed.update(|ids| {
            if let Some(position) = ids.iter().position(|id| *id == group_id) {
                ids.remove(position);
            } else {
                ids.push(group_id);
            }
        });
    };

    view! {
        <nav class="sidebar">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                let items = group.items;
                let is_collapsed = move || collapsed.get().contains(&group_id);
                view! {
                    <div class="sidebar-group">
                        <div
                            class="sidebar-group__header"
                            on:click=move |_| toggle_group(group_id)
                        >
                            <span class=move || {
                                if is_collapsed() {
                                    "sidebar-group__chevron"
                                } else {
                                    "sidebar-group__chevron sidebar-group__chevron--open"
                                }
                            }>
                                {icon("chevron-down")}
                            </span>
                            <span class="sidebar-group__label">{group.label}</span>
                        </div>
                        <Show when=move || !is_collapsed()>
                            {items.iter().copied().map(|(key, label, item_icon)| {
                                let is_active = move || {
                                    tabs_store.active.get().as_deref() == Some(key)
                                };
                                view! {
                                    <button
                                        class=move || {
                                            if is_active() {
                                                "sidebar-item sidebar-item--active"
                                            } else {
                                                "sidebar-item"
                                            }
                                        }
                                        on:click=move |_| tabs_store.open_tab(key, label)
                                    >
                                        {icon(item_icon)}
                                        <span>{label}</span>
                                    </button>
                                }
                            }).collect_view()}
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
