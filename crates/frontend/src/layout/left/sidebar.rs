//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use crate::system::ftp::ui::FTP_BROWSER_TAB;
use contracts::domain::a001_company::aggregate::Company;
use contracts::domain::a002_contact::aggregate::Contact;
use contracts::domain::a003_contractor::aggregate::Contractor;
use contracts::domain::a004_circuit::aggregate::Circuit;
use contracts::domain::a005_link::aggregate::Link;
use contracts::domain::a006_service_order::aggregate::ServiceOrder;
use contracts::domain::a007_viability::aggregate::ViabilityRequest;
use contracts::domain::a008_p2p::aggregate::P2pRecord;
use contracts::domain::a009_other_service::aggregate::OtherService;
use contracts::domain::a010_connection_type::aggregate::ConnectionType;
use contracts::domain::a011_link_type::aggregate::LinkType;
use contracts::domain::common::Entity;
use contracts::projections::p900_billing::BILLING_REGISTER;
use contracts::system::ftp::FtpConfig;
use contracts::system::roles::Role;
use contracts::system::users::User;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_viability_wizard::ViabilityWizard;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    key: String,
    icon: &'static str,
}

impl MenuItem {
    fn new(key: impl Into<String>, icon: &'static str) -> Self {
        Self {
            key: key.into(),
            icon,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
    admin_only: bool,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "commercial",
            label: "Comercial",
            icon: "building",
            items: vec![
                MenuItem::new(Company::full_name(), "building"),
                MenuItem::new(Contact::full_name(), "contact"),
                MenuItem::new(ViabilityRequest::full_name(), "map-pin"),
                MenuItem::new(ViabilityWizard::full_name(), "wand"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "network",
            label: "Red",
            icon: "radio",
            items: vec![
                MenuItem::new(Circuit::full_name(), "cable"),
                MenuItem::new(Link::full_name(), "link"),
                MenuItem::new(P2pRecord::full_name(), "radio"),
                MenuItem::new(ConnectionType::full_name(), "layers"),
                MenuItem::new(LinkType::full_name(), "list"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "operations",
            label: "Operaciones",
            icon: "clipboard",
            items: vec![
                MenuItem::new(ServiceOrder::full_name(), "clipboard"),
                MenuItem::new(Contractor::full_name(), "hard-hat"),
                MenuItem::new(OtherService::full_name(), "package"),
                MenuItem::new(FTP_BROWSER_TAB, "folder"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "billing",
            label: "Facturación",
            icon: "receipt",
            items: vec![MenuItem::new(BILLING_REGISTER, "receipt")],
            admin_only: false,
        },
        MenuGroup {
            id: "admin",
            label: "Administración",
            icon: "settings",
            items: vec![
                MenuItem::new(User::full_name(), "users"),
                MenuItem::new(Role::full_name(), "shield"),
                MenuItem::new(FtpConfig::full_name(), "server"),
            ],
            admin_only: true,
        },
    ]
}

/// Menu groups the current user may see
fn visible_groups(is_admin: bool) -> Vec<MenuGroup> {
    get_menu_groups()
        .into_iter()
        .filter(|group| is_admin || !group.admin_only)
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let expanded_groups = RwSignal::new(vec!["commercial".to_string()]);

    let groups = move || visible_groups(auth_state.with(|s| s.is_admin()));

    view! {
        <div class="app-sidebar__content">
            <For
                each=groups
                key=|group| group.id
                children=move |group: MenuGroup| {
                    let group_id = group.id.to_string();
                    let group_id_for_click = group_id.clone();
                    let group_id_for_exp = group_id.clone();
                    let items = StoredValue::new(group.items.clone());

                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    let gid = group_id_for_click.clone();
                                    expanded_groups.update(move |ids| {
                                        if let Some(pos) = ids.iter().position(|x| x == &gid) {
                                            ids.remove(pos);
                                        } else {
                                            ids.push(gid);
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
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.with(|ids| ids.contains(&group_id_for_exp))
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            <Show when=move || expanded_groups.with(|ids| ids.contains(&group_id))>
                                <div class="app-sidebar__children">
                                    {items.get_value().into_iter().map(|item| {
                                        let key = StoredValue::new(item.key.clone());
                                        let label = tab_label_for_key(&item.key);
                                        let title = StoredValue::new(label.clone());
                                        view! {
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || {
                                                    ctx.active.with(|a| a.as_deref() == Some(key.get_value().as_str()))
                                                }
                                                style:padding-left="10px"
                                                on:click=move |_| {
                                                    ctx.open_tab(&key.get_value(), &title.get_value());
                                                }
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(item.icon)}
                                                    <span>{label}</span>
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_group_hidden_for_regular_users() {
        let labels: Vec<_> = visible_groups(false).iter().map(|g| g.label).collect();
        assert_eq!(labels, vec!["Comercial", "Red", "Operaciones", "Facturación"]);
        assert_eq!(visible_groups(true).len(), 5);
    }

    #[test]
    fn test_menu_keys_are_unique() {
        let mut keys: Vec<String> = get_menu_groups()
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|i| i.key))
            .collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
        assert!(keys.contains(&"a007_viability".to_string()));
    }
}
