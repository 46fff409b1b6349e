//! Tab content registry: maps tab.key → View.
//!
//! List pages use the entity full name as key, detail panels use
//! `{full_name}_detail_{id|new}`.

use crate::domain::a001_company::ui::{CompanyDetails, CompanyList};
use crate::domain::a002_contact::ui::{ContactDetails, ContactList};
use crate::domain::a003_contractor::ui::{ContractorDetails, ContractorList};
use crate::domain::a004_circuit::ui::{CircuitDetails, CircuitList};
use crate::domain::a005_link::ui::{LinkDetails, LinkList};
use crate::domain::a006_service_order::ui::{ServiceOrderDetails, ServiceOrderList};
use crate::domain::a007_viability::ui::{ViabilityDetails, ViabilityList};
use crate::domain::a008_p2p::ui::{P2pDetails, P2pList};
use crate::domain::a009_other_service::ui::{OtherServiceDetails, OtherServiceList};
use crate::domain::a010_connection_type::ui::{ConnectionTypeDetails, ConnectionTypeList};
use crate::domain::a011_link_type::ui::{LinkTypeDetails, LinkTypeList};
use crate::layout::global_context::AppGlobalContext;
use crate::projections::p900_billing::ui::BillingRegister;
use crate::system::auth::guard::RequireAdmin;
use crate::system::ftp::ui::{FtpBrowserPage, FtpConfigDetails, FtpConfigList, FTP_BROWSER_TAB};
use crate::system::roles::ui::{RoleDetails, RoleList};
use crate::system::users::ui::{UserDetails, UserList};
use crate::usecases::u501_viability_wizard::ViabilityWizardPage;
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
use contracts::domain::common::{parse_detail_tab_key, Entity, RecordId};
use contracts::projections::p900_billing::BILLING_REGISTER;
use contracts::system::ftp::FtpConfig;
use contracts::system::roles::Role;
use contracts::system::users::User;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_viability_wizard::ViabilityWizard;
use leptos::logging::log;
use leptos::prelude::*;

type DetailRenderer = fn(Option<RecordId>, Callback<()>) -> AnyView;

/// Detail panel of entity `E` when `key` is one of its detail tab keys.
/// Closing the panel closes its tab.
fn entity_detail<E: Entity>(
    key: &str,
    tabs_store: AppGlobalContext,
    render: DetailRenderer,
) -> Option<AnyView> {
    let id = parse_detail_tab_key::<E>(key)?;
    let key_for_close = key.to_string();
    let on_close = Callback::new(move |_| tabs_store.close_tab(&key_for_close));
    Some(render(id, on_close))
}

fn detail_content(key: &str, tabs_store: AppGlobalContext) -> Option<AnyView> {
    entity_detail::<Company>(key, tabs_store, |id, on_close| {
        view! { <CompanyDetails id=id on_close=on_close /> }.into_any()
    })
    .or_else(|| {
        entity_detail::<Contact>(key, tabs_store, |id, on_close| {
            view! { <ContactDetails id=id on_close=on_close /> }.into_any()
        })
    })
    .or_else(|| {
        entity_detail::<Contractor>(key, tabs_store, |id, on_close| {
            view! { <ContractorDetails id=id on_close=on_close /> }.into_any()
        })
    })
    .or_else(|| {
        entity_detail::<Circuit>(key, tabs_store, |id, on_close| {
            view! { <CircuitDetails id=id on_close=on_close /> }.into_any()
        })
    })
    .or_else(|| {
        entity_detail::<Link>(key, tabs_store, |id, on_close| {
            view! { <LinkDetails id=id on_close=on_close /> }.into_any()
        })
    })
    .or_else(|| {
        entity_detail::<ServiceOrder>(key, tabs_store, |id, on_close| {
            view! { <ServiceOrderDetails id=id on_close=on_close /> }.into_any()
        })
    })
    .or_else(|| {
        entity_detail::<ViabilityRequest>(key, tabs_store, |id, on_close| {
            view! { <ViabilityDetails id=id on_close=on_close /> }.into_any()
        })
    })
    .or_else(|| {
        entity_detail::<P2pRecord>(key, tabs_store, |id, on_close| {
            view! { <P2pDetails id=id on_close=on_close /> }.into_any()
        })
    })
    .or_else(|| {
        entity_detail::<OtherService>(key, tabs_store, |id, on_close| {
            view! { <OtherServiceDetails id=id on_close=on_close /> }.into_any()
        })
    })
    .or_else(|| {
        entity_detail::<ConnectionType>(key, tabs_store, |id, on_close| {
            view! { <ConnectionTypeDetails id=id on_close=on_close /> }.into_any()
        })
    })
    .or_else(|| {
        entity_detail::<LinkType>(key, tabs_store, |id, on_close| {
            view! { <LinkTypeDetails id=id on_close=on_close /> }.into_any()
        })
    })
    // Administración
    .or_else(|| {
        entity_detail::<User>(key, tabs_store, |id, on_close| {
            view! { <RequireAdmin><UserDetails id=id on_close=on_close /></RequireAdmin> }
                .into_any()
        })
    })
    .or_else(|| {
        entity_detail::<Role>(key, tabs_store, |id, on_close| {
            view! { <RequireAdmin><RoleDetails id=id on_close=on_close /></RequireAdmin> }
                .into_any()
        })
    })
    .or_else(|| {
        entity_detail::<FtpConfig>(key, tabs_store, |id, on_close| {
            view! { <RequireAdmin><FtpConfigDetails id=id on_close=on_close /></RequireAdmin> }
                .into_any()
        })
    })
}

/// Render the content of a tab by its key.
///
/// `tabs_store` lets detail panels close their own tab. Unknown keys get a
/// placeholder.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    if let Some(view) = detail_content(key, tabs_store) {
        return view;
    }

    match key {
        // Comercial
        k if k == Company::full_name() => view! { <CompanyList /> }.into_any(),
        k if k == Contact::full_name() => view! { <ContactList /> }.into_any(),
        k if k == ViabilityRequest::full_name() => view! { <ViabilityList /> }.into_any(),
        k if k == ViabilityWizard::full_name() => view! { <ViabilityWizardPage /> }.into_any(),

        // Red
        k if k == Circuit::full_name() => view! { <CircuitList /> }.into_any(),
        k if k == Link::full_name() => view! { <LinkList /> }.into_any(),
        k if k == P2pRecord::full_name() => view! { <P2pList /> }.into_any(),
        k if k == ConnectionType::full_name() => view! { <ConnectionTypeList /> }.into_any(),
        k if k == LinkType::full_name() => view! { <LinkTypeList /> }.into_any(),

        // Operaciones
        k if k == ServiceOrder::full_name() => view! { <ServiceOrderList /> }.into_any(),
        k if k == Contractor::full_name() => view! { <ContractorList /> }.into_any(),
        k if k == OtherService::full_name() => view! { <OtherServiceList /> }.into_any(),
        FTP_BROWSER_TAB => view! { <FtpBrowserPage /> }.into_any(),

        // Facturación
        BILLING_REGISTER => view! { <BillingRegister /> }.into_any(),

        // Administración
        k if k == User::full_name() => {
            view! { <RequireAdmin><UserList /></RequireAdmin> }.into_any()
        }
        k if k == Role::full_name() => {
            view! { <RequireAdmin><RoleList /></RequireAdmin> }.into_any()
        }
        k if k == FtpConfig::full_name() => {
            view! { <RequireAdmin><FtpConfigList /></RequireAdmin> }.into_any()
        }

        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">"Página no disponible"</div> }.into_any()
        }
    }
}
