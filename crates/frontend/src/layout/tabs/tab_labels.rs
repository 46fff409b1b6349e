//! Tab titles for every key the shell can open.
//!
//! Entity tabs take their names from the `Entity` impls in contracts, the
//! remaining pages are listed by hand. Fallback: the key itself.

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
use contracts::domain::common::{parse_detail_tab_key, Entity};
use contracts::projections::p900_billing::BILLING_REGISTER;
use contracts::system::ftp::FtpConfig;
use contracts::system::roles::Role;
use contracts::system::users::User;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_viability_wizard::ViabilityWizard;

/// Title of a detail tab: «<entity> · <identifier>».
///
/// Example: `detail_tab_label("Empresa", "Acme")` → `"Empresa · Acme"`
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

/// List or detail title when `key` belongs to entity `E`
fn entity_label<E: Entity>(key: &str) -> Option<String> {
    if key == E::full_name() {
        return Some(E::list_name().to_string());
    }
    parse_detail_tab_key::<E>(key).map(|id| match id {
        Some(id) => detail_tab_label(E::element_name(), &format!("#{}", id)),
        None => detail_tab_label(E::element_name(), "nuevo"),
    })
}

/// Readable title for a tab key, used when a tab is opened without one
/// (e.g. restored from `?active=`).
pub fn tab_label_for_key(key: &str) -> String {
    let entity = entity_label::<Company>(key)
        .or_else(|| entity_label::<Contact>(key))
        .or_else(|| entity_label::<Contractor>(key))
        .or_else(|| entity_label::<Circuit>(key))
        .or_else(|| entity_label::<Link>(key))
        .or_else(|| entity_label::<ServiceOrder>(key))
        .or_else(|| entity_label::<ViabilityRequest>(key))
        .or_else(|| entity_label::<P2pRecord>(key))
        .or_else(|| entity_label::<OtherService>(key))
        .or_else(|| entity_label::<ConnectionType>(key))
        .or_else(|| entity_label::<LinkType>(key))
        .or_else(|| entity_label::<User>(key))
        .or_else(|| entity_label::<Role>(key))
        .or_else(|| entity_label::<FtpConfig>(key));
    if let Some(label) = entity {
        return label;
    }

    match key {
        k if k == ViabilityWizard::full_name() => ViabilityWizard::display_name().to_string(),
        BILLING_REGISTER => "Facturación".to_string(),
        FTP_BROWSER_TAB => "Explorador FTP".to_string(),
        _ => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_and_detail_labels() {
        assert_eq!(tab_label_for_key("a001_company"), "Empresas");
        assert_eq!(tab_label_for_key("a005_link_detail_7"), "Enlace · #7");
        assert_eq!(tab_label_for_key("sys_role_detail_new"), "Rol · nuevo");
        assert_eq!(tab_label_for_key("sys_user"), "Usuarios");
    }

    #[test]
    fn test_page_labels_and_fallback() {
        assert_eq!(tab_label_for_key("u501_viability_wizard"), "Nueva viabilidad");
        assert_eq!(tab_label_for_key("p900_billing"), "Facturación");
        assert_eq!(tab_label_for_key("sys_ftp_browser"), "Explorador FTP");
        assert_eq!(tab_label_for_key("unknown_tab"), "unknown_tab");
    }
}
