use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{DateRange, ListParams, ListQuery, RecordId};

/// Cache/tab name of the billing register
pub const BILLING_REGISTER: &str = "p900_billing";

// ============================================================================
// Status and tabs
// ============================================================================

/// Position of a billable line in the posting workflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingStatus {
    #[default]
    PendingAccounting,
    Accounted,
    Invoiced,
}

impl BillingStatus {
    pub fn code(&self) -> &'static str {
        match self {
            BillingStatus::PendingAccounting => "pending_accounting",
            BillingStatus::Accounted => "accounted",
            BillingStatus::Invoiced => "invoiced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillingStatus::PendingAccounting => "Pendiente de contabilizar",
            BillingStatus::Accounted => "Contabilizado",
            BillingStatus::Invoiced => "Facturado",
        }
    }
}

/// Bulk mutation offered by a billing tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Contabilizar,
    Facturar,
}

impl BulkAction {
    /// Backend path under `/api/billing/`
    pub fn path(&self) -> &'static str {
        match self {
            BulkAction::Contabilizar => "contabilizar",
            BulkAction::Facturar => "facturar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BulkAction::Contabilizar => "Contabilizar",
            BulkAction::Facturar => "Facturar",
        }
    }

    fn past_participle(&self) -> &'static str {
        match self {
            BulkAction::Contabilizar => "contabilizados",
            BulkAction::Facturar => "facturados",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BillingTab {
    #[default]
    PorContabilizar,
    PorFacturar,
    Facturado,
}

impl BillingTab {
    pub const ALL: [BillingTab; 3] = [
        BillingTab::PorContabilizar,
        BillingTab::PorFacturar,
        BillingTab::Facturado,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            BillingTab::PorContabilizar => "Por contabilizar",
            BillingTab::PorFacturar => "Por facturar",
            BillingTab::Facturado => "Facturado",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            BillingTab::PorContabilizar => "por_contabilizar",
            BillingTab::PorFacturar => "por_facturar",
            BillingTab::Facturado => "facturado",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Records listed on this tab
    pub fn status(&self) -> BillingStatus {
        match self {
            BillingTab::PorContabilizar => BillingStatus::PendingAccounting,
            BillingTab::PorFacturar => BillingStatus::Accounted,
            BillingTab::Facturado => BillingStatus::Invoiced,
        }
    }

    pub fn bulk_action(&self) -> Option<BulkAction> {
        match self {
            BillingTab::PorContabilizar => Some(BulkAction::Contabilizar),
            BillingTab::PorFacturar => Some(BulkAction::Facturar),
            BillingTab::Facturado => None,
        }
    }

    /// The bulk button is enabled with a selection and nothing running
    pub fn can_run_bulk(&self, selected: usize, busy: bool) -> bool {
        self.bulk_action().is_some() && selected > 0 && !busy
    }
}

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingRecord {
    pub id: RecordId,
    #[serde(default)]
    pub order_id: Option<RecordId>,
    #[serde(default)]
    pub order_number: Option<String>,
    pub company_id: RecordId,
    pub company_name: String,
    pub concept: String,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Billed month
    pub period: NaiveDate,
    pub status: BillingStatus,
    #[serde(default)]
    pub accounted_date: Option<NaiveDate>,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub invoice_date: Option<NaiveDate>,
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl BillingRecord {
    pub fn period_label(&self) -> String {
        self.period.format("%m/%Y").to_string()
    }

    pub fn amount_label(&self) -> String {
        format!("{:.2} {}", self.amount, self.currency)
    }

    pub const CSV_HEADER: [&'static str; 9] = [
        "ID",
        "Orden",
        "Empresa",
        "Concepto",
        "Periodo",
        "Importe",
        "Moneda",
        "Estado",
        "Factura",
    ];

    pub fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.order_number.clone().unwrap_or_default(),
            self.company_name.clone(),
            self.concept.clone(),
            self.period_label(),
            format!("{:.2}", self.amount),
            self.currency.clone(),
            self.status.label().to_string(),
            self.invoice_number.clone().unwrap_or_default(),
        ]
    }
}

/// Total amount of a set of records, per currency
pub fn totals_by_currency(records: &[BillingRecord]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for record in records {
        match totals.iter_mut().find(|(c, _)| *c == record.currency) {
            Some((_, sum)) => *sum += record.amount,
            None => totals.push((record.currency.clone(), record.amount)),
        }
    }
    totals
}

// ============================================================================
// Queries and bulk actions
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillingFilter {
    #[serde(flatten)]
    pub params: ListParams,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<BillingStatus>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub company_id: Option<RecordId>,
    #[serde(flatten)]
    pub period: DateRange,
}

impl BillingFilter {
    pub fn for_tab(tab: BillingTab) -> Self {
        Self {
            status: Some(tab.status()),
            ..Default::default()
        }
    }
}

impl ListQuery for BillingFilter {
    fn list_params(&self) -> &ListParams {
        &self.params
    }

    fn list_params_mut(&mut self) -> &mut ListParams {
        &mut self.params
    }

    /// The tab status is implied, not a user filter
    fn active_filters(&self) -> usize {
        usize::from(self.company_id.is_some()) + usize::from(!self.period.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillingStats {
    pub pending_accounting: u64,
    pub accounted: u64,
    pub invoiced: u64,
    #[serde(default)]
    pub pending_amount: f64,
}

impl BillingStats {
    pub fn count_for(&self, tab: BillingTab) -> u64 {
        match tab {
            BillingTab::PorContabilizar => self.pending_accounting,
            BillingTab::PorFacturar => self.accounted,
            BillingTab::Facturado => self.invoiced,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkActionRequest {
    pub ids: Vec<RecordId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkFailure {
    pub id: RecordId,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkActionResponse {
    pub processed: u32,
    #[serde(default)]
    pub failed: Vec<BulkFailure>,
}

impl BulkActionResponse {
    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Toast text after a bulk action
    pub fn summary(&self, action: BulkAction) -> String {
        let mut text = format!("{} registros {}", self.processed, action.past_participle());
        if !self.failed.is_empty() {
            text.push_str(&format!(", {} con error", self.failed.len()));
            if let Some(first) = self.failed.first() {
                text.push_str(&format!(" (#{}: {})", first.id, first.reason));
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: RecordId, amount: f64, currency: &str) -> BillingRecord {
        BillingRecord {
            id,
            order_id: None,
            order_number: Some(format!("OS-{}", id)),
            company_id: 1,
            company_name: "Fibra Norte".into(),
            concept: "Cuota enlace 1 Gbps".into(),
            amount,
            currency: currency.into(),
            period: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status: BillingStatus::PendingAccounting,
            accounted_date: None,
            invoice_number: None,
            invoice_date: None,
        }
    }

    #[test]
    fn test_tab_rules() {
        assert_eq!(
            BillingTab::PorContabilizar.bulk_action(),
            Some(BulkAction::Contabilizar)
        );
        assert_eq!(BillingTab::PorFacturar.status(), BillingStatus::Accounted);
        assert_eq!(BillingTab::Facturado.bulk_action(), None);
        for tab in BillingTab::ALL {
            assert_eq!(BillingTab::from_key(tab.key()), Some(tab));
            assert!(!tab.can_run_bulk(0, false));
            assert!(!tab.can_run_bulk(3, true));
        }
        assert!(BillingTab::PorFacturar.can_run_bulk(3, false));
        assert!(!BillingTab::Facturado.can_run_bulk(3, false));
    }

    #[test]
    fn test_filter_for_tab() {
        let filter = BillingFilter::for_tab(BillingTab::PorFacturar);
        assert_eq!(filter.active_filters(), 0);
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["status"], "accounted");
        assert_eq!(json["page"], 1);
    }

    #[test]
    fn test_bulk_summary() {
        let ok = BulkActionResponse {
            processed: 4,
            failed: vec![],
        };
        assert_eq!(ok.summary(BulkAction::Contabilizar), "4 registros contabilizados");

        let partial = BulkActionResponse {
            processed: 2,
            failed: vec![BulkFailure {
                id: 17,
                reason: "Sin cuenta contable".into(),
            }],
        };
        assert!(!partial.is_complete_success());
        assert_eq!(
            partial.summary(BulkAction::Facturar),
            "2 registros facturados, 1 con error (#17: Sin cuenta contable)"
        );
    }

    #[test]
    fn test_csv_row_and_totals() {
        let r = record(5, 120.5, "EUR");
        let row = r.csv_row();
        assert_eq!(row.len(), BillingRecord::CSV_HEADER.len());
        assert_eq!(row[4], "03/2024");
        assert_eq!(row[5], "120.50");
        assert_eq!(r.amount_label(), "120.50 EUR");

        let totals = totals_by_currency(&[record(1, 10.0, "EUR"), record(2, 5.0, "USD"), r]);
        assert_eq!(
            totals,
            vec![("EUR".to_string(), 130.5), ("USD".to_string(), 5.0)]
        );
    }
}
