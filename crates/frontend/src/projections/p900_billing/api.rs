//! Billing register: cached reads and the bulk posting actions.

use contracts::domain::common::{Paginated, RecordId};
use contracts::projections::p900_billing::{
    BillingFilter, BillingRecord, BillingStats, BulkAction, BulkActionRequest, BulkActionResponse,
    BILLING_REGISTER,
};

use crate::shared::api_utils::{endpoint_url, with_query};
use crate::shared::entity_client::query_string;
use crate::shared::export::CsvExportable;
use crate::shared::http;
use crate::shared::state::{use_query_client, QueryClient, QueryKey};

const BILLING_STALE_MINUTES: u32 = 5;

impl CsvExportable for BillingRecord {
    fn headers() -> Vec<&'static str> {
        BillingRecord::CSV_HEADER.to_vec()
    }

    fn to_csv_row(&self) -> Vec<String> {
        self.csv_row()
    }
}

#[derive(Clone, Copy)]
pub struct BillingClient {
    query: QueryClient,
}

impl BillingClient {
    pub fn new(query: QueryClient) -> Self {
        Self { query }
    }

    pub async fn list(&self, filter: &BillingFilter) -> Result<Paginated<BillingRecord>, String> {
        let query = query_string(filter)?;
        let url = with_query(endpoint_url("billing"), &query);
        self.query
            .fetch_cached(
                QueryKey::list(BILLING_REGISTER, &query),
                BILLING_STALE_MINUTES,
                || http::get_json::<Paginated<BillingRecord>>(&url),
            )
            .await
    }

    pub async fn stats(&self) -> Result<BillingStats, String> {
        let url = format!("{}/stats", endpoint_url("billing"));
        self.query
            .fetch_cached(QueryKey::stats(BILLING_REGISTER), BILLING_STALE_MINUTES, || {
                http::get_json::<BillingStats>(&url)
            })
            .await
    }

    /// `POST /api/billing/{contabilizar|facturar}`. The register is
    /// invalidated once the backend answered, even for partial failures.
    pub async fn run_bulk(
        &self,
        action: BulkAction,
        ids: Vec<RecordId>,
    ) -> Result<BulkActionResponse, String> {
        let url = format!("{}/{}", endpoint_url("billing"), action.path());
        let response: BulkActionResponse = http::post_json(&url, &BulkActionRequest { ids }).await?;
        self.invalidate();
        Ok(response)
    }

    pub fn invalidate(&self) {
        self.query.invalidate(BILLING_REGISTER);
    }

    pub fn revision(&self) -> u64 {
        self.query.revision(BILLING_REGISTER)
    }
}

pub fn use_billing_api() -> BillingClient {
    BillingClient::new(use_query_client())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;
    use chrono::NaiveDate;
    use contracts::projections::p900_billing::BillingStatus;

    #[test]
    fn test_csv_export_of_billing_page() {
        let record = BillingRecord {
            id: 9,
            order_id: Some(4),
            order_number: Some("OS-0004".into()),
            company_id: 1,
            company_name: "Fibra Norte; S.L.".into(),
            concept: "Alta enlace".into(),
            amount: 300.0,
            currency: "EUR".into(),
            period: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            status: BillingStatus::Accounted,
            accounted_date: None,
            invoice_number: None,
            invoice_date: None,
        };
        let csv = build_csv(&[record]);
        let mut lines = csv.trim_start_matches('\u{FEFF}').lines();
        assert_eq!(
            lines.next(),
            Some("ID;Orden;Empresa;Concepto;Periodo;Importe;Moneda;Estado;Factura")
        );
        assert_eq!(
            lines.next(),
            Some("9;OS-0004;\"Fibra Norte; S.L.\";Alta enlace;05/2024;300.00;EUR;Contabilizado;")
        );
    }

    #[test]
    fn test_billing_query_string() {
        let filter = BillingFilter::for_tab(contracts::projections::p900_billing::BillingTab::Facturado);
        let query = query_string(&filter).unwrap();
        assert!(query.contains("status=invoiced"));
    }
}
