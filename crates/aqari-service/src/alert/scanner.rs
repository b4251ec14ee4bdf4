//! The alert scan service — orchestrates one evaluation pass.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use aqari_core::result::AppResult;
use aqari_database::repositories::contract::ContractRepository;
use aqari_database::repositories::invoice::InvoiceRepository;
use aqari_database::repositories::maintenance::MaintenanceRepository;
use aqari_database::repositories::notification::NotificationRepository;
use aqari_database::repositories::property::PropertyRepository;
use aqari_database::repositories::tenant::TenantRepository;
use aqari_entity::contract::ContractStatus;
use aqari_entity::invoice::InvoiceStatus;
use aqari_entity::maintenance::MaintenanceStatus;

use super::rules::{self, DedupFilter, ScanSources};

/// Runs user-triggered alert scans.
///
/// A scan is a sequential reads-then-write pass: every source table and
/// the dedup-key snapshot are loaded first, candidates are evaluated in
/// memory, and survivors go to the store in one batch insert. Any read
/// failure aborts before anything is written; a re-run regenerates and
/// re-dedups whatever the failed pass would have produced.
#[derive(Debug, Clone)]
pub struct AlertScanService {
    invoice_repo: Arc<InvoiceRepository>,
    contract_repo: Arc<ContractRepository>,
    maintenance_repo: Arc<MaintenanceRepository>,
    tenant_repo: Arc<TenantRepository>,
    property_repo: Arc<PropertyRepository>,
    notification_repo: Arc<NotificationRepository>,
}

impl AlertScanService {
    /// Creates a new scan service.
    pub fn new(
        invoice_repo: Arc<InvoiceRepository>,
        contract_repo: Arc<ContractRepository>,
        maintenance_repo: Arc<MaintenanceRepository>,
        tenant_repo: Arc<TenantRepository>,
        property_repo: Arc<PropertyRepository>,
        notification_repo: Arc<NotificationRepository>,
    ) -> Self {
        Self {
            invoice_repo,
            contract_repo,
            maintenance_repo,
            tenant_repo,
            property_repo,
            notification_repo,
        }
    }

    /// Run one scan pass and return the number of alerts inserted.
    pub async fn run_scan(&self) -> AppResult<u64> {
        let today = Utc::now().date_naive();

        let mut invoices = self
            .invoice_repo
            .list_by_status(InvoiceStatus::Overdue.as_str())
            .await?;
        invoices.extend(
            self.invoice_repo
                .list_by_status(InvoiceStatus::Pending.as_str())
                .await?,
        );
        let contracts = self
            .contract_repo
            .list_by_status(ContractStatus::Active.as_str())
            .await?;
        let maintenance = self
            .maintenance_repo
            .list_by_status(MaintenanceStatus::Completed.as_str())
            .await?;
        let tenants = self.tenant_repo.list_all().await?;
        let properties = self.property_repo.list_all().await?;
        let existing = self.notification_repo.existing_related_ids().await?;

        let tenant_names: HashMap<Uuid, String> = tenants
            .iter()
            .map(|t| (t.id, t.full_name()))
            .collect();
        let property_names: HashMap<Uuid, String> = properties
            .iter()
            .map(|p| (p.id, p.name.clone()))
            .collect();

        let sources = ScanSources {
            today,
            invoices: &invoices,
            contracts: &contracts,
            maintenance: &maintenance,
            tenant_names: &tenant_names,
            property_names: &property_names,
        };
        let mut filter = DedupFilter::new(existing);
        let candidates = rules::evaluate(&sources, &mut filter);

        let inserted = self.notification_repo.insert_batch(&candidates).await?;
        info!(
            candidates = candidates.len(),
            inserted, "Alert scan complete"
        );
        Ok(inserted)
    }
}
