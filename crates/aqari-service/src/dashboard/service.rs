//! Aggregated counters for the dashboard landing page.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use aqari_core::result::AppResult;
use aqari_database::repositories::contract::ContractRepository;
use aqari_database::repositories::invoice::InvoiceRepository;
use aqari_database::repositories::maintenance::MaintenanceRepository;
use aqari_database::repositories::notification::NotificationRepository;
use aqari_database::repositories::property::PropertyRepository;
use aqari_database::repositories::tenant::TenantRepository;
use aqari_database::repositories::unit::UnitRepository;
use aqari_entity::contract::ContractStatus;
use aqari_entity::invoice::InvoiceStatus;
use aqari_entity::unit::UnitStatus;

/// One snapshot of portfolio-wide counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Total number of properties.
    pub total_properties: i64,
    /// Total number of units across all properties.
    pub total_units: i64,
    /// Units currently occupied.
    pub occupied_units: i64,
    /// Units currently vacant.
    pub vacant_units: i64,
    /// Total number of tenants.
    pub total_tenants: i64,
    /// Contracts in the active state.
    pub active_contracts: i64,
    /// Invoices awaiting payment.
    pub pending_invoices: i64,
    /// Invoices past their due date.
    pub overdue_invoices: i64,
    /// Sum of pending invoice amounts, KWD.
    pub pending_amount: f64,
    /// Sum of overdue invoice amounts, KWD.
    pub overdue_amount: f64,
    /// Maintenance requests not yet completed or cancelled.
    pub open_maintenance: i64,
    /// Unread notifications.
    pub unread_notifications: i64,
}

/// Collects the dashboard counters from every repository.
#[derive(Debug, Clone)]
pub struct DashboardService {
    property_repo: Arc<PropertyRepository>,
    unit_repo: Arc<UnitRepository>,
    tenant_repo: Arc<TenantRepository>,
    contract_repo: Arc<ContractRepository>,
    invoice_repo: Arc<InvoiceRepository>,
    maintenance_repo: Arc<MaintenanceRepository>,
    notification_repo: Arc<NotificationRepository>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        property_repo: Arc<PropertyRepository>,
        unit_repo: Arc<UnitRepository>,
        tenant_repo: Arc<TenantRepository>,
        contract_repo: Arc<ContractRepository>,
        invoice_repo: Arc<InvoiceRepository>,
        maintenance_repo: Arc<MaintenanceRepository>,
        notification_repo: Arc<NotificationRepository>,
    ) -> Self {
        Self {
            property_repo,
            unit_repo,
            tenant_repo,
            contract_repo,
            invoice_repo,
            maintenance_repo,
            notification_repo,
        }
    }

    /// Gather one snapshot of counters. The counts are separate queries,
    /// so a snapshot taken during writes may be slightly inconsistent;
    /// the dashboard tolerates that.
    pub async fn stats(&self) -> AppResult<DashboardStats> {
        Ok(DashboardStats {
            total_properties: self.property_repo.count_all().await?,
            total_units: self.unit_repo.count_all().await?,
            occupied_units: self
                .unit_repo
                .count_by_status(UnitStatus::Occupied.as_str())
                .await?,
            vacant_units: self
                .unit_repo
                .count_by_status(UnitStatus::Vacant.as_str())
                .await?,
            total_tenants: self.tenant_repo.count_all().await?,
            active_contracts: self
                .contract_repo
                .count_by_status(ContractStatus::Active.as_str())
                .await?,
            pending_invoices: self
                .invoice_repo
                .count_by_status(InvoiceStatus::Pending.as_str())
                .await?,
            overdue_invoices: self
                .invoice_repo
                .count_by_status(InvoiceStatus::Overdue.as_str())
                .await?,
            pending_amount: self
                .invoice_repo
                .sum_amount_by_status(InvoiceStatus::Pending.as_str())
                .await?,
            overdue_amount: self
                .invoice_repo
                .sum_amount_by_status(InvoiceStatus::Overdue.as_str())
                .await?,
            open_maintenance: self.maintenance_repo.count_open().await?,
            unread_notifications: self.notification_repo.count_unread().await?,
        })
    }
}
