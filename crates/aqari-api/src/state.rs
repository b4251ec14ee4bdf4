//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use aqari_core::config::AppConfig;

use aqari_database::repositories::contract::ContractRepository;
use aqari_database::repositories::invoice::InvoiceRepository;
use aqari_database::repositories::maintenance::MaintenanceRepository;
use aqari_database::repositories::notification::NotificationRepository;
use aqari_database::repositories::property::PropertyRepository;
use aqari_database::repositories::reminder::WhatsAppReminderRepository;
use aqari_database::repositories::settings::SettingsRepository;
use aqari_database::repositories::tenant::TenantRepository;
use aqari_database::repositories::unit::UnitRepository;

use aqari_service::alert::AlertScanService;
use aqari_service::dashboard::DashboardService;
use aqari_service::reminder::ReminderService;
use aqari_service::settings::SettingsService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    /// Property repository
    pub property_repo: Arc<PropertyRepository>,
    /// Unit repository
    pub unit_repo: Arc<UnitRepository>,
    /// Tenant repository
    pub tenant_repo: Arc<TenantRepository>,
    /// Contract repository
    pub contract_repo: Arc<ContractRepository>,
    /// Invoice repository
    pub invoice_repo: Arc<InvoiceRepository>,
    /// Maintenance repository
    pub maintenance_repo: Arc<MaintenanceRepository>,
    /// Notification repository
    pub notification_repo: Arc<NotificationRepository>,
    /// WhatsApp reminder log repository
    pub reminder_repo: Arc<WhatsAppReminderRepository>,
    /// Settings repository
    pub settings_repo: Arc<SettingsRepository>,

    /// Alert scan service
    pub scan_service: Arc<AlertScanService>,
    /// WhatsApp reminder service
    pub reminder_service: Arc<ReminderService>,
    /// Settings service
    pub settings_service: Arc<SettingsService>,
    /// Dashboard statistics service
    pub dashboard_service: Arc<DashboardService>,
}

impl AppState {
    /// Construct the full dependency graph over one connection pool.
    pub fn new(config: Arc<AppConfig>, db_pool: PgPool) -> Self {
        let property_repo = Arc::new(PropertyRepository::new(db_pool.clone()));
        let unit_repo = Arc::new(UnitRepository::new(db_pool.clone()));
        let tenant_repo = Arc::new(TenantRepository::new(db_pool.clone()));
        let contract_repo = Arc::new(ContractRepository::new(db_pool.clone()));
        let invoice_repo = Arc::new(InvoiceRepository::new(db_pool.clone()));
        let maintenance_repo = Arc::new(MaintenanceRepository::new(db_pool.clone()));
        let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));
        let reminder_repo = Arc::new(WhatsAppReminderRepository::new(db_pool.clone()));
        let settings_repo = Arc::new(SettingsRepository::new(db_pool.clone()));

        let scan_service = Arc::new(AlertScanService::new(
            Arc::clone(&invoice_repo),
            Arc::clone(&contract_repo),
            Arc::clone(&maintenance_repo),
            Arc::clone(&tenant_repo),
            Arc::clone(&property_repo),
            Arc::clone(&notification_repo),
        ));
        let reminder_service = Arc::new(ReminderService::new(
            Arc::clone(&invoice_repo),
            Arc::clone(&tenant_repo),
            Arc::clone(&reminder_repo),
        ));
        let settings_service = Arc::new(SettingsService::new(Arc::clone(&settings_repo)));
        let dashboard_service = Arc::new(DashboardService::new(
            Arc::clone(&property_repo),
            Arc::clone(&unit_repo),
            Arc::clone(&tenant_repo),
            Arc::clone(&contract_repo),
            Arc::clone(&invoice_repo),
            Arc::clone(&maintenance_repo),
            Arc::clone(&notification_repo),
        ));

        Self {
            config,
            db_pool,
            property_repo,
            unit_repo,
            tenant_repo,
            contract_repo,
            invoice_repo,
            maintenance_repo,
            notification_repo,
            reminder_repo,
            settings_repo,
            scan_service,
            reminder_service,
            settings_service,
            dashboard_service,
        }
    }
}
