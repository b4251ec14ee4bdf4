//! Alert rule evaluation — derives the set of new alerts that should
//! exist right now, given current entity state and previously generated
//! alerts.
//!
//! All five rules are pure functions over in-memory rows so they can be
//! tested without a database. Date comparisons run at calendar-date
//! granularity throughout.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use uuid::Uuid;

use aqari_core::dates::{
    EXPIRY_WINDOW_DAYS, MAINTENANCE_LOOKBACK_DAYS, REMINDER_WINDOW_DAYS, sub_days,
    within_upcoming_window,
};
use aqari_entity::contract::{Contract, ContractStatus};
use aqari_entity::invoice::{Invoice, InvoiceStatus};
use aqari_entity::maintenance::{MaintenanceRequest, MaintenanceStatus};
use aqari_entity::notification::{NewNotification, NotificationKind};

/// Placeholder when the tenant join is missing.
const UNKNOWN_TENANT: &str = "Unknown";
/// Placeholder when the property join is missing.
const UNKNOWN_PROPERTY: &str = "Property";

/// Everything one scan pass evaluates, loaded up front.
#[derive(Debug)]
pub struct ScanSources<'a> {
    /// Calendar date of the scan.
    pub today: NaiveDate,
    /// Invoices in any status; rules filter what they need.
    pub invoices: &'a [Invoice],
    /// Contracts in any status; only `active` ones are evaluated.
    pub contracts: &'a [Contract],
    /// Maintenance requests in any status.
    pub maintenance: &'a [MaintenanceRequest],
    /// Tenant id to display name.
    pub tenant_names: &'a HashMap<Uuid, String>,
    /// Property id to display name.
    pub property_names: &'a HashMap<Uuid, String>,
}

impl ScanSources<'_> {
    fn tenant_name(&self, id: Uuid) -> &str {
        self.tenant_names
            .get(&id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_TENANT)
    }

    fn property_name(&self, id: Uuid) -> &str {
        self.property_names
            .get(&id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_PROPERTY)
    }
}

/// Admits each dedup key at most once per scan pass.
///
/// The existing-key snapshot is taken once when the scan starts; keys
/// admitted during the pass are also tracked so no two rules (or two
/// rows) can emit the same key. Not transactional across concurrent
/// scans — the store-level unique index covers that window.
#[derive(Debug)]
pub struct DedupFilter {
    existing: HashSet<String>,
    seen: HashSet<String>,
}

impl DedupFilter {
    /// Build a filter over the persisted key snapshot.
    pub fn new(existing: HashSet<String>) -> Self {
        Self {
            existing,
            seen: HashSet::new(),
        }
    }

    /// True only if `key` is new for this pass.
    pub fn admit(&mut self, key: &str) -> bool {
        if self.existing.contains(key) || self.seen.contains(key) {
            return false;
        }
        self.seen.insert(key.to_string());
        true
    }
}

/// Run all five rules and return the surviving candidates in rule order.
pub fn evaluate(sources: &ScanSources<'_>, filter: &mut DedupFilter) -> Vec<NewNotification> {
    let mut candidates = Vec::new();
    overdue_invoices(sources, filter, &mut candidates);
    upcoming_invoices(sources, filter, &mut candidates);
    expiring_contracts(sources, filter, &mut candidates);
    expired_contracts(sources, filter, &mut candidates);
    completed_maintenance(sources, filter, &mut candidates);
    candidates
}

/// Rule 1: every overdue invoice gets a `payment_overdue` alert.
fn overdue_invoices(
    sources: &ScanSources<'_>,
    filter: &mut DedupFilter,
    out: &mut Vec<NewNotification>,
) {
    for invoice in sources.invoices {
        if invoice.status != InvoiceStatus::Overdue.as_str() {
            continue;
        }
        let key = format!("overdue-{}", invoice.id);
        if !filter.admit(&key) {
            continue;
        }
        out.push(NewNotification {
            kind: NotificationKind::PaymentOverdue,
            title: "Payment Overdue".to_string(),
            message: format!(
                "Invoice {} for {} at {} is overdue. Amount: {:.3} KWD.",
                invoice.invoice_number,
                sources.tenant_name(invoice.tenant_id),
                sources.property_name(invoice.property_id),
                invoice.amount,
            ),
            tenant_id: Some(invoice.tenant_id),
            property_id: Some(invoice.property_id),
            related_id: key,
        });
    }
}

/// Rule 2: pending invoices due within the reminder window get a
/// `payment_reminder` alert.
fn upcoming_invoices(
    sources: &ScanSources<'_>,
    filter: &mut DedupFilter,
    out: &mut Vec<NewNotification>,
) {
    for invoice in sources.invoices {
        if invoice.status != InvoiceStatus::Pending.as_str()
            || !within_upcoming_window(sources.today, invoice.due_date, REMINDER_WINDOW_DAYS)
        {
            continue;
        }
        let key = format!("reminder-{}", invoice.id);
        if !filter.admit(&key) {
            continue;
        }
        out.push(NewNotification {
            kind: NotificationKind::PaymentReminder,
            title: "Payment Due Soon".to_string(),
            message: format!(
                "Invoice {} for {} is due on {}. Amount: {:.3} KWD.",
                invoice.invoice_number,
                sources.tenant_name(invoice.tenant_id),
                invoice.due_date,
                invoice.amount,
            ),
            tenant_id: Some(invoice.tenant_id),
            property_id: Some(invoice.property_id),
            related_id: key,
        });
    }
}

/// Rule 3: active contracts ending within the expiry window get a
/// `lease_expiring` alert. The upper bound is inclusive.
fn expiring_contracts(
    sources: &ScanSources<'_>,
    filter: &mut DedupFilter,
    out: &mut Vec<NewNotification>,
) {
    for contract in sources.contracts {
        if contract.status != ContractStatus::Active.as_str()
            || !within_upcoming_window(sources.today, contract.end_date, EXPIRY_WINDOW_DAYS)
        {
            continue;
        }
        let key = format!("expiring-{}", contract.id);
        if !filter.admit(&key) {
            continue;
        }
        out.push(NewNotification {
            kind: NotificationKind::LeaseExpiring,
            title: "Lease Expiring".to_string(),
            message: format!(
                "Contract {} for {} at {} expires on {}.",
                contract.contract_number,
                sources.tenant_name(contract.tenant_id),
                sources.property_name(contract.property_id),
                contract.end_date,
            ),
            tenant_id: Some(contract.tenant_id),
            property_id: Some(contract.property_id),
            related_id: key,
        });
    }
}

/// Rule 4: active contracts whose end date has passed get a
/// `lease_expired` alert.
fn expired_contracts(
    sources: &ScanSources<'_>,
    filter: &mut DedupFilter,
    out: &mut Vec<NewNotification>,
) {
    for contract in sources.contracts {
        if contract.status != ContractStatus::Active.as_str()
            || contract.end_date >= sources.today
        {
            continue;
        }
        let key = format!("expired-{}", contract.id);
        if !filter.admit(&key) {
            continue;
        }
        out.push(NewNotification {
            kind: NotificationKind::LeaseExpired,
            title: "Lease Expired".to_string(),
            message: format!(
                "Contract {} for {} at {} expired on {}.",
                contract.contract_number,
                sources.tenant_name(contract.tenant_id),
                sources.property_name(contract.property_id),
                contract.end_date,
            ),
            tenant_id: Some(contract.tenant_id),
            property_id: Some(contract.property_id),
            related_id: key,
        });
    }
}

/// Rule 5: maintenance requests completed within the lookback window
/// get a `maintenance_update` alert.
fn completed_maintenance(
    sources: &ScanSources<'_>,
    filter: &mut DedupFilter,
    out: &mut Vec<NewNotification>,
) {
    let cutoff = sub_days(sources.today, MAINTENANCE_LOOKBACK_DAYS);
    for request in sources.maintenance {
        if request.status != MaintenanceStatus::Completed.as_str()
            || request.updated_at.date_naive() < cutoff
        {
            continue;
        }
        let key = format!("maint-{}", request.id);
        if !filter.admit(&key) {
            continue;
        }
        out.push(NewNotification {
            kind: NotificationKind::MaintenanceUpdate,
            title: "Maintenance Completed".to_string(),
            message: format!(
                "\"{}\" at {} has been completed.",
                request.title,
                sources.property_name(request.property_id),
            ),
            tenant_id: request.tenant_id,
            property_id: Some(request.property_id),
            related_id: key,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn invoice(status: &str, due: NaiveDate) -> Invoice {
        Invoice {
            id: Uuid::new_v4(),
            invoice_number: "INV-2024-0001".to_string(),
            tenant_id: Uuid::new_v4(),
            property_id: Uuid::new_v4(),
            amount: 250.0,
            status: status.to_string(),
            issue_date: d(2024, 1, 1),
            due_date: due,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn contract(status: &str, end: NaiveDate) -> Contract {
        Contract {
            id: Uuid::new_v4(),
            contract_number: "CON-2024-0001".to_string(),
            tenant_id: Uuid::new_v4(),
            property_id: Uuid::new_v4(),
            unit_id: None,
            start_date: d(2023, 1, 1),
            end_date: end,
            rent_amount: 400.0,
            status: status.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn completed_request(updated: NaiveDate) -> MaintenanceRequest {
        MaintenanceRequest {
            id: Uuid::new_v4(),
            title: "AC repair".to_string(),
            description: None,
            property_id: Uuid::new_v4(),
            unit_id: None,
            tenant_id: None,
            priority: "medium".to_string(),
            status: "completed".to_string(),
            assigned_to: None,
            created_at: Utc::now(),
            updated_at: Utc
                .from_utc_datetime(&updated.and_hms_opt(12, 0, 0).unwrap()),
        }
    }

    fn run(
        today: NaiveDate,
        invoices: &[Invoice],
        contracts: &[Contract],
        maintenance: &[MaintenanceRequest],
        existing: HashSet<String>,
    ) -> Vec<NewNotification> {
        let tenant_names = HashMap::new();
        let property_names = HashMap::new();
        let sources = ScanSources {
            today,
            invoices,
            contracts,
            maintenance,
            tenant_names: &tenant_names,
            property_names: &property_names,
        };
        let mut filter = DedupFilter::new(existing);
        evaluate(&sources, &mut filter)
    }

    #[test]
    fn test_overdue_invoice_generates_one_alert() {
        let today = d(2024, 3, 10);
        let inv = invoice("overdue", d(2024, 2, 1));
        let out = run(today, std::slice::from_ref(&inv), &[], &[], HashSet::new());

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, NotificationKind::PaymentOverdue);
        assert_eq!(out[0].related_id, format!("overdue-{}", inv.id));
        assert_eq!(out[0].tenant_id, Some(inv.tenant_id));
    }

    #[test]
    fn test_rescan_with_existing_key_is_idempotent() {
        let today = d(2024, 3, 10);
        let inv = invoice("overdue", d(2024, 2, 1));
        let first = run(today, std::slice::from_ref(&inv), &[], &[], HashSet::new());
        assert_eq!(first.len(), 1);

        let existing: HashSet<String> =
            first.iter().map(|n| n.related_id.clone()).collect();
        let second = run(today, std::slice::from_ref(&inv), &[], &[], existing);
        assert!(second.is_empty());
    }

    #[test]
    fn test_paid_invoice_generates_nothing() {
        let today = d(2024, 3, 10);
        let inv = invoice("paid", d(2024, 3, 11));
        let out = run(today, std::slice::from_ref(&inv), &[], &[], HashSet::new());
        assert!(out.is_empty());
    }

    #[test]
    fn test_reminder_window_is_inclusive() {
        let today = d(2024, 3, 1);
        let on_edge = invoice("pending", d(2024, 3, 4));
        let past_edge = invoice("pending", d(2024, 3, 5));
        let out = run(
            today,
            &[on_edge.clone(), past_edge],
            &[],
            &[],
            HashSet::new(),
        );

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].related_id, format!("reminder-{}", on_edge.id));
    }

    #[test]
    fn test_expired_contract_never_classified_expiring() {
        let today = d(2024, 3, 10);
        let past = contract("active", d(2024, 3, 9));
        let out = run(today, &[], std::slice::from_ref(&past), &[], HashSet::new());

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, NotificationKind::LeaseExpired);
        assert_eq!(out[0].related_id, format!("expired-{}", past.id));
    }

    #[test]
    fn test_contract_ending_exactly_in_thirty_days_is_expiring() {
        let today = d(2024, 3, 1);
        let edge = contract("active", d(2024, 3, 31));
        let out = run(today, &[], std::slice::from_ref(&edge), &[], HashSet::new());

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, NotificationKind::LeaseExpiring);
    }

    #[test]
    fn test_contract_ending_today_is_expiring_not_expired() {
        let today = d(2024, 3, 1);
        let ending = contract("active", today);
        let out = run(today, &[], std::slice::from_ref(&ending), &[], HashSet::new());

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, NotificationKind::LeaseExpiring);
    }

    #[test]
    fn test_terminated_contract_is_skipped() {
        let today = d(2024, 3, 10);
        let gone = contract("terminated", d(2024, 1, 1));
        let out = run(today, &[], &[gone], &[], HashSet::new());
        assert!(out.is_empty());
    }

    #[test]
    fn test_maintenance_lookback_window() {
        let today = d(2024, 3, 10);
        let recent = completed_request(d(2024, 3, 3));
        let stale = completed_request(d(2024, 3, 2));
        let out = run(
            today,
            &[],
            &[],
            &[recent.clone(), stale],
            HashSet::new(),
        );

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].related_id, format!("maint-{}", recent.id));
        assert_eq!(out[0].kind, NotificationKind::MaintenanceUpdate);
    }

    #[test]
    fn test_missing_joins_fall_back_to_placeholders() {
        let today = d(2024, 3, 10);
        let inv = invoice("overdue", d(2024, 2, 1));
        let out = run(today, std::slice::from_ref(&inv), &[], &[], HashSet::new());

        assert!(out[0].message.contains("Unknown"));
        assert!(out[0].message.contains("Property"));
    }

    #[test]
    fn test_dedup_is_global_within_pass() {
        let mut filter = DedupFilter::new(HashSet::new());
        assert!(filter.admit("overdue-x"));
        assert!(!filter.admit("overdue-x"));
        assert!(filter.admit("reminder-x"));
    }
}
