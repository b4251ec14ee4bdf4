//! Reminder eligibility and the sent-log writes.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use aqari_core::AppError;
use aqari_core::dates::{WHATSAPP_DEFAULT_WINDOW_DAYS, add_days};
use aqari_core::result::AppResult;
use aqari_database::repositories::invoice::InvoiceRepository;
use aqari_database::repositories::reminder::WhatsAppReminderRepository;
use aqari_database::repositories::tenant::TenantRepository;
use aqari_entity::invoice::Invoice;
use aqari_entity::reminder::{ReminderStatus, WhatsAppReminder};
use aqari_entity::tenant::Tenant;

use super::link::get_whatsapp_link;
use super::message::build_reminder_message;

/// An invoice eligible for a WhatsApp reminder, with its tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingReminder {
    /// The due invoice.
    pub invoice: Invoice,
    /// The tenant to remind.
    pub tenant: Tenant,
}

/// A prepared reminder: message body plus the deep link to open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderPreview {
    /// The invoice the reminder is for.
    pub invoice_id: Uuid,
    /// The tenant's phone number as stored.
    pub phone: String,
    /// The full message body.
    pub message: String,
    /// The `wa.me` deep link.
    pub link: String,
}

/// Finds reminder-eligible invoices and records sent reminders.
#[derive(Debug, Clone)]
pub struct ReminderService {
    invoice_repo: Arc<InvoiceRepository>,
    tenant_repo: Arc<TenantRepository>,
    reminder_repo: Arc<WhatsAppReminderRepository>,
}

impl ReminderService {
    /// Creates a new reminder service.
    pub fn new(
        invoice_repo: Arc<InvoiceRepository>,
        tenant_repo: Arc<TenantRepository>,
        reminder_repo: Arc<WhatsAppReminderRepository>,
    ) -> Self {
        Self {
            invoice_repo,
            tenant_repo,
            reminder_repo,
        }
    }

    /// List pending invoices due within `days_ahead` days (default 5)
    /// that have not yet been reminded and whose tenant has a phone.
    pub async fn find_upcoming_due(
        &self,
        days_ahead: Option<u64>,
    ) -> AppResult<Vec<UpcomingReminder>> {
        let today = Utc::now().date_naive();
        let to = add_days(today, days_ahead.unwrap_or(WHATSAPP_DEFAULT_WINDOW_DAYS));

        let invoices = self.invoice_repo.find_pending_due_between(today, to).await?;
        let reminded = self.reminder_repo.reminded_invoice_ids().await?;

        let mut tenant_ids: Vec<Uuid> = invoices.iter().map(|i| i.tenant_id).collect();
        tenant_ids.sort_unstable();
        tenant_ids.dedup();
        let tenants: HashMap<Uuid, Tenant> = self
            .tenant_repo
            .find_by_ids(&tenant_ids)
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();

        Ok(filter_eligible(invoices, &tenants, &reminded))
    }

    /// Build the message and deep link for one eligible invoice.
    pub async fn preview(&self, invoice_id: Uuid) -> AppResult<ReminderPreview> {
        let (invoice, tenant) = self.load_pair(invoice_id).await?;
        let message = build_reminder_message(
            &tenant.full_name(),
            &invoice.invoice_number,
            invoice.amount,
            invoice.due_date,
        );
        let link = get_whatsapp_link(&tenant.phone, &message);
        Ok(ReminderPreview {
            invoice_id: invoice.id,
            phone: tenant.phone,
            message,
            link,
        })
    }

    /// Record that the operator opened the reminder link.
    ///
    /// Writes one log row with `status = sent` and `sent_at = now`; the
    /// invoice becomes ineligible for further reminders. Delivery is
    /// never verified.
    pub async fn log_sent(&self, invoice_id: Uuid) -> AppResult<WhatsAppReminder> {
        let (invoice, tenant) = self.load_pair(invoice_id).await?;
        let message = build_reminder_message(
            &tenant.full_name(),
            &invoice.invoice_number,
            invoice.amount,
            invoice.due_date,
        );
        let log = self
            .reminder_repo
            .create(
                invoice.id,
                tenant.id,
                &tenant.phone,
                &message,
                ReminderStatus::Sent.as_str(),
                Some(Utc::now()),
            )
            .await?;
        info!(invoice = %invoice.invoice_number, "WhatsApp reminder logged as sent");
        Ok(log)
    }

    /// Delete a reminder log row, making its invoice eligible again.
    pub async fn delete_log(&self, id: Uuid) -> AppResult<()> {
        let deleted = self.reminder_repo.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::not_found("Reminder log not found"));
        }
        Ok(())
    }

    async fn load_pair(&self, invoice_id: Uuid) -> AppResult<(Invoice, Tenant)> {
        let invoice = self
            .invoice_repo
            .find_by_id(invoice_id)
            .await?
            .ok_or_else(|| AppError::not_found("Invoice not found"))?;
        let tenant = self
            .tenant_repo
            .find_by_id(invoice.tenant_id)
            .await?
            .ok_or_else(|| AppError::not_found("Tenant not found for invoice"))?;
        if !tenant.has_phone() {
            return Err(AppError::validation("Tenant has no phone number on file"));
        }
        Ok((invoice, tenant))
    }
}

/// Keep invoices that are not yet reminded and whose tenant exists with
/// a non-empty phone, preserving source order.
fn filter_eligible(
    invoices: Vec<Invoice>,
    tenants: &HashMap<Uuid, Tenant>,
    reminded: &HashSet<Uuid>,
) -> Vec<UpcomingReminder> {
    invoices
        .into_iter()
        .filter(|invoice| !reminded.contains(&invoice.id))
        .filter_map(|invoice| {
            let tenant = tenants.get(&invoice.tenant_id)?;
            if !tenant.has_phone() {
                return None;
            }
            Some(UpcomingReminder {
                invoice,
                tenant: tenant.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tenant(phone: &str) -> Tenant {
        Tenant {
            id: Uuid::new_v4(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone: phone.to_string(),
            email: None,
            civil_id: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn pending_invoice(tenant_id: Uuid) -> Invoice {
        Invoice {
            id: Uuid::new_v4(),
            invoice_number: "INV-2024-0001".to_string(),
            tenant_id,
            property_id: Uuid::new_v4(),
            amount: 125.5,
            status: "pending".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_already_reminded_invoice_excluded() {
        let t = tenant("51234567");
        let inv = pending_invoice(t.id);
        let tenants = HashMap::from([(t.id, t)]);
        let reminded = HashSet::from([inv.id]);

        let out = filter_eligible(vec![inv], &tenants, &reminded);
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_phone_excluded() {
        let t = tenant("  ");
        let inv = pending_invoice(t.id);
        let tenants = HashMap::from([(t.id, t)]);

        let out = filter_eligible(vec![inv], &tenants, &HashSet::new());
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_tenant_excluded() {
        let inv = pending_invoice(Uuid::new_v4());
        let out = filter_eligible(vec![inv], &HashMap::new(), &HashSet::new());
        assert!(out.is_empty());
    }

    #[test]
    fn test_eligible_pair_survives_in_order() {
        let t = tenant("51234567");
        let first = pending_invoice(t.id);
        let second = pending_invoice(t.id);
        let tenants = HashMap::from([(t.id, t)]);

        let out = filter_eligible(
            vec![first.clone(), second.clone()],
            &tenants,
            &HashSet::new(),
        );
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].invoice.id, first.id);
        assert_eq!(out[1].invoice.id, second.id);
    }
}
