//! Notification kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The business condition a notification surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// An invoice is past due and unpaid.
    PaymentOverdue,
    /// An invoice falls due within the reminder window.
    PaymentReminder,
    /// A maintenance request changed state.
    MaintenanceUpdate,
    /// An active lease ends within the expiry window.
    LeaseExpiring,
    /// An active lease has passed its end date.
    LeaseExpired,
    /// Operator or system message.
    System,
}

impl NotificationKind {
    /// Return the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PaymentOverdue => "payment_overdue",
            Self::PaymentReminder => "payment_reminder",
            Self::MaintenanceUpdate => "maintenance_update",
            Self::LeaseExpiring => "lease_expiring",
            Self::LeaseExpired => "lease_expired",
            Self::System => "system",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "payment_overdue" => Ok(Self::PaymentOverdue),
            "payment_reminder" => Ok(Self::PaymentReminder),
            "maintenance_update" => Ok(Self::MaintenanceUpdate),
            "lease_expiring" => Ok(Self::LeaseExpiring),
            "lease_expired" => Ok(Self::LeaseExpired),
            "system" => Ok(Self::System),
            other => Err(format!("unknown notification kind: {other}")),
        }
    }
}
