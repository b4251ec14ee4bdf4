//! WhatsApp payment reminders: eligibility, message template, deep links.

pub mod link;
pub mod message;
pub mod service;

pub use link::{get_whatsapp_link, normalize_phone};
pub use message::build_reminder_message;
pub use service::ReminderService;
