//! WhatsApp reminder log entity.

pub mod model;
pub mod status;

pub use model::WhatsAppReminder;
pub use status::ReminderStatus;
