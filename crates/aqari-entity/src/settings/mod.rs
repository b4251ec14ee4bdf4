//! Key-value application settings entity.

pub mod model;

pub use model::{AppSetting, NotificationDisplaySettings};
