//! Persisted application settings.

pub mod service;

pub use service::SettingsService;
