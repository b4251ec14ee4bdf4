//! # aqari-service
//!
//! Business logic for Aqari. The alert scan (rule evaluation plus
//! deduplication), WhatsApp reminder eligibility and link building,
//! settings persistence, and dashboard aggregation live here, on top of
//! the repositories from `aqari-database`.

pub mod alert;
pub mod dashboard;
pub mod reminder;
pub mod settings;
