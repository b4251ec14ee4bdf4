//! # aqari-entity
//!
//! Domain entity models for Aqari. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod contract;
pub mod invoice;
pub mod maintenance;
pub mod notification;
pub mod property;
pub mod reminder;
pub mod settings;
pub mod tenant;
pub mod unit;
