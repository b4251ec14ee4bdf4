//! HTTP handlers, one module per resource.

pub mod contract;
pub mod dashboard;
pub mod health;
pub mod invoice;
pub mod maintenance;
pub mod notification;
pub mod property;
pub mod reminder;
pub mod settings;
pub mod tenant;
pub mod unit;
