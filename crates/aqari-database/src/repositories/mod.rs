//! Concrete repository implementations, one per table.

pub mod contract;
pub mod invoice;
pub mod maintenance;
pub mod notification;
pub mod property;
pub mod reminder;
pub mod settings;
pub mod tenant;
pub mod unit;
