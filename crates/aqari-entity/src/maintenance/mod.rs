//! Maintenance request entity.

pub mod model;
pub mod status;

pub use model::MaintenanceRequest;
pub use status::MaintenanceStatus;
