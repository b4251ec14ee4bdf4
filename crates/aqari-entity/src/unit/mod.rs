//! Rental unit entity.

pub mod model;
pub mod status;

pub use model::Unit;
pub use status::UnitStatus;
