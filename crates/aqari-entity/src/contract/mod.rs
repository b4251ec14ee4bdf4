//! Lease contract entity.

pub mod model;
pub mod status;

pub use model::Contract;
pub use status::ContractStatus;
