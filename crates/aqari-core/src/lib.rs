//! # aqari-core
//!
//! Core crate for the Aqari property-management backend. Contains
//! configuration schemas, pagination types, date-window utilities,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Aqari crates.

pub mod config;
pub mod dates;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
