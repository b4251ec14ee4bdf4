//! Shared wire-level types.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
