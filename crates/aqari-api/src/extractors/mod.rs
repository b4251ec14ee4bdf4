//! Shared extractors for handlers.

pub mod pagination;

pub use pagination::PaginationParams;
