//! Property entity.

pub mod model;

pub use model::Property;
