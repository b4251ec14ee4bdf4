//! Rent invoice entity.

pub mod item;
pub mod model;
pub mod status;

pub use item::InvoiceItem;
pub use model::Invoice;
pub use status::InvoiceStatus;
