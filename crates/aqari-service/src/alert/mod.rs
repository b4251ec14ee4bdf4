//! Alert generation: rule evaluation, deduplication, and the scan service.

pub mod rules;
pub mod scanner;

pub use rules::{DedupFilter, ScanSources};
pub use scanner::AlertScanService;
