//! Quarterly VAT summary aggregation.
//!
//! This module provides pure business logic for the quarterly BTW report:
//! entries are partitioned by rate category and each group's money fields
//! are summed independently.

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::{GrandTotal, QuarterlySummary, RateTotal};
