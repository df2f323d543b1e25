//! Core business logic for Gageboek.
//!
//! This crate contains pure business logic with ZERO web or storage
//! dependencies. All domain types, validation rules, and calculations live
//! here.
//!
//! # Modules
//!
//! - `vat` - VAT split calculation under the Dutch reduced/standard rates
//! - `entry` - Gage (income) entry types
//! - `period` - Calendar quarters and period filtering
//! - `report` - Quarterly VAT summary aggregation

pub mod entry;
pub mod period;
pub mod report;
pub mod vat;
