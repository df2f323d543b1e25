//! VAT split calculation.
//!
//! Splits a gross ("including VAT") amount into its net and VAT parts under
//! one of the two Dutch rates that apply to a performing musician: the
//! reduced 9% rate for live performances and the general 21% rate for other
//! taxable services.

pub mod calculator;
pub mod error;
pub mod types;


pub use calculator::{VatRates, round_cents};
pub use error::VatError;
pub use types::{VatBreakdown, VatRate};
