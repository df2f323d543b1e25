//! VAT calculation error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// VAT calculation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VatError {
    /// Gross amount must be strictly positive.
    #[error("amount including VAT must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),
}
