//! VAT split calculator.
//!
//! CRITICAL: Rounding strategy for monetary splits:
//! - Divide first, round after; never round intermediate values
//! - Round half away from zero to 2 decimal places

use rust_decimal::{Decimal, RoundingStrategy};

use super::error::VatError;
use super::types::{VatBreakdown, VatRate};

/// Rounds a monetary amount to whole cents, halves away from zero.
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// The VAT rate table, injected as an immutable configuration value.
///
/// Rates are fixed for the lifetime of the process; a value (rather than a
/// mutable global) keeps the calculator testable against hypothetical future
/// rate changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VatRates {
    /// Fraction applied to performance income (0.09 for 9%).
    pub performance: Decimal,
    /// Fraction applied to other services (0.21 for 21%).
    pub standard: Decimal,
}

impl VatRates {
    /// The Dutch rate table for a performing musician: 9% / 21%.
    #[must_use]
    pub const fn dutch() -> Self {
        Self {
            performance: Decimal::from_parts(9, 0, 0, false, 2),
            standard: Decimal::from_parts(21, 0, 0, false, 2),
        }
    }

    /// Returns the fraction for the given rate category.
    #[must_use]
    pub const fn fraction(&self, rate: VatRate) -> Decimal {
        match rate {
            VatRate::Performance => self.performance,
            VatRate::Standard => self.standard,
        }
    }

    /// Splits a gross amount into net and VAT parts.
    ///
    /// `amount_excluding_vat = amount / (1 + rate)` and `vat_amount =
    /// amount - amount_excluding_vat`, both computed on the unrounded
    /// quotient and then rounded to two decimals. The gross amount is passed
    /// through unrounded as given.
    ///
    /// # Errors
    ///
    /// Returns [`VatError::NonPositiveAmount`] when the gross amount is zero
    /// or negative.
    pub fn split(&self, amount_including_vat: Decimal, rate: VatRate) -> Result<VatBreakdown, VatError> {
        if amount_including_vat <= Decimal::ZERO {
            return Err(VatError::NonPositiveAmount(amount_including_vat));
        }

        let amount_excluding_vat = amount_including_vat / (Decimal::ONE + self.fraction(rate));
        let vat_amount = amount_including_vat - amount_excluding_vat;

        Ok(VatBreakdown {
            amount_including_vat,
            amount_excluding_vat: round_cents(amount_excluding_vat),
            vat_amount: round_cents(vat_amount),
            vat_rate: rate,
        })
    }
}

impl Default for VatRates {
    fn default() -> Self {
        Self::dutch()
    }
}
