//! VAT data types.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All monetary fields wrap `rust_decimal::Decimal` for exact precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two VAT rate categories known to the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VatRate {
    /// Reduced 9% rate for live performance income.
    Performance,
    /// General 21% rate for other taxable services.
    Standard,
}

impl std::fmt::Display for VatRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Performance => write!(f, "performance"),
            Self::Standard => write!(f, "standard"),
        }
    }
}

impl std::str::FromStr for VatRate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "performance" => Ok(Self::Performance),
            "standard" => Ok(Self::Standard),
            _ => Err(format!(
                "unknown VAT rate: {s}, must be 'performance' or 'standard'"
            )),
        }
    }
}

/// A gross amount split into its net and VAT parts.
///
/// `amount_excluding_vat` and `vat_amount` are rounded to exactly two
/// decimals; `amount_including_vat` is the gross amount as supplied by the
/// caller. Field names on the wire follow the public API contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatBreakdown {
    /// Gross amount, VAT included.
    #[serde(rename = "amountIncludingVAT")]
    pub amount_including_vat: Decimal,
    /// Net amount, VAT excluded.
    #[serde(rename = "amountExcludingVAT")]
    pub amount_excluding_vat: Decimal,
    /// The VAT part of the gross amount.
    #[serde(rename = "vatAmount")]
    pub vat_amount: Decimal,
    /// Rate category the split was computed under.
    #[serde(rename = "vatRate")]
    pub vat_rate: VatRate,
}
