//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::Quarter;
use crate::vat::VatRate;

/// Summed money fields for one rate category within a quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTotal {
    /// Sum of gross amounts.
    #[serde(rename = "amountIncludingVAT")]
    pub amount_including_vat: Decimal,
    /// Sum of net amounts.
    #[serde(rename = "amountExcludingVAT")]
    pub amount_excluding_vat: Decimal,
    /// Sum of VAT amounts.
    #[serde(rename = "vatAmount")]
    pub vat_amount: Decimal,
    /// The rate category this total covers.
    #[serde(rename = "vatRate")]
    pub vat_rate: VatRate,
}

impl RateTotal {
    /// An all-zero total for the given rate (the empty-group case).
    #[must_use]
    pub const fn zero(vat_rate: VatRate) -> Self {
        Self {
            amount_including_vat: Decimal::ZERO,
            amount_excluding_vat: Decimal::ZERO,
            vat_amount: Decimal::ZERO,
            vat_rate,
        }
    }
}

/// Combined totals across both rate categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrandTotal {
    /// Total net amount.
    #[serde(rename = "amountExcludingVAT")]
    pub amount_excluding_vat: Decimal,
    /// Total VAT owed.
    #[serde(rename = "totalVAT")]
    pub total_vat: Decimal,
    /// Total gross amount.
    #[serde(rename = "amountIncludingVAT")]
    pub amount_including_vat: Decimal,
}

/// Quarterly VAT summary, grouped by rate. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterlySummary {
    /// Reporting quarter.
    pub quarter: Quarter,
    /// Reporting year.
    pub year: i32,
    /// Totals for the reduced performance rate.
    pub performance_total: RateTotal,
    /// Totals for the general standard rate.
    pub standard_total: RateTotal,
    /// Combined totals across both groups.
    pub grand_total: GrandTotal,
}
