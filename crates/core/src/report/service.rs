//! Quarterly summary generation service.

use rust_decimal::Decimal;

use super::types::{GrandTotal, QuarterlySummary, RateTotal};
use crate::entry::GageEntry;
use crate::period::Quarter;
use crate::vat::{VatRate, round_cents};

/// Unrounded running sums for one rate group.
#[derive(Debug, Default, Clone, Copy)]
struct GroupSum {
    including: Decimal,
    excluding: Decimal,
    vat: Decimal,
}

impl GroupSum {
    fn add(&mut self, entry: &GageEntry) {
        self.including += entry.amount.amount_including_vat;
        self.excluding += entry.amount.amount_excluding_vat;
        self.vat += entry.amount.vat_amount;
    }

    /// Rounds the three sums once, after the full sum is taken.
    fn into_total(self, vat_rate: VatRate) -> RateTotal {
        RateTotal {
            amount_including_vat: round_cents(self.including),
            amount_excluding_vat: round_cents(self.excluding),
            vat_amount: round_cents(self.vat),
            vat_rate,
        }
    }
}

/// Service for generating VAT reports.
pub struct ReportService;

impl ReportService {
    /// Generates the quarterly VAT summary for a set of entries.
    ///
    /// Entries are partitioned into two disjoint groups by rate category and
    /// each group's money fields are summed unrounded; every published total
    /// is rounded to two decimals exactly once, at the end. Empty groups
    /// yield zero totals. Callers are expected to pass entries already
    /// filtered to the quarter (see [`crate::period::filter_by_quarter`]).
    #[must_use]
    pub fn quarterly_summary(
        entries: &[GageEntry],
        quarter: Quarter,
        year: i32,
    ) -> QuarterlySummary {
        let mut performance = GroupSum::default();
        let mut standard = GroupSum::default();

        for entry in entries {
            match entry.amount.vat_rate {
                VatRate::Performance => performance.add(entry),
                VatRate::Standard => standard.add(entry),
            }
        }

        let grand_total = GrandTotal {
            amount_excluding_vat: round_cents(performance.excluding + standard.excluding),
            total_vat: round_cents(performance.vat + standard.vat),
            amount_including_vat: round_cents(performance.including + standard.including),
        };

        QuarterlySummary {
            quarter,
            year,
            performance_total: performance.into_total(VatRate::Performance),
            standard_total: standard.into_total(VatRate::Standard),
            grand_total,
        }
    }
}
