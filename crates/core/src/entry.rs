//! Gage (income) entry types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vat::{VatBreakdown, VatRate};
use gageboek_shared::types::{EntryId, UserId};

/// Entry validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    /// Description must carry actual text.
    #[error("description must not be empty")]
    EmptyDescription,
}

/// Fixed set of income categories for a performing musician.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryCategory {
    /// Instrument sales or rental income.
    Instruments,
    /// Studio work.
    Studio,
    /// Travel reimbursements.
    Travel,
    /// Sheet music sales or arranging.
    #[serde(rename = "Sheet Music")]
    SheetMusic,
    /// Concert attire reimbursements.
    #[serde(rename = "Concert Attire")]
    ConcertAttire,
    /// Live performance fees (gage).
    Performance,
}

impl std::fmt::Display for EntryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Instruments => write!(f, "Instruments"),
            Self::Studio => write!(f, "Studio"),
            Self::Travel => write!(f, "Travel"),
            Self::SheetMusic => write!(f, "Sheet Music"),
            Self::ConcertAttire => write!(f, "Concert Attire"),
            Self::Performance => write!(f, "Performance"),
        }
    }
}

/// A persisted income entry. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GageEntry {
    /// Unique identifier, assigned on save.
    pub id: EntryId,
    /// Owner; entries are never visible across users.
    pub user_id: UserId,
    /// Calendar date of the income, no timezone attached.
    pub date: NaiveDate,
    /// Free-text description.
    pub description: String,
    /// Income category.
    pub category: EntryCategory,
    /// The gross amount and its VAT split.
    pub amount: VatBreakdown,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp; equals `created_at` (entries are immutable).
    pub updated_at: DateTime<Utc>,
}

/// Request shape for a new entry, before the VAT split is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGageEntry {
    /// Calendar date of the income.
    pub date: NaiveDate,
    /// Free-text description; must be non-empty.
    pub description: String,
    /// Income category.
    pub category: EntryCategory,
    /// Gross amount, VAT included; must be positive.
    #[serde(rename = "amountIncludingVAT")]
    pub amount_including_vat: Decimal,
    /// Rate category to split under.
    #[serde(rename = "vatRate")]
    pub vat_rate: VatRate,
}

impl NewGageEntry {
    /// Validates the request fields the VAT calculator does not cover.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::EmptyDescription`] when the description is
    /// empty or whitespace only.
    pub fn validate(&self) -> Result<(), EntryError> {
        if self.description.trim().is_empty() {
            return Err(EntryError::EmptyDescription);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn new_entry(description: &str) -> NewGageEntry {
        NewGageEntry {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
            description: description.to_string(),
            category: EntryCategory::Performance,
            amount_including_vat: dec!(100),
            vat_rate: VatRate::Performance,
        }
    }

    #[test]
    fn test_validate_accepts_description() {
        assert!(new_entry("Jazz trio, Bimhuis").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_description() {
        assert_eq!(
            new_entry("").validate(),
            Err(EntryError::EmptyDescription)
        );
        assert_eq!(
            new_entry("   ").validate(),
            Err(EntryError::EmptyDescription)
        );
    }

    #[test]
    fn test_category_wire_names() {
        let json = serde_json::to_string(&EntryCategory::SheetMusic).expect("serializes");
        assert_eq!(json, "\"Sheet Music\"");
        let json = serde_json::to_string(&EntryCategory::ConcertAttire).expect("serializes");
        assert_eq!(json, "\"Concert Attire\"");
        let json = serde_json::to_string(&EntryCategory::Performance).expect("serializes");
        assert_eq!(json, "\"Performance\"");
    }

    #[test]
    fn test_new_entry_wire_names() {
        let value = serde_json::to_value(new_entry("gig")).expect("serializes");
        assert!(value.get("amountIncludingVAT").is_some());
        assert_eq!(value["vatRate"], "performance");
        assert_eq!(value["date"], "2024-01-15");
    }
}
