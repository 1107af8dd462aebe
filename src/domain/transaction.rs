use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Cents;

/// Store-assigned surrogate key. Unique and never reused.
pub type TransactionId = i64;

/// Category used when the caller leaves it blank.
pub const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl Kind {
    /// Canonical capitalized form, as persisted.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Income => "Income",
            Kind::Expense => "Expense",
        }
    }

    /// Case-insensitive match against the two canonical names.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Kind::Income),
            "expense" => Some(Kind::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single persisted ledger entry. Immutable once created; only deletion is possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub kind: Kind,
    /// Amount in cents (always positive)
    pub amount_cents: Cents,
    pub category: String,
    pub date: NaiveDate,
    pub note: String,
}

/// A validated entry that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub kind: Kind,
    pub amount_cents: Cents,
    pub category: String,
    pub date: NaiveDate,
    pub note: String,
}

impl NewTransaction {
    /// # Panics
    ///
    /// Panics if `amount_cents` is not positive. Use `validate_input` for untrusted text.
    pub fn new(kind: Kind, amount_cents: Cents, date: NaiveDate) -> Self {
        assert!(amount_cents > 0, "Transaction amount must be positive");
        Self {
            kind,
            amount_cents,
            category: DEFAULT_CATEGORY.to_string(),
            date,
            note: String::new(),
        }
    }

    /// Set the category; a blank value keeps the default.
    pub fn with_category(mut self, category: &str) -> Self {
        let category = category.trim();
        if !category.is_empty() {
            self.category = category.to_string();
        }
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = note.trim().to_string();
        self
    }

    /// Attach the id the store assigned.
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            amount_cents: self.amount_cents,
            category: self.category,
            date: self.date,
            note: self.note,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_kind_roundtrip() {
        for kind in [Kind::Income, Kind::Expense] {
            assert_eq!(Kind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_kind_is_case_insensitive() {
        assert_eq!(Kind::from_str("income"), Some(Kind::Income));
        assert_eq!(Kind::from_str("EXPENSE"), Some(Kind::Expense));
        assert_eq!(Kind::from_str("  eXpEnSe "), Some(Kind::Expense));
        assert_eq!(Kind::from_str("transfer"), None);
        assert_eq!(Kind::from_str(""), None);
    }

    #[test]
    fn test_blank_category_defaults_to_general() {
        let tx = NewTransaction::new(Kind::Expense, 4250, day()).with_category("   ");
        assert_eq!(tx.category, DEFAULT_CATEGORY);

        let tx = NewTransaction::new(Kind::Expense, 4250, day()).with_category(" Food ");
        assert_eq!(tx.category, "Food");
    }

    #[test]
    fn test_into_transaction_keeps_fields() {
        let tx = NewTransaction::new(Kind::Income, 100, day())
            .with_category("Salary")
            .with_note(" march ")
            .into_transaction(7);

        assert_eq!(tx.id, 7);
        assert_eq!(tx.kind, Kind::Income);
        assert_eq!(tx.amount_cents, 100);
        assert_eq!(tx.category, "Salary");
        assert_eq!(tx.note, "march");
        assert_eq!(tx.date, day());
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_zero_amount_panics() {
        NewTransaction::new(Kind::Expense, 0, day());
    }
}
