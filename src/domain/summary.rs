use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::{format_cents, Kind, TotalCents, Transaction};

/// Totals and per-category expense breakdown over a set of transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_income: TotalCents,
    pub total_expense: TotalCents,
    /// total_income - total_expense
    pub balance: TotalCents,
    /// Expense totals keyed by category. Categories with no expenses are absent.
    pub by_category: HashMap<String, TotalCents>,
}

/// Compute the summary for a list of transactions. Pure; no I/O.
///
/// Sums are accumulated in `i128`, so no realistic ledger can overflow them.
pub fn summarize(records: &[Transaction]) -> Summary {
    let mut summary = Summary::default();

    for record in records {
        let amount = TotalCents::from(record.amount_cents);
        match record.kind {
            Kind::Income => summary.total_income += amount,
            Kind::Expense => {
                summary.total_expense += amount;
                *summary
                    .by_category
                    .entry(record.category.clone())
                    .or_insert(0) += amount;
            }
        }
    }

    summary.balance = summary.total_income - summary.total_expense;
    summary
}

impl Summary {
    /// Expense categories sorted by name, for stable display.
    pub fn categories_sorted(&self) -> Vec<(&str, TotalCents)> {
        let mut categories: Vec<(&str, TotalCents)> = self
            .by_category
            .iter()
            .map(|(name, total)| (name.as_str(), *total))
            .collect();
        categories.sort_by(|a, b| a.0.cmp(b.0));
        categories
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Income: {}", format_cents(self.total_income))?;
        writeln!(f, "Total Expense: {}", format_cents(self.total_expense))?;
        writeln!(f, "Balance: {}", format_cents(self.balance))?;
        writeln!(f)?;
        writeln!(f, "Expenses by Category:")?;
        for (category, total) in self.categories_sorted() {
            writeln!(f, " - {} : {}", category, format_cents(total))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::Cents;

    fn make_tx(id: i64, kind: Kind, amount_cents: Cents, category: &str) -> Transaction {
        Transaction {
            id,
            kind,
            amount_cents,
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            note: String::new(),
        }
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_income, 0);
        assert_eq!(summary.total_expense, 0);
        assert_eq!(summary.balance, 0);
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn test_summarize_mixed() {
        let records = vec![
            make_tx(1, Kind::Income, 10000, "Salary"),
            make_tx(2, Kind::Expense, 3000, "Food"),
            make_tx(3, Kind::Expense, 2000, "Food"),
            make_tx(4, Kind::Expense, 1000, "Transport"),
        ];

        let summary = summarize(&records);

        assert_eq!(summary.total_income, 10000);
        assert_eq!(summary.total_expense, 6000);
        assert_eq!(summary.balance, 4000);
        assert_eq!(summary.by_category.len(), 2);
        assert_eq!(summary.by_category.get("Food"), Some(&5000));
        assert_eq!(summary.by_category.get("Transport"), Some(&1000));
        // Income categories never show up in the expense breakdown
        assert_eq!(summary.by_category.get("Salary"), None);
    }

    #[test]
    fn test_balance_can_go_negative() {
        let records = vec![
            make_tx(1, Kind::Income, 500, "Gift"),
            make_tx(2, Kind::Expense, 1500, "Rent"),
        ];

        let summary = summarize(&records);
        assert_eq!(summary.balance, -1000);
    }

    #[test]
    fn test_large_totals_do_not_overflow() {
        let records = vec![
            make_tx(1, Kind::Expense, i64::MAX, "Housing"),
            make_tx(2, Kind::Expense, i64::MAX, "Housing"),
            make_tx(3, Kind::Income, i64::MAX, "Salary"),
        ];

        let summary = summarize(&records);

        let max = TotalCents::from(i64::MAX);
        assert_eq!(summary.total_expense, max * 2);
        assert_eq!(summary.total_income, max);
        assert_eq!(summary.balance, -max);
        assert_eq!(summary.by_category["Housing"], max * 2);
        assert!(summary.to_string().contains("Total Expense: 184467440737095516.14"));
    }

    #[test]
    fn test_display_lists_categories() {
        let records = vec![
            make_tx(1, Kind::Income, 10000, "Salary"),
            make_tx(2, Kind::Expense, 1000, "Transport"),
            make_tx(3, Kind::Expense, 5000, "Food"),
        ];

        let text = summarize(&records).to_string();

        assert!(text.contains("Total Income: 100.00"));
        assert!(text.contains("Total Expense: 60.00"));
        assert!(text.contains("Balance: 40.00"));
        assert!(text.contains(" - Food : 50.00"));
        assert!(text.contains(" - Transport : 10.00"));
    }
}
