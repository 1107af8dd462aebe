use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::application::LedgerService;
use crate::domain::{format_cents, Summary, Transaction};

/// Full ledger snapshot for JSON export
#[derive(Debug, Clone, Serialize)]
pub struct LedgerSnapshot<'a> {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub transactions: &'a [Transaction],
    pub summary: Summary,
}

/// Exporter for writing the cached ledger to various formats
pub struct Exporter<'a> {
    service: &'a LedgerService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a LedgerService) -> Self {
        Self { service }
    }

    /// Export transactions to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["id", "kind", "amount", "category", "date", "note"])?;

        let records = self.service.current_records();
        for tx in records {
            csv_writer.write_record(&[
                tx.id.to_string(),
                tx.kind.to_string(),
                format_cents(tx.amount_cents),
                tx.category.clone(),
                tx.date.format("%Y-%m-%d").to_string(),
                tx.note.clone(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(records.len())
    }

    /// Export transactions plus summary as pretty JSON
    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            transactions: self.service.current_records(),
            summary: self.service.summary(),
        };

        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writeln!(writer)?;
        Ok(snapshot.transactions.len())
    }
}
