use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter};

use crate::application::LedgerService;
use crate::domain::{format_cents, TransactionId};
use crate::io::Exporter;
use crate::storage::StoreConfig;

/// Spendbook - Personal Income & Expense Ledger
#[derive(Parser)]
#[command(name = "spendbook")]
#[command(about = "Record income and expenses and summarize them by category")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, env = "SPENDBOOK_DATABASE", default_value = "spendbook.db")]
    pub database: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a transaction
    Add {
        /// Income or Expense (any case)
        kind: String,

        /// Amount (e.g., "42.50" or "42")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Category (defaults to "General")
        #[arg(short, long, default_value = "")]
        category: String,

        /// Date of the transaction (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Free-text note
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// Delete a transaction by id
    Delete {
        /// Transaction id
        id: TransactionId,
    },

    /// List all transactions
    List,

    /// Show totals and expenses by category
    Summary {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export transactions to CSV or JSON
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = StoreConfig::new(&self.database);
        let mut service = LedgerService::open(&config)
            .await
            .with_context(|| format!("Failed to open ledger at {}", self.database))?;

        match self.command {
            Commands::Add {
                kind,
                amount,
                category,
                date,
                note,
            } => {
                let date = date
                    .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());
                let id = service.add(&kind, &amount, &category, &date, &note).await?;

                if let Some(tx) = service.find(id) {
                    println!(
                        "Recorded {} {} [{}] on {} (id {})",
                        tx.kind,
                        format_cents(tx.amount_cents),
                        tx.category,
                        tx.date,
                        tx.id
                    );
                }
            }

            Commands::Delete { id } => {
                let existed = service.find(id).is_some();
                service.delete_selected(id).await?;
                if existed {
                    println!("Deleted transaction {}", id);
                } else {
                    println!("No transaction with id {}; nothing deleted", id);
                }
            }

            Commands::List => run_list_command(&service),

            Commands::Summary { json } => {
                let summary = service.summary();
                if json {
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                } else {
                    print!("{}", summary);
                }
            }

            Commands::Export { format, output } => {
                run_export_command(&service, format, output.as_deref())?;
            }
        }

        Ok(())
    }
}

fn run_list_command(service: &LedgerService) {
    let records = service.current_records();
    if records.is_empty() {
        println!("No transactions found.");
        return;
    }

    println!(
        "{:>6} {:<8} {:>12} {:<15} {:<10} NOTE",
        "ID", "TYPE", "AMOUNT", "CATEGORY", "DATE"
    );
    println!("{}", "-".repeat(70));
    for tx in records {
        println!(
            "{:>6} {:<8} {:>12} {:<15} {:<10} {}",
            tx.id,
            tx.kind,
            format_cents(tx.amount_cents),
            truncate(&tx.category, 15),
            tx.date,
            truncate(&tx.note, 30)
        );
    }
}

fn run_export_command(
    service: &LedgerService,
    format: ExportFormat,
    output: Option<&str>,
) -> Result<()> {
    let writer: Box<dyn io::Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let exporter = Exporter::new(service);
    let count = match format {
        ExportFormat::Csv => exporter.export_csv(writer)?,
        ExportFormat::Json => exporter.export_json(writer)?,
    };

    if output.is_some() {
        eprintln!("Exported {} transactions", count);
    }
    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
