mod config;
mod error;
mod record_store;

pub use config::*;
pub use error::*;
pub use record_store::*;

/// SQL migration for the transactions table
pub const MIGRATION_001_TRANSACTIONS: &str = include_str!("migrations/001_transactions.sql");
