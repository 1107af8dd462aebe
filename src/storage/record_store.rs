use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqliteRow};
use sqlx::{Connection, Row, SqliteConnection};

use crate::domain::{
    cents_to_units, units_to_cents, Kind, NewTransaction, Transaction, TransactionId,
};

use super::{DbContext, PersistenceError, Result, StoreConfig, MIGRATION_001_TRANSACTIONS};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Durable storage for ledger transactions.
///
/// Every operation opens its own connection and closes it before returning.
/// An early return drops the connection, which releases it as well.
pub struct RecordStore {
    options: SqliteConnectOptions,
}

impl RecordStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            options: config.connect_options(),
        }
    }

    async fn acquire(&self) -> Result<SqliteConnection> {
        SqliteConnection::connect_with(&self.options)
            .await
            .context("Failed to connect to database")
    }

    /// Create the transactions table if it does not exist. Safe to call on every start.
    pub async fn ensure_schema(&self) -> Result<()> {
        let mut conn = self.acquire().await?;
        sqlx::query(MIGRATION_001_TRANSACTIONS)
            .execute(&mut conn)
            .await
            .context("Failed to create transactions table")?;
        conn.close().await.context("Failed to close connection")?;
        tracing::debug!("schema ready");
        Ok(())
    }

    /// Persist a new transaction and return the id the database assigned.
    pub async fn insert(&self, tx: &NewTransaction) -> Result<TransactionId> {
        let mut conn = self.acquire().await?;
        let done = sqlx::query(
            r#"
            INSERT INTO transactions (kind, amount, category, date, note)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(tx.kind.as_str())
        .bind(cents_to_units(tx.amount_cents))
        .bind(&tx.category)
        .bind(tx.date.format(DATE_FORMAT).to_string())
        .bind(&tx.note)
        .execute(&mut conn)
        .await
        .context("Failed to insert transaction")?;
        conn.close().await.context("Failed to close connection")?;

        let id = done.last_insert_rowid();
        tracing::debug!(id, kind = %tx.kind, amount_cents = tx.amount_cents, "inserted transaction");
        Ok(id)
    }

    /// Remove a transaction. Deleting an unknown id is a no-op.
    /// Returns the number of rows removed.
    pub async fn delete(&self, id: TransactionId) -> Result<u64> {
        let mut conn = self.acquire().await?;
        let done = sqlx::query("DELETE FROM transactions WHERE id = ?")
            .bind(id)
            .execute(&mut conn)
            .await
            .context("Failed to delete transaction")?;
        conn.close().await.context("Failed to close connection")?;

        let removed = done.rows_affected();
        tracing::debug!(id, removed, "deleted transaction");
        Ok(removed)
    }

    /// List all transactions, ordered by id.
    pub async fn list_all(&self) -> Result<Vec<Transaction>> {
        let mut conn = self.acquire().await?;
        let rows = sqlx::query(
            r#"
            SELECT id, kind, amount, category, date, note
            FROM transactions
            ORDER BY id
            "#,
        )
        .fetch_all(&mut conn)
        .await
        .context("Failed to list transactions")?;
        conn.close().await.context("Failed to close connection")?;

        tracing::debug!(count = rows.len(), "loaded transactions");
        rows.iter().map(Self::row_to_transaction).collect()
    }

    fn row_to_transaction(row: &SqliteRow) -> Result<Transaction> {
        let id: TransactionId = row.try_get("id").context("Invalid id column")?;
        let corrupt = |reason: String| PersistenceError::CorruptRecord { id, reason };

        let kind_str: String = row.try_get("kind").context("Invalid kind column")?;
        let amount: f64 = row.try_get("amount").context("Invalid amount column")?;
        let date_str: String = row.try_get("date").context("Invalid date column")?;
        let note: Option<String> = row.try_get("note").context("Invalid note column")?;

        let kind =
            Kind::from_str(&kind_str).ok_or_else(|| corrupt(format!("unknown kind '{kind_str}'")))?;
        let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
            .map_err(|e| corrupt(format!("bad date '{date_str}': {e}")))?;

        Ok(Transaction {
            id,
            kind,
            amount_cents: units_to_cents(amount),
            category: row.try_get("category").context("Invalid category column")?,
            date,
            note: note.unwrap_or_default(),
        })
    }
}
