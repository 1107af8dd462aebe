use crate::domain::{summarize, Summary, Transaction, TransactionId};
use crate::storage::{RecordStore, StoreConfig};

use super::{validate_input, AppError};

/// Application service providing the ledger's operations to a front end.
///
/// Holds a read-only cache of every record, ordered by id. The cache is never
/// patched in place: each mutation is followed by a full reload from the store,
/// and a failed reload keeps the previous cache.
pub struct LedgerService {
    store: RecordStore,
    records: Vec<Transaction>,
    next_id: TransactionId,
}

impl LedgerService {
    /// Create a service over the given store with an empty cache.
    /// Call `reload` to populate it.
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Open the ledger: ensure the schema exists and load all records.
    pub async fn open(config: &StoreConfig) -> Result<Self, AppError> {
        let store = RecordStore::new(config);
        store.ensure_schema().await?;

        let mut service = Self::new(store);
        service.reload().await?;
        tracing::debug!(
            path = %config.database_path.display(),
            records = service.records.len(),
            "ledger opened"
        );
        Ok(service)
    }

    /// Validate form input, persist it, and reload the cache.
    /// Returns the id assigned to the new record.
    ///
    /// A `Persistence` error can come from the reload after a successful insert,
    /// in which case the record is already stored. Call `reload` and check
    /// `current_records` before adding it again.
    pub async fn add(
        &mut self,
        kind_text: &str,
        amount_text: &str,
        category_text: &str,
        date_text: &str,
        note_text: &str,
    ) -> Result<TransactionId, AppError> {
        let new_tx = validate_input(kind_text, amount_text, category_text, date_text, note_text)
            .inspect_err(|e| tracing::warn!(error = %e, "rejected transaction input"))?;

        let id = self.store.insert(&new_tx).await?;
        self.next_id = self.next_id.max(id + 1);
        tracing::info!(id, kind = %new_tx.kind, category = %new_tx.category, "transaction added");

        self.reload().await?;
        Ok(id)
    }

    /// Delete the record with the given id and reload the cache.
    /// An id with no matching record is a no-op.
    pub async fn delete_selected(&mut self, id: TransactionId) -> Result<(), AppError> {
        let removed = self.store.delete(id).await?;
        if removed == 0 {
            tracing::debug!(id, "no transaction to delete");
        } else {
            tracing::info!(id, "transaction deleted");
        }

        self.reload().await
    }

    /// Replace the cache with a fresh read of the store.
    /// On failure the previous cache and watermark are left untouched.
    pub async fn reload(&mut self) -> Result<(), AppError> {
        let records = self
            .store
            .list_all()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "reload failed, keeping cached records"))?;

        if let Some(max_id) = records.iter().map(|r| r.id).max() {
            self.next_id = self.next_id.max(max_id + 1);
        }
        self.records = records;
        Ok(())
    }

    /// The cached records, ordered by id. No I/O.
    pub fn current_records(&self) -> &[Transaction] {
        &self.records
    }

    /// Look up a cached record by id.
    pub fn find(&self, id: TransactionId) -> Option<&Transaction> {
        self.records
            .binary_search_by_key(&id, |r| r.id)
            .ok()
            .map(|idx| &self.records[idx])
    }

    /// The next id the ledger expects the store to assign.
    pub fn next_id(&self) -> TransactionId {
        self.next_id
    }

    /// Totals and expense breakdown over the cached records.
    pub fn summary(&self) -> Summary {
        summarize(&self.records)
    }

    /// Direct access to the underlying store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}
