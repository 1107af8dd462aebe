use thiserror::Error;

use crate::domain::TransactionId;

/// Failure talking to, or reading back from, the record store.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("{context}: {source}")]
    Database {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Corrupt record {id}: {reason}")]
    CorruptRecord { id: TransactionId, reason: String },
}

pub type Result<T, E = PersistenceError> = std::result::Result<T, E>;

/// Attach a short description of the failed operation to a sqlx error.
pub(crate) trait DbContext<T> {
    fn context(self, context: &'static str) -> Result<T>;
}

impl<T> DbContext<T> for std::result::Result<T, sqlx::Error> {
    fn context(self, context: &'static str) -> Result<T> {
        self.map_err(|source| PersistenceError::Database { context, source })
    }
}
