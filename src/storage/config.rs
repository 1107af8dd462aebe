use std::path::PathBuf;
use std::time::Duration;

use sqlx::sqlite::SqliteConnectOptions;

/// Connection settings for the record store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    pub database_path: PathBuf,
    /// Create the file on first connect instead of failing
    pub create_if_missing: bool,
    /// How long a connection waits on a locked database before erroring
    pub busy_timeout: Duration,
}

impl StoreConfig {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            create_if_missing: true,
            busy_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    pub(crate) fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.database_path)
            .create_if_missing(self.create_if_missing)
            .busy_timeout(self.busy_timeout)
    }
}
