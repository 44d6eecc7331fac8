//! CSV export of normalized records to the configured object store.

use tracing::info;

use crate::models::Record;
use crate::storage::{ObjectStore, StorageError, csv};

/// Object name for a partition, e.g. `20181016_boxscore_data.csv`.
#[must_use]
pub fn object_key(partition: &str, kind: &str) -> String {
    format!("{partition}_{kind}_data.csv")
}

pub struct ExportService {
    store: Box<dyn ObjectStore>,
}

impl ExportService {
    #[must_use]
    pub fn new(store: Box<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Encodes `records` as CSV and writes them under `{partition}_{KIND}_data.csv`.
    ///
    /// Returns the object key written. An existing object is replaced.
    pub async fn export<R: Record>(
        &self,
        partition: &str,
        records: &[R],
    ) -> Result<String, StorageError> {
        let key = object_key(partition, R::KIND);
        let body = csv::encode(records);
        let size = body.len();

        self.store.put(&key, body).await?;

        info!(
            "File {} ({} records, {} bytes) written to {}",
            key,
            records.len(),
            size,
            self.store.location(&key)
        );
        Ok(key)
    }
}
