use std::path::Path;

use sea_orm::DatabaseConnection;
use tokio::io::AsyncWriteExt;

use crate::server::{
    config::Config,
    data::flight::FlightRepository,
    error::{storage::StorageError, Error},
    parser::sheet::parse_workbook,
    service::transform::TransformRunner,
};

/// Transient summary of one processed upload.
pub struct ProcessResult {
    pub original_filename: String,
    pub records_persisted: usize,
}

/// Sequences the upload pipeline: store-input, invoke-transform,
/// parse-output, persist, cleanup.
pub struct ProcessingService<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
}

impl<'a> ProcessingService<'a> {
    /// Creates a new instance of [`ProcessingService`]
    pub fn new(db: &'a DatabaseConnection, config: &'a Config) -> Self {
        Self { db, config }
    }

    /// Runs the whole pipeline for one uploaded spreadsheet.
    ///
    /// Cleanup of the fixed input/output files runs on every exit path. A
    /// pipeline failure takes precedence over a cleanup failure, and a
    /// cleanup failure after a successful persist still fails the request;
    /// callers must not assume an error response means nothing was written.
    pub async fn parse_and_save(
        &self,
        original_filename: &str,
        bytes: &[u8],
    ) -> Result<ProcessResult, Error> {
        let outcome = self.run_pipeline(bytes).await;
        let cleanup = self.cleanup().await;

        let records_persisted = outcome?;
        cleanup?;

        Ok(ProcessResult {
            original_filename: original_filename.to_string(),
            records_persisted,
        })
    }

    async fn run_pipeline(&self, bytes: &[u8]) -> Result<usize, Error> {
        self.store_upload(bytes).await?;

        TransformRunner::new(self.config).run().await?;

        let records = parse_workbook(&self.config.output_path())?;

        let repository = FlightRepository::new(self.db);
        let saved = repository
            .save_all(records)
            .await
            .map_err(Error::PersistError)?;

        tracing::info!("persisted {} flight records", saved.len());

        Ok(saved.len())
    }

    /// Writes the uploaded bytes to the fixed input path.
    ///
    /// Refuses to overwrite: a leftover input file from a failed cleanup or
    /// a concurrent writer surfaces as a storage error rather than silent
    /// data loss.
    async fn store_upload(&self, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.config.input_path();

        let store = async {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let mut file = tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await?;
            file.write_all(bytes).await?;
            file.flush().await?;

            Ok::<(), std::io::Error>(())
        };

        store.await.map_err(|source| StorageError::Store {
            path: path.clone(),
            source,
        })
    }

    async fn cleanup(&self) -> Result<(), StorageError> {
        remove_if_present(&self.config.input_path()).await?;
        remove_if_present(&self.config.output_path()).await?;

        Ok(())
    }
}

async fn remove_if_present(path: &Path) -> Result<(), StorageError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StorageError::Cleanup {
            path: path.to_path_buf(),
            source,
        }),
    }
}
