//! File-backed cooldown store.

use crate::{CooldownStore, decode_record, encode_record};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use topicbot_core::CooldownState;
use topicbot_error::{StorageError, StorageErrorKind, StorageResult};
use tracing::{debug, error, info, instrument, warn};

/// JSON record file holding the cooldown deadline.
///
/// Saves go to a sibling temporary file that is renamed over the record, so a
/// crash mid-write leaves either the old or the new record, never a torn one.
#[derive(Debug, Clone)]
pub struct JsonCooldownStore {
    file_path: PathBuf,
}

impl JsonCooldownStore {
    /// Create a store for the record at `file_path`.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Location of the record.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn temp_path(&self) -> StorageResult<PathBuf> {
        let file_name = self.file_path.file_name().ok_or_else(|| {
            StorageError::new(StorageErrorKind::InvalidPath(
                self.file_path.display().to_string(),
            ))
        })?;
        let mut temp_name = file_name.to_os_string();
        temp_name.push(".tmp");
        Ok(self.file_path.with_file_name(temp_name))
    }

    /// Read the record, reporting anything other than a missing file.
    ///
    /// # Errors
    ///
    /// Returns `FileRead` if the record exists but cannot be read or decoded.
    #[instrument(skip(self), fields(path = %self.file_path.display()))]
    pub async fn read_record(&self) -> StorageResult<CooldownState> {
        let content = match tokio::fs::read_to_string(&self.file_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No state file");
                return Ok(CooldownState::open());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.file_path.display(),
                    e
                ))));
            }
        };

        decode_record(&content).map_err(|reason| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                self.file_path.display(),
                reason
            )))
        })
    }
}

#[async_trait]
impl CooldownStore for JsonCooldownStore {
    #[instrument(skip(self), fields(path = %self.file_path.display()))]
    async fn load(&self) -> CooldownState {
        match self.read_record().await {
            Ok(state) => {
                info!(deadline = ?state.deadline(), "State loaded");
                state
            }
            Err(e) => {
                warn!(error = %e, "State file unusable, starting without cooldown");
                CooldownState::open()
            }
        }
    }

    #[instrument(skip(self, state), fields(path = %self.file_path.display(), deadline = ?state.deadline()))]
    async fn save(&self, state: &CooldownState) -> StorageResult<()> {
        debug!("Saving state");
        let content = encode_record(state)?;
        let temp_path = self.temp_path()?;

        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                error!(error = %e, "Failed to create state directory");
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        tokio::fs::write(&temp_path, content).await.map_err(|e| {
            error!(error = %e, "Failed to write state file");
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.file_path)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to replace state file");
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: {}",
                    self.file_path.display(),
                    e
                )))
            })?;

        info!("State saved");
        Ok(())
    }
}
