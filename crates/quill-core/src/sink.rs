//! Submission sinks.
//!
//! The wizard never performs I/O itself. On completion it hands a
//! [`Submission`] to whatever [`SubmissionSink`] the caller injected and
//! awaits the result.
//!
//! - [`LogSink`]: logs the payload and accepts it after a fixed delay
//! - [`FileSink`]: writes the payload as JSON into an outbox directory

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use async_trait::async_trait;
use jiff::Timestamp;
use log::{debug, info};
use thiserror::Error;

use crate::{
    error::{Result, WizardError},
    models::{Receipt, Submission},
};

/// Why a sink did not accept a submission. All variants are retryable from
/// the wizard's point of view.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The receiving side refused the payload
    #[error("Submission rejected: {reason}")]
    Rejected { reason: String },
    /// Writing the payload failed
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The payload could not be encoded
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Destination for completed wizard payloads.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver a submission, returning a receipt on success.
    async fn submit(&self, submission: &Submission) -> std::result::Result<Receipt, SinkError>;
}

/// Sink that only logs the payload, then accepts it after `delay`.
#[derive(Debug, Clone)]
pub struct LogSink {
    delay: Duration,
}

impl LogSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl SubmissionSink for LogSink {
    async fn submit(&self, submission: &Submission) -> std::result::Result<Receipt, SinkError> {
        let payload = serde_json::to_string(&submission.values)?;
        info!("Submitting {}: {}", submission.flow, payload);

        tokio::time::sleep(self.delay).await;

        let submitted_at = Timestamp::now();
        Ok(Receipt {
            reference: format!("log-{}-{}", submission.flow, submitted_at.as_millisecond()),
            flow: submission.flow.clone(),
            submitted_at,
        })
    }
}

/// Sink that writes each submission to `<dir>/<flow>-<unix millis>.json`.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Create a sink writing into `dir`. The directory is created on first
    /// submission.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Outbox directory this sink writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the default outbox directory following the XDG Base
    /// Directory specification: `$XDG_DATA_HOME/quill/outbox` or
    /// `~/.local/share/quill/outbox`. The directory is created if missing.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::XdgDirectory` if the directory cannot be
    /// resolved or created.
    pub fn default_dir() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("quill")
            .create_data_directory("outbox")
            .map_err(|e| WizardError::XdgDirectory(e.to_string()))
    }
}

#[async_trait]
impl SubmissionSink for FileSink {
    async fn submit(&self, submission: &Submission) -> std::result::Result<Receipt, SinkError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| SinkError::FileSystem {
                path: self.dir.clone(),
                source: e,
            })?;

        let submitted_at = Timestamp::now();
        let stem = format!("{}-{}", submission.flow, submitted_at.as_millisecond());
        let path = self.dir.join(format!("{stem}.json"));

        let body = serde_json::to_vec_pretty(submission)?;
        tokio::fs::write(&path, body)
            .await
            .map_err(|e| SinkError::FileSystem {
                path: path.clone(),
                source: e,
            })?;

        debug!("Wrote submission to {}", path.display());

        Ok(Receipt {
            reference: stem,
            flow: submission.flow.clone(),
            submitted_at,
        })
    }
}
