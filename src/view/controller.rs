use std::path::Path;

use chrono::{FixedOffset, Local};
use tracing::{debug, error};

use crate::core::client::client_error::ClientError;
use crate::core::client::log_api_client_trait::LogApiClient;
use crate::domain::log::model::{LogRecord, LogUpload};
use crate::view::card::LogCard;
use crate::view::container::CardContainer;
use crate::view::notifier::Notifier;

pub const MSG_NO_FILE: &str = "Please select a file to upload.";
pub const MSG_UPLOAD_OK: &str = "File uploaded successfully!";
pub const MSG_UPLOAD_FAILED: &str = "Error uploading file.";

/// What the upload form holds at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadSubmission {
    pub file: Option<LogUpload>,
}

impl UploadSubmission {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_file(file: LogUpload) -> Self {
        Self { file: Some(file) }
    }

    /// Read the file at `path` into a submission named after its file name.
    pub async fn from_path(path: &Path) -> Result<Self, ClientError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| ClientError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::with_file(LogUpload::new(file_name, bytes)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    NoFileSelected,
    Uploaded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Rendered(usize),
    Failed,
}

/// Owns the card container and the notification channel, and drives both
/// from the log API.
pub struct LogViewController<C, N> {
    client: C,
    notifier: N,
    container: CardContainer,
    offset: Option<FixedOffset>,
}

impl<C: LogApiClient, N: Notifier> LogViewController<C, N> {
    pub fn new(client: C, notifier: N) -> Self {
        Self {
            client,
            notifier,
            container: CardContainer::new(),
            offset: None,
        }
    }

    /// Format timestamps in `offset` instead of the machine's local zone.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn container(&self) -> &CardContainer {
        &self.container
    }

    /// Initial fetch-and-render.
    pub async fn init(&mut self) -> RefreshOutcome {
        self.fetch_logs().await
    }

    pub async fn handle_submit(&mut self, submission: UploadSubmission) -> UploadOutcome {
        let Some(file) = submission.file else {
            self.notifier.notify(MSG_NO_FILE);
            return UploadOutcome::NoFileSelected;
        };

        debug!(file_name = %file.file_name, bytes = file.bytes.len(), "Uploading log");
        match self.client.upload_log(&file).await {
            Ok(_) => {
                self.notifier.notify(MSG_UPLOAD_OK);
                self.fetch_logs().await;
                UploadOutcome::Uploaded
            }
            Err(e) => {
                error!(error = %e, "Error uploading log file");
                self.notifier.notify(MSG_UPLOAD_FAILED);
                UploadOutcome::Failed
            }
        }
    }

    /// Fetch the list and re-render. On failure the current cards stay.
    pub async fn fetch_logs(&mut self) -> RefreshOutcome {
        match self.client.list_logs(None).await {
            Ok(logs) => {
                self.display_logs(&logs);
                RefreshOutcome::Rendered(logs.len())
            }
            Err(e) => {
                error!(error = %e, "Error fetching logs");
                RefreshOutcome::Failed
            }
        }
    }

    pub fn display_logs(&mut self, logs: &[LogRecord]) {
        let cards: Vec<LogCard> = match self.offset {
            Some(offset) => logs.iter().map(|log| LogCard::from_record(log, &offset)).collect(),
            None => logs.iter().map(|log| LogCard::from_record(log, &Local)).collect(),
        };
        self.container.replace_with(cards);
    }

    /// Placeholder: only tells the user which log was picked.
    pub fn visualize(&self, log_id: i64) {
        self.notifier
            .notify(&format!("Visualizing log with ID: {log_id}"));
    }
}
