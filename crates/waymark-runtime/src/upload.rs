//! Mission upload transport.
//!
//! One POST per request, JSON body, no retries. The outcome is reported
//! back as data so both the editor and the `upload` command can render it.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use serde::Serialize;
use tracing::{info, warn};
use waymark_types::UploadRequest;

use crate::Result;
use crate::config::EndpointConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UploadOutcome {
    Success,
    /// Server answered with a non-success status code
    Rejected { code: u16 },
    /// Request never completed (connection, timeout, body)
    Failed { error: String },
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Success)
    }

    pub fn message(&self) -> String {
        match self {
            UploadOutcome::Success => "Mission uploaded successfully.".to_string(),
            UploadOutcome::Rejected { code } => format!(
                "Failed to upload data. Server responded with status code {}.",
                code
            ),
            UploadOutcome::Failed { error } => format!("Failed to upload data. Error: {}", error),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadReport {
    pub outcome: UploadOutcome,
    pub url: String,
    pub waypoints: usize,
    pub finished_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UploadClient {
    client: Client,
    url: String,
}

impl UploadClient {
    pub fn new(endpoint: &EndpointConfig) -> Result<Self> {
        Self::for_url(endpoint.url(), endpoint.timeout_secs)
    }

    /// Client for an explicit URL, e.g. a command-line override
    pub fn for_url(url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs.max(1)))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the mission and wait for the answer
    pub fn upload(&self, request: &UploadRequest) -> UploadReport {
        let waypoints = request.data.len();
        info!(url = %self.url, waypoints, "uploading mission");

        let outcome = match self.client.post(&self.url).json(request).send() {
            Ok(response) if response.status().is_success() => UploadOutcome::Success,
            Ok(response) => UploadOutcome::Rejected {
                code: response.status().as_u16(),
            },
            Err(err) => UploadOutcome::Failed {
                error: err.to_string(),
            },
        };

        if outcome.is_success() {
            info!(url = %self.url, "upload finished");
        } else {
            warn!(url = %self.url, outcome = ?outcome, "upload failed");
        }

        UploadReport {
            outcome,
            url: self.url.clone(),
            waypoints,
            finished_at: Utc::now(),
        }
    }
}

/// Run the upload on a worker thread and deliver the report on `tx`.
///
/// The caller keeps processing input meanwhile; a dropped receiver simply
/// discards the report.
pub fn spawn_upload(
    client: UploadClient,
    request: UploadRequest,
    tx: Sender<UploadReport>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let report = client.upload(&request);
        let _ = tx.send(report);
    })
}
