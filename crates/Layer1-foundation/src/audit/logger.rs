//! Audit Logger - line-oriented JSONL sink
//!
//! Entries go through an unbounded channel to a writer task, so the
//! producing call never blocks on disk.

use super::types::{AuditEntry, AuditLevel};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Audit logger settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// File the JSON lines are appended to
    #[serde(default = "default_file_path")]
    pub file_path: PathBuf,

    /// Disabled loggers drop every entry
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_file_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tutorforge")
        .join("audit.log")
}

fn default_enabled() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            file_path: default_file_path(),
            enabled: default_enabled(),
        }
    }
}

/// Append-only audit logger
///
/// Must be created inside a Tokio runtime; the writer task is spawned
/// at construction.
pub struct AuditLogger {
    tx: Option<mpsc::UnboundedSender<AuditEntry>>,
    writer: Option<JoinHandle<()>>,
    config: AuditConfig,
}

impl AuditLogger {
    pub fn new() -> Self {
        Self::with_config(AuditConfig::default())
    }

    pub fn with_config(config: AuditConfig) -> Self {
        if !config.enabled {
            return Self {
                tx: None,
                writer: None,
                config,
            };
        }

        let (tx, mut rx) = mpsc::unbounded_channel::<AuditEntry>();
        let path = config.file_path.clone();
        let writer = tokio::spawn(async move {
            while let Some(entry) = rx.recv().await {
                if let Err(e) = append_line(&path, &entry).await {
                    // Secondary channel: the producing caller is never
                    // affected by a failed audit write
                    error!(error = %e, path = %path.display(), "Audit write failed");
                }
            }
        });

        info!(path = %config.file_path.display(), "Audit logger started");
        Self {
            tx: Some(tx),
            writer: Some(writer),
            config,
        }
    }

    /// Queue one entry. Never blocks, never fails.
    pub fn log(&self, level: AuditLevel, category: &str, message: &str, metadata: Value) {
        if let Some(tx) = &self.tx {
            let entry = AuditEntry::new(level, category, message).with_metadata(metadata);
            let _ = tx.send(entry);
        }
    }

    /// Close the channel and wait for queued entries to reach disk
    pub async fn shutdown(mut self) {
        self.tx.take();
        if let Some(writer) = self.writer.take() {
            let _ = writer.await;
        }
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }
}

impl Default for AuditLogger {
    fn default() -> Self {
        Self::new()
    }
}

async fn append_line(path: &Path, entry: &AuditEntry) -> crate::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut line = serde_json::to_string(entry)?;
    line.push('\n');

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    Ok(())
}
