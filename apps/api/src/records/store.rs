//! Record store: append-only history of analysis records.
//!
//! `JsonFileStore` keeps the whole history as one JSON array. Reads are
//! fail-open: a missing, unparsable or non-array file reads as empty, and
//! individual entries that do not parse are skipped. Appends rewrite the file
//! atomically under an in-process lock; concurrent writers in *other*
//! processes still race (last writer wins).

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::models::record::AnalysisRecord;

/// Storage seam for analysis records. Carried in `AppState` as `Arc<dyn RecordStore>`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Every stored record, oldest first. Never fails; unreadable storage is empty.
    async fn read_all(&self) -> Vec<AnalysisRecord>;

    async fn append(&self, record: &AnalysisRecord) -> Result<()>;

    /// Removes every record.
    async fn clear(&self) -> Result<()>;
}

pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw JSON entries as stored. Unknown or malformed entries are preserved
    /// so an append never drops data it could not interpret.
    async fn load_raw(&self) -> Vec<Value> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("Failed to read record store {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                warn!(
                    "Record store {} does not hold a JSON array; treating as empty",
                    self.path.display()
                );
                Vec::new()
            }
            Err(e) => {
                warn!(
                    "Record store {} is not valid JSON ({e}); treating as empty",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    async fn persist(&self, entries: &[Value]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(entries).context("Failed to serialize records")?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&path, &bytes))
            .await
            .context("Record store writer task failed")?
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn read_all(&self) -> Vec<AnalysisRecord> {
        let raw = self.load_raw().await;
        let total = raw.len();
        let records: Vec<AnalysisRecord> = raw
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect();
        if records.len() < total {
            warn!(
                "Skipped {} malformed record(s) in {}",
                total - records.len(),
                self.path.display()
            );
        }
        records
    }

    async fn append(&self, record: &AnalysisRecord) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load_raw().await;
        entries.push(serde_json::to_value(record).context("Failed to serialize record")?);
        self.persist(&entries).await?;
        info!(
            "Appended analysis record for '{}' ({}), store now holds {} record(s)",
            record.candidate_name,
            record.job_title,
            entries.len()
        );
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.persist(&[]).await?;
        info!("Cleared record store {}", self.path.display());
        Ok(())
    }
}

/// Writes to a temp file in the target directory, then renames over `path`.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

/// Process-local store used by handler tests.
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryStore {
    records: tokio::sync::RwLock<Vec<AnalysisRecord>>,
}

#[cfg(test)]
impl InMemoryStore {
    pub fn with_records(records: Vec<AnalysisRecord>) -> Self {
        Self {
            records: tokio::sync::RwLock::new(records),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl RecordStore for InMemoryStore {
    async fn read_all(&self) -> Vec<AnalysisRecord> {
        self.records.read().await.clone()
    }

    async fn append(&self, record: &AnalysisRecord) -> Result<()> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.records.write().await.clear();
        Ok(())
    }
}
