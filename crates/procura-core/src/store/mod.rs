//! JSON output store
//!
//! One JSON file per source document, named `{stem}_extracted.json`. The
//! existence of the file is the entire "already processed" contract:
//! records are written once and superseded only by deleting the file and
//! rerunning extraction.

use crate::error::{ProcuraError, Result};
use crate::proposal::ProposalRecord;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// Envelope persisted for each extracted proposal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredProposal {
    pub metadata: StoredMetadata,
    pub extracted_data: ProposalRecord,
}

/// Provenance metadata for a stored proposal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMetadata {
    /// Original PDF path
    pub source_pdf: String,
    /// RFC 3339 timestamp of the extraction
    pub extracted_at: String,
    /// Source file size in bytes
    pub file_size: u64,
    /// SHA-256 of the record's text fields
    pub content_sha256: String,
}

/// File-per-proposal JSON store
pub struct JsonStore {
    output_dir: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at `output_dir` (not created until first save)
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Output directory for this store
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Get the JSON output path for a source document
    pub fn output_path(&self, source: &Path) -> PathBuf {
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("proposal");
        self.output_dir
            .join(format!("{}{}", stem, crate::OUTPUT_SUFFIX))
    }

    /// Check whether a source document has already been processed
    pub fn is_processed(&self, source: &Path) -> bool {
        self.output_path(source).exists()
    }

    /// Persist an extracted record for a source document
    pub fn save(&self, record: &ProposalRecord, source: &Path, file_size: u64) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;

        let stored = StoredProposal {
            metadata: StoredMetadata {
                source_pdf: source.to_string_lossy().to_string(),
                extracted_at: Utc::now().to_rfc3339(),
                file_size,
                content_sha256: hash_record(record),
            },
            extracted_data: record.clone(),
        };

        let json_path = self.output_path(source);
        let content = serde_json::to_string_pretty(&stored)?;
        fs::write(&json_path, content)?;

        tracing::info!("Saved extracted data to {}", json_path.display());
        Ok(())
    }

    /// Load a previously extracted record for a source document
    pub fn load(&self, source: &Path) -> Result<ProposalRecord> {
        let json_path = self.output_path(source);
        let content = fs::read_to_string(&json_path).map_err(|_| {
            ProcuraError::ProposalNotFound(json_path.to_string_lossy().to_string())
        })?;

        let stored: StoredProposal = serde_json::from_str(&content)?;
        Ok(stored.extracted_data)
    }

    /// Load every stored record in the output directory, sorted by id.
    ///
    /// Unreadable files are logged at WARN and skipped.
    pub fn load_all(&self) -> Result<Vec<ProposalRecord>> {
        if !self.output_dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in fs::read_dir(&self.output_dir)? {
            let entry = entry?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            if !name.ends_with(crate::OUTPUT_SUFFIX) {
                continue;
            }

            match fs::read_to_string(&path)
                .map_err(ProcuraError::from)
                .and_then(|content| {
                    serde_json::from_str::<StoredProposal>(&content).map_err(ProcuraError::from)
                }) {
                Ok(stored) => records.push(stored.extracted_data),
                Err(e) => {
                    tracing::warn!("Skipping unreadable output file {}: {}", path.display(), e);
                }
            }
        }

        records.sort_by_key(|r| r.id);
        Ok(records)
    }
}

/// SHA-256 over the record's text fields, for provenance tracking
fn hash_record(record: &ProposalRecord) -> String {
    let mut hasher = Sha256::new();
    hasher.update(record.vendor_name.as_bytes());
    hasher.update(record.project_name.as_bytes());
    hasher.update(record.delivery_timeline.as_bytes());
    hasher.update(record.scope_summary.as_bytes());
    hasher.update(record.risks.as_bytes());
    format!("{:x}", hasher.finalize())
}
