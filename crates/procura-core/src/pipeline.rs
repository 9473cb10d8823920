//! Proposal processing pipeline
//!
//! Sequential loop over loaded documents: skip documents whose output JSON
//! already exists, extract the rest, substitute the sentinel record when
//! extraction fails, and persist every new record immediately.

use crate::error::Result;
use crate::extract::ProposalExtractor;
use crate::ingest::LoadedDocument;
use crate::proposal::ProposalRecord;
use crate::store::JsonStore;

/// Counters for one processing run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ProcessSummary {
    /// Documents found in the proposals directory
    pub found: usize,
    /// Documents newly extracted this run
    pub extracted: usize,
    /// Documents skipped because their output JSON already existed
    pub skipped: usize,
    /// Extractions that fell back to the sentinel record
    pub failed: usize,
}

/// Process a batch of loaded documents into persisted records.
///
/// A document whose output file exists is loaded from JSON and costs no
/// extraction call. A failed extraction yields the fallback record rather
/// than aborting the batch; failed load of an existing output file drops
/// the document from this run's results.
pub async fn process_documents(
    documents: &[LoadedDocument],
    store: &JsonStore,
    extractor: &dyn ProposalExtractor,
) -> Result<(Vec<ProposalRecord>, ProcessSummary)> {
    let mut summary = ProcessSummary {
        found: documents.len(),
        ..ProcessSummary::default()
    };
    let mut records = Vec::with_capacity(documents.len());

    for (i, document) in documents.iter().enumerate() {
        let id = (i + 1) as u64;
        let source_file = document.path.to_string_lossy().to_string();

        if store.is_processed(&document.path) {
            tracing::info!("Skipping {} (already processed)", document.vendor_hint);
            summary.skipped += 1;

            match store.load(&document.path) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(
                        "Error loading cached JSON for {}: {}",
                        document.vendor_hint,
                        e
                    );
                }
            }
            continue;
        }

        let record = match extractor.extract(document).await {
            Ok(fields) => ProposalRecord::from_fields(id, fields, source_file),
            Err(e) => {
                tracing::warn!("Extraction failed for {}: {}", document.vendor_hint, e);
                summary.failed += 1;
                ProposalRecord::fallback(id, &document.vendor_hint, source_file)
            }
        };

        store.save(&record, &document.path, document.file_size)?;
        summary.extracted += 1;
        records.push(record);
    }

    tracing::info!(
        "Processing summary: {} found, {} extracted, {} skipped, {} failed",
        summary.found,
        summary.extracted,
        summary.skipped,
        summary.failed
    );

    Ok((records, summary))
}
