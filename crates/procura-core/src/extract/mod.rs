//! Structured field extraction from proposal documents
//!
//! Extraction is delegated entirely to a hosted language model: the
//! extractor builds an instruction prompt around the document text and
//! parses the structured JSON the model returns.

mod llm;

pub use llm::LlmExtractor;

use crate::error::Result;
use crate::ingest::LoadedDocument;
use crate::proposal::ProposalFields;
use async_trait::async_trait;

/// Proposal field extraction trait
#[async_trait]
pub trait ProposalExtractor: Send + Sync {
    /// Extract structured fields from a loaded proposal document.
    ///
    /// Errors propagate to the caller; the pipeline substitutes the
    /// fallback sentinel record, never the extractor itself.
    async fn extract(&self, document: &LoadedDocument) -> Result<ProposalFields>;

    /// Get model name
    fn model_name(&self) -> &str;
}
