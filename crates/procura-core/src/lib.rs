//! Procura Core Library
//!
//! Core functionality for the procura vendor proposal pipeline.
//!
//! # Features
//! - PDF proposal ingestion via pdf-extract
//! - Structured field extraction through hosted OpenAI-compatible LLM services
//! - One-JSON-file-per-proposal output store with existence-based skip logic
//! - In-memory weighted multi-space index (scope/risks text similarity + price preference)

pub mod config;
pub mod error;
pub mod extract;
pub mod index;
pub mod ingest;
pub mod llm;
pub mod pipeline;
pub mod proposal;
pub mod sample;
pub mod store;

pub use config::{Config, LlmServiceConfig};
pub use error::{Error, ProcuraError, Result};
pub use extract::{LlmExtractor, ProposalExtractor};
pub use index::{
    Mode, NumberSpace, ProposalIndex, ProposalQuery, QueryWeights, ScoredProposal,
};
pub use ingest::{LoadedDocument, PdfLoader};
pub use llm::{ChatMessage, LlmClient, MetricsSnapshot, OpenAiClient};
pub use pipeline::{process_documents, ProcessSummary};
pub use proposal::{parse_price, ProposalFields, ProposalRecord};
pub use sample::sample_proposals;
pub use store::JsonStore;

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "procura";

/// Default directory scanned for vendor proposal PDFs
pub const DEFAULT_PROPOSALS_DIR: &str = "data/proposals";

/// Default directory for extracted JSON output files
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Suffix appended to a source file stem to form its output filename
pub const OUTPUT_SUFFIX: &str = "_extracted.json";
