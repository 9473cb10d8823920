//! Configuration management

use crate::error::{ProcuraError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned for vendor proposal PDFs
    #[serde(default = "default_proposals_dir")]
    pub proposals_dir: PathBuf,

    /// Directory where extracted JSON files are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Glob pattern for PDFs to pick up, relative to proposals_dir
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// LLM service configuration
    #[serde(default)]
    pub llm_service: LlmServiceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proposals_dir: default_proposals_dir(),
            output_dir: default_output_dir(),
            pattern: default_pattern(),
            llm_service: LlmServiceConfig::default(),
        }
    }
}

/// LLM service configuration for hosted extraction and embeddings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmServiceConfig {
    /// Base URL of the LLM service for chat/completions
    pub url: String,

    /// Model name for chat completions (proposal field extraction)
    #[serde(default = "default_chat_model")]
    pub model: String,

    /// Base URL for embeddings service (can be different from LLM URL)
    #[serde(default)]
    pub embedding_url: Option<String>,

    /// Model name for embeddings
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,

    /// Embedding dimensions
    #[serde(default)]
    pub embedding_dimensions: Option<usize>,

    /// API key (required for hosted services, optional for self-hosted)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl LlmServiceConfig {
    /// Get the embeddings URL (falls back to main URL if not specified)
    pub fn embeddings_url(&self) -> &str {
        self.embedding_url.as_deref().unwrap_or(&self.url)
    }

    /// Validate that a credential is present when one is needed.
    ///
    /// Self-hosted OpenAI-compatible endpoints run keyless; the default
    /// hosted endpoint does not.
    pub fn require_credentials(&self) -> Result<()> {
        if self.api_key.is_none() && self.url == default_url() {
            return Err(ProcuraError::Config(
                "PROCURA_LLM_API_KEY is not set. The hosted LLM endpoint requires a credential; \
                 set the key or point PROCURA_LLM_URL at a self-hosted service."
                    .to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LlmServiceConfig {
    fn default() -> Self {
        Self {
            url: std::env::var("PROCURA_LLM_URL").unwrap_or_else(|_| default_url()),
            model: default_chat_model(),
            embedding_url: std::env::var("PROCURA_EMBEDDING_URL").ok(),
            embedding_model: default_embedding_model(),
            embedding_dimensions: std::env::var("PROCURA_EMBEDDING_DIMS")
                .ok()
                .and_then(|s| s.parse().ok()),
            api_key: std::env::var("PROCURA_LLM_API_KEY").ok(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_chat_model() -> String {
    std::env::var("PROCURA_LLM_MODEL").unwrap_or_else(|_| "gpt-4o".to_string())
}

fn default_embedding_model() -> String {
    std::env::var("PROCURA_EMBEDDING_MODEL")
        .unwrap_or_else(|_| "sentence-transformers/all-MiniLM-L6-v2".to_string())
}

fn default_timeout() -> u64 {
    std::env::var("PROCURA_LLM_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(60)
}

fn default_proposals_dir() -> PathBuf {
    PathBuf::from(crate::DEFAULT_PROPOSALS_DIR)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(crate::DEFAULT_OUTPUT_DIR)
}

fn default_pattern() -> String {
    "**/*.pdf".to_string()
}

impl Config {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to default path
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }
}
