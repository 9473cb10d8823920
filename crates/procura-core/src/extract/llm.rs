//! LLM-backed proposal extractor

use super::ProposalExtractor;
use crate::config::LlmServiceConfig;
use crate::error::{ProcuraError, Result};
use crate::ingest::LoadedDocument;
use crate::llm::{ChatMessage, LlmClient, OpenAiClient};
use crate::proposal::ProposalFields;
use async_trait::async_trait;
use std::sync::Arc;

/// Documents beyond this length are truncated head+tail before prompting
const MAX_PROMPT_CHARS: usize = 12000;

/// Proposal extractor using a hosted LLM service
pub struct LlmExtractor {
    client: Arc<dyn LlmClient>,
}

impl LlmExtractor {
    /// Create from LLM client
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// Create from configuration
    pub fn from_config(config: LlmServiceConfig) -> Result<Self> {
        let client = OpenAiClient::new(config)?;
        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let client = OpenAiClient::from_env()?;
        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Build the extraction prompt for a document
    fn build_extraction_prompt(&self, document: &LoadedDocument) -> String {
        let truncated = truncate_content(&document.content, MAX_PROMPT_CHARS);

        format!(
            r#"You are an expert procurement analyst. Analyze this vendor proposal and extract the key information.

Read the entire document carefully and extract:
1. Vendor/Company name
2. Project name/title
3. Total project price (as a number in dollars)
4. Delivery timeline and schedule
5. Project scope and deliverables
6. Risks, challenges, or limitations mentioned

Be thorough - scan the entire document for this information as it may appear anywhere.
For pricing, look for the total project cost, not individual line items.

Output ONLY valid JSON with these exact fields:
{{
  "vendor_name": "name of the vendor/company submitting the proposal",
  "project_name": "name or title of the proposed project",
  "price": 0,
  "delivery_timeline": "timeline, delivery schedule, duration, milestones",
  "scope_summary": "summary of project scope, deliverables, services offered",
  "risks": "identified risks, challenges, limitations, or concerns"
}}

DOCUMENT CONTENT:
{}

JSON:"#,
            truncated
        )
    }

    /// Parse the JSON span out of the model response
    fn parse_extraction_response(&self, response: &str) -> Result<ProposalFields> {
        // Handle markdown code fences and surrounding prose
        let json_str = match (response.find('{'), response.rfind('}')) {
            (Some(start), Some(end)) if end > start => &response[start..=end],
            _ => {
                return Err(ProcuraError::Llm(
                    "No JSON found in LLM response".to_string(),
                ))
            }
        };

        serde_json::from_str(json_str)
            .map_err(|e| ProcuraError::Llm(format!("Failed to parse extraction JSON: {}", e)))
    }
}

#[async_trait]
impl ProposalExtractor for LlmExtractor {
    async fn extract(&self, document: &LoadedDocument) -> Result<ProposalFields> {
        let prompt = self.build_extraction_prompt(document);

        let messages = vec![
            ChatMessage::system(
                "You are a procurement document analyst. Extract structured fields from vendor \
                 proposals and output ONLY valid JSON with no additional text.",
            ),
            ChatMessage::user(prompt),
        ];

        tracing::info!("Extracting fields from {}", document.path.display());
        let response = self.client.chat_completion(messages).await?;
        self.parse_extraction_response(&response)
    }

    fn model_name(&self) -> &str {
        self.client.model_name()
    }
}

/// Truncate long documents, keeping head and tail.
///
/// Totals and risk sections often sit at the end of a proposal, so the tail
/// matters as much as the head.
fn truncate_content(content: &str, max_chars: usize) -> String {
    if content.len() <= max_chars {
        return content.to_string();
    }

    let half = max_chars / 2;
    let mut head_end = half.min(content.len());
    while !content.is_char_boundary(head_end) {
        head_end -= 1;
    }
    let mut tail_start = content.len().saturating_sub(half);
    while !content.is_char_boundary(tail_start) {
        tail_start += 1;
    }

    format!(
        "{}\n\n[... truncated ...]\n\n{}",
        &content[..head_end],
        &content[tail_start..]
    )
}
