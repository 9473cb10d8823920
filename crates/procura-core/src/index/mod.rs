//! In-memory weighted multi-space index
//!
//! Mirrors the query surface the records are searched through: two text
//! similarity spaces (scope summary, risks) backed by service embeddings,
//! plus a normalized price preference space. Queries combine the spaces
//! through per-space weights.

use crate::error::{ProcuraError, Result};
use crate::llm::LlmClient;
use crate::proposal::ProposalRecord;
use serde::{Deserialize, Serialize};

/// Price bounds for the proposal price space, in dollars
pub const PRICE_MIN: f64 = 0.0;
pub const PRICE_MAX: f64 = 1_000_000.0;

/// Direction of preference for a numeric space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Higher values score higher
    Maximum,
    /// Lower values score higher
    Minimum,
}

/// Normalized numeric preference space
#[derive(Debug, Clone, Copy)]
pub struct NumberSpace {
    pub min: f64,
    pub max: f64,
    pub mode: Mode,
}

impl NumberSpace {
    pub fn new(min: f64, max: f64, mode: Mode) -> Self {
        Self { min, max, mode }
    }

    /// Score a value into [0, 1], clamped at the bounds
    pub fn score(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        let normalized = ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0);
        match self.mode {
            Mode::Maximum => normalized,
            Mode::Minimum => 1.0 - normalized,
        }
    }
}

/// Per-space weights for a query
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QueryWeights {
    pub scope: f64,
    pub price: f64,
    pub risks: f64,
}

impl Default for QueryWeights {
    fn default() -> Self {
        Self {
            scope: 1.0,
            price: 0.0,
            risks: 0.0,
        }
    }
}

/// A weighted query against the proposal index
#[derive(Debug, Clone, Default)]
pub struct ProposalQuery {
    /// Text describing the project scope or type of work
    pub scope_text: Option<String>,
    /// Text describing risks or concerns to search for
    pub risks_text: Option<String>,
    pub weights: QueryWeights,
    pub limit: usize,
    /// Minimum combined score threshold
    pub min_score: f64,
}

/// A record with its combined and per-space scores
#[derive(Debug, Clone, Serialize)]
pub struct ScoredProposal {
    pub record: ProposalRecord,
    pub score: f64,
    pub scope_score: f64,
    pub price_score: f64,
    pub risks_score: f64,
}

/// In-memory semantic index over a batch of proposal records
pub struct ProposalIndex {
    records: Vec<ProposalRecord>,
    scope_vectors: Vec<Vec<f32>>,
    risk_vectors: Vec<Vec<f32>>,
    price_space: NumberSpace,
}

impl ProposalIndex {
    /// Build the index: embeds scope and risks fields, one batch per space
    pub async fn build(records: Vec<ProposalRecord>, client: &dyn LlmClient) -> Result<Self> {
        let scope_texts: Vec<String> = records.iter().map(|r| r.scope_summary.clone()).collect();
        let risk_texts: Vec<String> = records.iter().map(|r| r.risks.clone()).collect();

        let scope_vectors = client.embed_batch(&scope_texts).await?;
        let risk_vectors = client.embed_batch(&risk_texts).await?;

        if scope_vectors.len() != records.len() || risk_vectors.len() != records.len() {
            return Err(ProcuraError::Index(format!(
                "Embedding count mismatch: {} records, {} scope vectors, {} risk vectors",
                records.len(),
                scope_vectors.len(),
                risk_vectors.len()
            )));
        }

        tracing::info!("Indexed {} proposals", records.len());

        Ok(Self {
            records,
            scope_vectors,
            risk_vectors,
            price_space: NumberSpace::new(PRICE_MIN, PRICE_MAX, Mode::Maximum),
        })
    }

    /// Number of indexed records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the index holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Run a weighted query across the index spaces.
    ///
    /// Each record's score is the weighted sum of its space scores divided
    /// by the total weight applied, so results stay comparable regardless
    /// of weight scale. A text space with zero weight or no query text
    /// contributes nothing and costs no embedding call.
    pub async fn search(
        &self,
        client: &dyn LlmClient,
        query: &ProposalQuery,
    ) -> Result<Vec<ScoredProposal>> {
        let scope_query = match (&query.scope_text, query.weights.scope != 0.0) {
            (Some(text), true) => Some(client.embed(text).await?),
            _ => None,
        };
        let risks_query = match (&query.risks_text, query.weights.risks != 0.0) {
            (Some(text), true) => Some(client.embed(text).await?),
            _ => None,
        };

        let mut total_weight = 0.0;
        if scope_query.is_some() {
            total_weight += query.weights.scope.abs();
        }
        if risks_query.is_some() {
            total_weight += query.weights.risks.abs();
        }
        if query.weights.price != 0.0 {
            total_weight += query.weights.price.abs();
        }

        if total_weight == 0.0 {
            return Err(ProcuraError::InvalidInput(
                "Query applies no weight to any space".to_string(),
            ));
        }

        let mut scored: Vec<ScoredProposal> = self
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let scope_score = scope_query
                    .as_deref()
                    .map(|q| cosine_similarity(q, &self.scope_vectors[i]) as f64)
                    .unwrap_or(0.0);
                let risks_score = risks_query
                    .as_deref()
                    .map(|q| cosine_similarity(q, &self.risk_vectors[i]) as f64)
                    .unwrap_or(0.0);
                let price_score = if query.weights.price != 0.0 {
                    self.price_space.score(record.price)
                } else {
                    0.0
                };

                let score = (query.weights.scope * scope_score
                    + query.weights.risks * risks_score
                    + query.weights.price * price_score)
                    / total_weight;

                ScoredProposal {
                    record: record.clone(),
                    score,
                    scope_score,
                    price_score,
                    risks_score,
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let limit = if query.limit == 0 {
            scored.len()
        } else {
            query.limit
        };

        Ok(scored
            .into_iter()
            .filter(|s| s.score >= query.min_score)
            .take(limit)
            .collect())
    }
}

/// Compute cosine similarity between two embeddings
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::llm::ChatMessage;
    use crate::sample::sample_proposals;
    use async_trait::async_trait;

    /// Deterministic bag-of-words embedder: similar texts share dimensions
    struct MockEmbedder;

    const MOCK_DIMS: usize = 64;

    #[async_trait]
    impl crate::llm::LlmClient for MockEmbedder {
        async fn chat_completion(&self, _messages: Vec<ChatMessage>) -> Result<String> {
            Err(ProcuraError::Llm("mock embedder has no chat".to_string()))
        }

        async fn embed(&self, text: &str) -> Result<Vec<f32>> {
            let mut vector = vec![0.0f32; MOCK_DIMS];
            for word in text.to_lowercase().split_whitespace() {
                use std::collections::hash_map::DefaultHasher;
                use std::hash::{Hash, Hasher};
                let mut hasher = DefaultHasher::new();
                word.hash(&mut hasher);
                vector[(hasher.finish() as usize) % MOCK_DIMS] += 1.0;
            }
            Ok(vector)
        }

        async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            let mut out = Vec::with_capacity(texts.len());
            for text in texts {
                out.push(self.embed(text).await?);
            }
            Ok(out)
        }

        fn embedding_dimensions(&self) -> usize {
            MOCK_DIMS
        }

        fn model_name(&self) -> &str {
            "mock-embedder"
        }
    }

    #[test]
    fn test_cosine_similarity_identical() {
        let a = vec![1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![0.0, 1.0, 0.0];
        assert!(cosine_similarity(&a, &b).abs() < 0.0001);
    }

    #[test]
    fn test_cosine_similarity_mismatched_lengths() {
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_number_space_maximum() {
        let space = NumberSpace::new(0.0, 1_000_000.0, Mode::Maximum);
        assert_eq!(space.score(0.0), 0.0);
        assert_eq!(space.score(500_000.0), 0.5);
        assert_eq!(space.score(1_000_000.0), 1.0);
        assert_eq!(space.score(2_000_000.0), 1.0);
        assert_eq!(space.score(-5.0), 0.0);
    }

    #[test]
    fn test_number_space_minimum() {
        let space = NumberSpace::new(0.0, 100.0, Mode::Minimum);
        assert_eq!(space.score(0.0), 1.0);
        assert_eq!(space.score(100.0), 0.0);
    }

    #[tokio::test]
    async fn test_build_and_scope_search() {
        let client = MockEmbedder;
        let index = ProposalIndex::build(sample_proposals(), &client)
            .await
            .unwrap();
        assert_eq!(index.len(), 5);

        let query = ProposalQuery {
            scope_text: Some("mobile application for iOS and Android".to_string()),
            risks_text: None,
            weights: QueryWeights {
                scope: 1.0,
                price: 0.0,
                risks: 0.0,
            },
            limit: 2,
            min_score: 0.0,
        };

        let results = index.search(&client, &query).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].record.vendor_name, "TechSolutions Inc");
        assert!(results[0].score >= results[1].score);
    }

    #[tokio::test]
    async fn test_risks_search() {
        let client = MockEmbedder;
        let index = ProposalIndex::build(sample_proposals(), &client)
            .await
            .unwrap();

        let query = ProposalQuery {
            scope_text: None,
            risks_text: Some("data migration downtime cost overruns unexpected aws usage".to_string()),
            weights: QueryWeights {
                scope: 0.0,
                price: 0.0,
                risks: 1.0,
            },
            limit: 3,
            min_score: 0.0,
        };

        let results = index.search(&client, &query).await.unwrap();
        assert_eq!(results.len(), 3);
        // CloudFirst's risks mention data migration downtime verbatim
        assert_eq!(results[0].record.vendor_name, "CloudFirst Technologies");
    }

    #[tokio::test]
    async fn test_price_only_search_orders_by_price() {
        let client = MockEmbedder;
        let index = ProposalIndex::build(sample_proposals(), &client)
            .await
            .unwrap();

        let query = ProposalQuery {
            scope_text: None,
            risks_text: None,
            weights: QueryWeights {
                scope: 0.0,
                price: 1.0,
                risks: 0.0,
            },
            limit: 0,
            min_score: 0.0,
        };

        let results = index.search(&client, &query).await.unwrap();
        assert_eq!(results.len(), 5);
        assert_eq!(results[0].record.vendor_name, "AI Innovations Lab");
        let prices: Vec<f64> = results.iter().map(|r| r.record.price).collect();
        let mut sorted = prices.clone();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(prices, sorted);
    }

    #[tokio::test]
    async fn test_zero_weight_query_rejected() {
        let client = MockEmbedder;
        let index = ProposalIndex::build(sample_proposals(), &client)
            .await
            .unwrap();

        let query = ProposalQuery {
            scope_text: None,
            risks_text: None,
            weights: QueryWeights {
                scope: 0.0,
                price: 0.0,
                risks: 0.0,
            },
            limit: 3,
            min_score: 0.0,
        };

        let result = index.search(&client, &query).await;
        assert!(matches!(result, Err(ProcuraError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_min_score_filters() {
        let client = MockEmbedder;
        let index = ProposalIndex::build(sample_proposals(), &client)
            .await
            .unwrap();

        let query = ProposalQuery {
            scope_text: Some("completely unrelated quantum basket weaving".to_string()),
            risks_text: None,
            weights: QueryWeights::default(),
            limit: 5,
            min_score: 0.99,
        };

        let results = index.search(&client, &query).await.unwrap();
        assert!(results.is_empty());
    }
}
