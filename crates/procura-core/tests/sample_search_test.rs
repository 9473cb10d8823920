//! Integration test for the sample-mode pipeline
//!
//! Exercises the full offline flow the demo mode runs: built-in sample
//! records, index build, and the weighted queries from the original demo
//! suite, using a deterministic embedder double.

use async_trait::async_trait;
use procura_core::{
    ChatMessage, LlmClient, ProposalIndex, ProposalQuery, QueryWeights, Result,
};

const DIMS: usize = 128;

/// Bag-of-words embedder: deterministic, shared dimensions for shared words
struct BagOfWordsEmbedder;

#[async_trait]
impl LlmClient for BagOfWordsEmbedder {
    async fn chat_completion(&self, _messages: Vec<ChatMessage>) -> Result<String> {
        Err(procura_core::ProcuraError::Llm(
            "no chat in embedder double".to_string(),
        ))
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut vector = vec![0.0f32; DIMS];
        for word in text.to_lowercase().split_whitespace() {
            let mut hasher = DefaultHasher::new();
            word.hash(&mut hasher);
            vector[(hasher.finish() as usize) % DIMS] += 1.0;
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
        DIMS
    }

    fn model_name(&self) -> &str {
        "bag-of-words"
    }
}

fn scope_query(text: &str, limit: usize) -> ProposalQuery {
    ProposalQuery {
        scope_text: Some(text.to_string()),
        risks_text: None,
        weights: QueryWeights {
            scope: 1.0,
            price: 0.0,
            risks: 0.0,
        },
        limit,
        min_score: 0.0,
    }
}

#[tokio::test]
async fn sample_records_have_all_required_fields() {
    for record in procura_core::sample_proposals() {
        assert!(record.is_complete());
        assert!(record.price > 0.0);
        assert!(!record.source_file.is_empty());
        assert!(!record.processed_at.is_empty());
    }
}

#[tokio::test]
async fn sample_demo_queries_rank_expected_vendors_first() {
    let client = BagOfWordsEmbedder;
    let index = ProposalIndex::build(procura_core::sample_proposals(), &client)
        .await
        .unwrap();

    let cases = [
        (
            "e-commerce platform with react payment processing",
            "Acme Corp",
        ),
        (
            "native mobile application for ios devices",
            "TechSolutions Inc",
        ),
        (
            "cloud infrastructure migration to aws",
            "CloudFirst Technologies",
        ),
        (
            "custom machine learning platform for predictive analytics",
            "AI Innovations Lab",
        ),
    ];

    for (query_text, expected_vendor) in cases {
        let results = index.search(&client, &scope_query(query_text, 2)).await.unwrap();
        assert_eq!(
            results[0].record.vendor_name, expected_vendor,
            "query {:?} ranked {} first",
            query_text, results[0].record.vendor_name
        );
    }
}

#[tokio::test]
async fn risks_query_finds_integration_concerns() {
    let client = BagOfWordsEmbedder;
    let index = ProposalIndex::build(procura_core::sample_proposals(), &client)
        .await
        .unwrap();

    let query = ProposalQuery {
        scope_text: None,
        risks_text: Some("integration compatibility issues".to_string()),
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
    for result in &results {
        assert!(result.risks_score > 0.0);
    }
}
