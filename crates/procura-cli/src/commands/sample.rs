//! Sample command
//!
//! Indexes the built-in sample proposals and runs the canned demonstration
//! queries against them. Needs a reachable embedding service; everything
//! else is offline.

use crate::app::{OutputFormat, SampleArgs};
use crate::output::format_results;
use anyhow::Result;
use procura_core::{
    sample_proposals, Config, OpenAiClient, ProposalIndex, ProposalQuery, QueryWeights,
};

/// The demonstration queries: (label, scope text, risks text, weights)
const DEMO_QUERIES: &[(&str, Option<&str>, Option<&str>, QueryWeights)] = &[
    (
        "Searching for 'web development' projects",
        Some("web development website"),
        None,
        QueryWeights {
            scope: 1.0,
            price: 0.0,
            risks: 0.0,
        },
    ),
    (
        "Searching for 'mobile app' projects",
        Some("mobile app development"),
        None,
        QueryWeights {
            scope: 1.0,
            price: 0.0,
            risks: 0.0,
        },
    ),
    (
        "Searching for 'integration' risks",
        None,
        Some("integration compatibility issues"),
        QueryWeights {
            scope: 0.0,
            price: 0.0,
            risks: 1.0,
        },
    ),
    (
        "Searching for 'cloud infrastructure' projects",
        Some("cloud infrastructure migration"),
        None,
        QueryWeights {
            scope: 1.0,
            price: 0.0,
            risks: 0.0,
        },
    ),
    (
        "Searching for 'machine learning' projects",
        Some("machine learning artificial intelligence"),
        None,
        QueryWeights {
            scope: 1.0,
            price: 0.0,
            risks: 0.0,
        },
    ),
];

pub async fn run(args: SampleArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let records = sample_proposals();
    println!("Indexing {} sample vendor proposals...", records.len());

    let client = OpenAiClient::new(config.llm_service.clone())?;
    let index = ProposalIndex::build(records, &client).await?;

    for (i, (label, scope, risks, weights)) in DEMO_QUERIES.iter().enumerate() {
        println!("\n{}. {}:", i + 1, label);

        let query = ProposalQuery {
            scope_text: scope.map(str::to_string),
            risks_text: risks.map(str::to_string),
            weights: *weights,
            limit: args.limit,
            min_score: 0.0,
        };

        let results = index.search(&client, &query).await?;
        print!("{}", format_results(&results, format));
    }

    Ok(())
}
