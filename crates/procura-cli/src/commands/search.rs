//! Search command

use crate::app::{OutputFormat, SearchArgs};
use crate::output::format_results;
use anyhow::Result;
use procura_core::{
    Config, JsonStore, OpenAiClient, ProposalIndex, ProposalQuery, QueryWeights,
};

pub async fn run(args: SearchArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let output_dir = args.output_dir.unwrap_or_else(|| config.output_dir.clone());

    let store = JsonStore::new(&output_dir);
    let records = store.load_all()?;

    if records.is_empty() {
        anyhow::bail!(
            "No processed proposals in {}. Run 'procura process' first.",
            output_dir.display()
        );
    }

    let scope_text = if args.query.is_empty() {
        None
    } else {
        Some(args.query.join(" "))
    };

    if scope_text.is_none() && args.risks.is_none() && args.price_weight == 0.0 {
        anyhow::bail!("Provide a scope query, --risks text, or a nonzero --price-weight.");
    }

    let client = OpenAiClient::new(config.llm_service.clone())?;
    let index = ProposalIndex::build(records, &client).await?;

    let query = ProposalQuery {
        scope_text,
        risks_text: args.risks,
        weights: QueryWeights {
            scope: args.scope_weight,
            price: args.price_weight,
            risks: args.risks_weight,
        },
        limit: args.limit,
        min_score: args.min_score,
    };

    let results = index.search(&client, &query).await?;
    print!("{}", format_results(&results, format));

    if results.is_empty() {
        eprintln!("No proposals matched above the score threshold.");
    }

    Ok(())
}
