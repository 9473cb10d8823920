//! Process command

use crate::app::ProcessArgs;
use anyhow::Result;
use procura_core::{process_documents, Config, JsonStore, LlmExtractor, PdfLoader};

pub async fn run(args: ProcessArgs, config: &Config) -> Result<()> {
    let proposals_dir = args
        .proposals_dir
        .unwrap_or_else(|| config.proposals_dir.clone());
    let output_dir = args.output_dir.unwrap_or_else(|| config.output_dir.clone());
    let pattern = args.pattern.unwrap_or_else(|| config.pattern.clone());

    config.llm_service.require_credentials()?;

    let loader = PdfLoader::new();
    let documents = loader.load_directory(&proposals_dir, &pattern)?;

    if documents.is_empty() {
        println!("No PDF files found in {}", proposals_dir.display());
        println!("Place vendor proposal PDFs there and rerun.");
        return Ok(());
    }

    let store = JsonStore::new(output_dir);
    let extractor = LlmExtractor::from_config(config.llm_service.clone())?;

    let (records, summary) = process_documents(&documents, &store, &extractor).await?;

    println!("Processing summary:");
    println!("  Files found:         {}", summary.found);
    println!("  Newly extracted:     {}", summary.extracted);
    println!("  Skipped (cached):    {}", summary.skipped);
    println!("  Extraction failures: {}", summary.failed);
    println!("  Records available:   {}", records.len());

    Ok(())
}
