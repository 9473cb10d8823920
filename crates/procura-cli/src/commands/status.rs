//! Status command

use crate::app::{OutputFormat, StatusArgs};
use anyhow::Result;
use procura_core::{Config, JsonStore};

pub async fn run(args: StatusArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let output_dir = args.output_dir.unwrap_or_else(|| config.output_dir.clone());

    let store = JsonStore::new(&output_dir);
    let records = store.load_all()?;

    let complete = records.iter().filter(|r| r.is_complete()).count();
    let fallbacks = records.len() - complete;
    let min_price = records
        .iter()
        .map(|r| r.price)
        .fold(f64::INFINITY, f64::min);
    let max_price = records.iter().map(|r| r.price).fold(0.0f64, f64::max);

    match format {
        OutputFormat::Json => {
            let stats = serde_json::json!({
                "output_dir": output_dir.display().to_string(),
                "records": records.len(),
                "complete": complete,
                "fallbacks": fallbacks,
                "vendors": records.iter().map(|r| r.vendor_name.as_str()).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        _ => {
            println!("Output directory: {}", output_dir.display());
            println!("Records:          {}", records.len());
            println!("  Complete:       {}", complete);
            println!("  Fallbacks:      {}", fallbacks);
            if !records.is_empty() {
                println!();
                println!("Price range:      ${:.0} - ${:.0}", min_price, max_price);
                println!("Vendors:");
                for record in &records {
                    println!("  {:>3}. {}", record.id, record.vendor_name);
                }
            }
        }
    }

    Ok(())
}
