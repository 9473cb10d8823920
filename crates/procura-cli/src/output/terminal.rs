//! Terminal output formatter

use super::format_price;
use procura_core::ScoredProposal;

pub fn format_results(results: &[ScoredProposal]) -> String {
    if results.is_empty() {
        return String::new();
    }

    let mut output = String::new();

    for result in results {
        let score_pct = (result.score * 100.0).round() as i64;
        output.push_str(&format!(
            "{:>4}% {} - {} ({})\n",
            score_pct,
            result.record.vendor_name,
            result.record.project_name,
            format_price(result.record.price),
        ));

        let scope = truncate(&result.record.scope_summary, 100);
        output.push_str(&format!("      {}\n", scope));
    }

    output
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}
