//! JSON output formatter

use procura_core::ScoredProposal;

pub fn format_results(results: &[ScoredProposal]) -> String {
    match serde_json::to_string_pretty(results) {
        Ok(json) => format!("{}\n", json),
        Err(e) => format!("{{\"error\": \"{}\"}}\n", e),
    }
}
