//! CSV output formatter

use procura_core::ScoredProposal;

pub fn format_results(results: &[ScoredProposal]) -> String {
    let mut output =
        String::from("id,score,vendor_name,project_name,price,delivery_timeline,source_file\n");

    for r in results {
        output.push_str(&format!(
            "{},{:.4},{},{},{},{},{}\n",
            r.record.id,
            r.score,
            escape_csv(&r.record.vendor_name),
            escape_csv(&r.record.project_name),
            r.record.price,
            escape_csv(&r.record.delivery_timeline),
            escape_csv(&r.record.source_file),
        ));
    }

    output
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape_csv("Acme Corp"), "Acme Corp");
    }

    #[test]
    fn test_escape_comma_and_quote() {
        assert_eq!(escape_csv("6 months, phased"), "\"6 months, phased\"");
        assert_eq!(escape_csv("the \"best\" bid"), "\"the \"\"best\"\" bid\"");
    }
}
