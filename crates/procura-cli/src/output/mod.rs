//! Output formatters

pub mod csv;
pub mod json;
pub mod terminal;

use crate::app::OutputFormat;
use procura_core::ScoredProposal;

/// Format scored search results
pub fn format_results(results: &[ScoredProposal], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_results(results),
        OutputFormat::Csv => csv::format_results(results),
        OutputFormat::Cli => terminal::format_results(results),
    }
}

/// Format a dollar amount with thousands separators
pub fn format_price(price: f64) -> String {
    let whole = price.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if whole < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_grouping() {
        assert_eq!(format_price(0.0), "$0");
        assert_eq!(format_price(950.0), "$950");
        assert_eq!(format_price(75000.0), "$75,000");
        assert_eq!(format_price(1200000.4), "$1,200,000");
    }
}
