//! Proposal record model
//!
//! The single structured entity in the system: one record per vendor
//! proposal, created at extraction time and never mutated afterwards.

use crate::error::Result;
use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel value written into text fields when extraction fails
pub const UNABLE_TO_EXTRACT: &str = "Unable to extract";

/// Fields produced by the language model for one proposal document.
///
/// Prices in vendor documents are free text ("$75,000", "75000 USD"), so
/// deserialization accepts either a JSON number or a string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProposalFields {
    /// Name of the vendor/company submitting the proposal
    pub vendor_name: String,
    /// Name or title of the proposed project
    pub project_name: String,
    /// Total project price in dollars
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    /// Project timeline, delivery schedule, duration, milestones
    pub delivery_timeline: String,
    /// Summary of project scope, deliverables, services offered
    pub scope_summary: String,
    /// Identified risks, challenges, limitations, or concerns
    pub risks: String,
}

/// A fully extracted proposal, as persisted and indexed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProposalRecord {
    /// 1-based position within the processing batch
    pub id: u64,
    pub vendor_name: String,
    pub project_name: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    pub delivery_timeline: String,
    pub scope_summary: String,
    pub risks: String,
    /// Originating PDF path
    pub source_file: String,
    /// RFC 3339 timestamp, set at extraction time
    pub processed_at: String,
}

impl ProposalRecord {
    /// Build a record from extracted fields
    pub fn from_fields(id: u64, fields: ProposalFields, source_file: String) -> Self {
        Self {
            id,
            vendor_name: fields.vendor_name,
            project_name: fields.project_name,
            price: fields.price,
            delivery_timeline: fields.delivery_timeline,
            scope_summary: fields.scope_summary,
            risks: fields.risks,
            source_file,
            processed_at: Utc::now().to_rfc3339(),
        }
    }

    /// Sentinel record substituted when extraction fails.
    ///
    /// The vendor name falls back to the filename-derived hint; every other
    /// text field carries the extraction sentinel.
    pub fn fallback(id: u64, vendor_hint: &str, source_file: String) -> Self {
        Self {
            id,
            vendor_name: vendor_hint.to_string(),
            project_name: UNABLE_TO_EXTRACT.to_string(),
            price: 0.0,
            delivery_timeline: UNABLE_TO_EXTRACT.to_string(),
            scope_summary: UNABLE_TO_EXTRACT.to_string(),
            risks: UNABLE_TO_EXTRACT.to_string(),
            source_file,
            processed_at: Utc::now().to_rfc3339(),
        }
    }

    /// True when every text field carries extracted content
    pub fn is_complete(&self) -> bool {
        !self.vendor_name.is_empty()
            && !self.project_name.is_empty()
            && self.project_name != UNABLE_TO_EXTRACT
            && self.delivery_timeline != UNABLE_TO_EXTRACT
            && self.scope_summary != UNABLE_TO_EXTRACT
            && self.risks != UNABLE_TO_EXTRACT
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| e.into())
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| e.into())
    }
}

lazy_static! {
    /// Matches the numeric portion of a free-text price: "$75,000.50", "USD 1200"
    static ref PRICE_RE: Regex = Regex::new(r"-?\d[\d,]*(?:\.\d+)?").unwrap();
}

/// Parse a free-text price string into dollars.
///
/// Strips currency symbols, labels and thousands separators. Returns `None`
/// when no numeric portion is present.
pub fn parse_price(text: &str) -> Option<f64> {
    let m = PRICE_RE.find(text)?;
    m.as_str().replace(',', "").parse::<f64>().ok()
}

fn deserialize_price<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PriceValue {
        Number(f64),
        Text(String),
    }

    match PriceValue::deserialize(deserializer)? {
        PriceValue::Number(n) => Ok(n),
        PriceValue::Text(s) => parse_price(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("unparseable price value: {:?}", s))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_plain() {
        assert_eq!(parse_price("75000"), Some(75000.0));
        assert_eq!(parse_price("75000.50"), Some(75000.5));
    }

    #[test]
    fn test_parse_price_formatted() {
        assert_eq!(parse_price("$75,000"), Some(75000.0));
        assert_eq!(parse_price("USD 1,200,000.25"), Some(1200000.25));
        assert_eq!(parse_price("Total cost: $45,000 (fixed)"), Some(45000.0));
    }

    #[test]
    fn test_parse_price_missing() {
        assert_eq!(parse_price("to be determined"), None);
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn test_fields_deserialize_numeric_price() {
        let json = r#"{
            "vendor_name": "Acme Corp",
            "project_name": "Website",
            "price": 75000,
            "delivery_timeline": "6 months",
            "scope_summary": "Full-stack build",
            "risks": "Scope creep"
        }"#;
        let fields: ProposalFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields.price, 75000.0);
    }

    #[test]
    fn test_fields_deserialize_string_price() {
        let json = r#"{
            "vendor_name": "Acme Corp",
            "project_name": "Website",
            "price": "$75,000",
            "delivery_timeline": "6 months",
            "scope_summary": "Full-stack build",
            "risks": "Scope creep"
        }"#;
        let fields: ProposalFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields.price, 75000.0);
    }

    #[test]
    fn test_fields_deserialize_unparseable_price() {
        let json = r#"{
            "vendor_name": "Acme Corp",
            "project_name": "Website",
            "price": "call us",
            "delivery_timeline": "6 months",
            "scope_summary": "Full-stack build",
            "risks": "Scope creep"
        }"#;
        assert!(serde_json::from_str::<ProposalFields>(json).is_err());
    }

    #[test]
    fn test_fallback_record() {
        let record = ProposalRecord::fallback(3, "Acme Corp", "acme.pdf".to_string());
        assert_eq!(record.id, 3);
        assert_eq!(record.vendor_name, "Acme Corp");
        assert_eq!(record.project_name, UNABLE_TO_EXTRACT);
        assert_eq!(record.price, 0.0);
        assert_eq!(record.risks, UNABLE_TO_EXTRACT);
        assert!(!record.is_complete());
    }

    #[test]
    fn test_record_json_roundtrip() {
        let fields = ProposalFields {
            vendor_name: "Acme Corp".to_string(),
            project_name: "Website".to_string(),
            price: 75000.0,
            delivery_timeline: "6 months".to_string(),
            scope_summary: "Full-stack build".to_string(),
            risks: "Scope creep".to_string(),
        };
        let record = ProposalRecord::from_fields(1, fields, "acme.pdf".to_string());
        assert!(record.is_complete());

        let json = record.to_json().unwrap();
        let parsed = ProposalRecord::from_json(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
