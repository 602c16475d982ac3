//! Lenient mirror of the LLM's JSON response.
//!
//! The LLM output is schema-constrained but not trusted: levels may arrive as
//! floats, confidence as a string, evidence as a scalar. Every field is
//! optional or a raw `serde_json::Value` so that deserialization never fails
//! on semantically sloppy output; the resolver turns this into the clean
//! model with documented defaults.

use serde::Deserialize;
use serde_json::Value;

/// Raw LLM analysis payload, before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAnalysis {
    #[serde(default)]
    pub domains: Vec<RawDomain>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub keywords_found: Option<Vec<String>>,
    #[serde(default)]
    pub context_factors: Option<Vec<RawContextFactor>>,
    #[serde(default)]
    pub top_icf_codes: Option<Vec<RawTopCode>>,
}

/// One proposed domain finding, fields as the LLM emitted them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDomain {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub level: Option<Value>,
    #[serde(default)]
    pub max_level: Option<Value>,
    #[serde(default)]
    pub confidence: Option<Value>,
    #[serde(default)]
    pub evidence: Option<Value>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

/// One proposed context factor, fields as the LLM emitted them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawContextFactor {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub qualifier: Option<Value>,
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub confidence: Option<Value>,
    #[serde(default)]
    pub evidence: Option<Value>,
}

/// One proposed top-code entry, fields as the LLM emitted them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTopCode {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub qualifier: Option<Value>,
    #[serde(default)]
    pub confidence: Option<Value>,
    #[serde(default)]
    pub evidence: Option<Value>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

/// Read a numeric `Value` as f64, falling back when missing or non-numeric.
pub fn value_as_f64(v: &Option<Value>, default: f64) -> f64 {
    v.as_ref().and_then(Value::as_f64).unwrap_or(default)
}

/// Read an evidence `Value` as a string list; anything but an array of
/// strings becomes empty.
pub fn value_as_evidence(v: &Option<Value>) -> Vec<String> {
    match v {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|i| i.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_minimal_payload() {
        let raw: RawAnalysis = serde_json::from_value(json!({
            "domains": [],
            "summary": "geen bijzonderheden"
        }))
        .unwrap();
        assert!(raw.domains.is_empty());
        assert_eq!(raw.summary, "geen bijzonderheden");
    }

    #[test]
    fn tolerates_sloppy_fields() {
        let raw: RawAnalysis = serde_json::from_value(json!({
            "domains": [{
                "code": "d450",
                "level": 2.7,
                "confidence": "hoog",
                "evidence": "lopen"
            }],
            "summary": ""
        }))
        .unwrap();
        let d = &raw.domains[0];
        assert_eq!(value_as_f64(&d.level, 0.0), 2.7);
        // Non-numeric confidence falls back to the default.
        assert_eq!(value_as_f64(&d.confidence, 0.5), 0.5);
        // Scalar evidence is not an array, so it becomes empty.
        assert!(value_as_evidence(&d.evidence).is_empty());
    }

    #[test]
    fn evidence_array_keeps_strings_only() {
        let v = Some(serde_json::json!(["lopen", 3, "rollator"]));
        assert_eq!(value_as_evidence(&v), vec!["lopen", "rollator"]);
    }
}
