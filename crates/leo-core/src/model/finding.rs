//! Cleaned, UI-facing analysis types.
//!
//! Everything here has already been through normalization and clamping; the
//! invariants on levels and confidence hold by construction.

use serde::{Deserialize, Serialize};

use crate::constants::{FAC_CODE, FAC_MAX_LEVEL, ICF_MAX_LEVEL};

use super::Confidence;

/// A single ICF domain finding with a severity qualifier.
///
/// `max_level` is 5 only for d450 (the FAC walking scale, where higher means
/// more independent); every other domain uses the standard 0-4 WHO-ICF scale
/// where higher means more problems.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainFinding {
    pub code: String,
    pub name: String,
    pub level: u8,
    pub max_level: u8,
    pub confidence: Confidence,
    pub evidence: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
}

impl DomainFinding {
    /// Construct a finding with the level clamped to the scale of `code`.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        level: u8,
        confidence: Confidence,
    ) -> Self {
        let code = code.into();
        let max_level = max_level_for(&code);
        Self {
            code,
            name: name.into(),
            level: level.min(max_level),
            max_level,
            confidence,
            evidence: Vec::new(),
            reasoning: String::new(),
        }
    }
}

/// The maximum qualifier level for an ICF code: 5 for the FAC walking scale,
/// 4 for everything else.
pub fn max_level_for(code: &str) -> u8 {
    if code == FAC_CODE {
        FAC_MAX_LEVEL
    } else {
        ICF_MAX_LEVEL
    }
}

/// Whether an environmental factor acts as a barrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Barrier,
    PossibleBarrier,
}

/// An ICF environmental factor recorded for the conversation,
/// e.g. weather (e225) acting as a barrier to going outside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextFactor {
    pub code: String,
    pub label: String,
    pub qualifier: u8,
    pub impact: Impact,
    pub confidence: Confidence,
    pub evidence: Vec<String>,
}

/// One entry in the ranked top-10 ICF code panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopIcfCode {
    pub code: String,
    pub label: String,
    pub qualifier: u8,
    pub confidence: Confidence,
    pub evidence: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
}

/// The final payload delivered to the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub domains: Vec<DomainFinding>,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords_found: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_factors: Option<Vec<ContextFactor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_icf_codes: Option<Vec<TopIcfCode>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fac_scale_is_five() {
        assert_eq!(max_level_for("d450"), 5);
        assert_eq!(max_level_for("b152"), 4);
        assert_eq!(max_level_for(""), 4);
    }

    #[test]
    fn new_clamps_level_to_scale() {
        let f = DomainFinding::new("b152", "Emotioneel", 7, Confidence::new(0.6));
        assert_eq!(f.level, 4);
        let f = DomainFinding::new("d450", "Lopen", 7, Confidence::new(0.6));
        assert_eq!(f.level, 5);
    }

    #[test]
    fn impact_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Impact::PossibleBarrier).unwrap(),
            "\"possible_barrier\""
        );
    }
}
