//! The resolver: raw LLM payload in, clean dashboard payload out.
//!
//! Pipeline order is fixed and observable in the output:
//!   1. normalize and clamp the LLM domains and context factors
//!   2. run the heuristic gap-filling rules (a-d)
//!   3. flag low-confidence findings for clinician verification
//!   4. weather/environment disambiguation (may override walking)
//!   5. assemble the top-code panel (LLM list or scorer fallback)

use leo_core::model::{AnalysisResponse, RawAnalysis};
use leo_kb::scorer::CandidateScore;

use crate::{heuristics, normalize, top_codes, weather};

/// Resolve a raw LLM analysis of `text` into the final response. `candidates`
/// is the keyword-scorer output for the same text and feeds the top-code
/// fallback.
pub fn resolve(raw: RawAnalysis, text: &str, candidates: &[CandidateScore]) -> AnalysisResponse {
    let lowered = text.to_lowercase();

    let mut domains = normalize::clean_domains(&raw.domains);
    let mut context_factors = normalize::clean_context_factors(&raw.context_factors);
    let mut summary = raw.summary;

    heuristics::apply(&lowered, &mut domains);
    heuristics::flag_low_confidence(&mut domains);
    weather::apply(&lowered, &mut domains, &mut context_factors, &mut summary);

    let top_icf_codes = top_codes::assemble(&raw.top_icf_codes, candidates);

    tracing::debug!(
        domains = domains.len(),
        context_factors = context_factors.len(),
        top_codes = top_icf_codes.len(),
        "analysis resolved"
    );

    AnalysisResponse {
        domains,
        summary,
        keywords_found: raw.keywords_found,
        context_factors: if context_factors.is_empty() {
            None
        } else {
            Some(context_factors)
        },
        top_icf_codes: if top_icf_codes.is_empty() {
            None
        } else {
            Some(top_icf_codes)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawAnalysis {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn passthrough_when_nothing_fires() {
        let response = resolve(
            raw(json!({
                "domains": [{"code": "b455", "name": "Inspanning", "level": 2, "confidence": 0.8,
                             "evidence": ["kortademig bij traplopen"], "reasoning": "duidelijk benoemd"}],
                "summary": "Inspanningsklachten."
            })),
            "ik word kortademig bij traplopen",
            &[],
        );
        assert_eq!(response.domains.len(), 1);
        assert_eq!(response.summary, "Inspanningsklachten.");
        assert!(response.context_factors.is_none());
    }

    #[test]
    fn heuristics_run_before_low_confidence_flagging() {
        // Rule a synthesizes d450 at 0.58; 0.58 >= 0.55 so no marker. The
        // LLM's own weak finding does get one.
        let response = resolve(
            raw(json!({
                "domains": [{"code": "b152", "level": 1, "confidence": 0.4, "reasoning": "vaag"}],
                "summary": ""
            })),
            "ik ben gisteren gevallen",
            &[],
        );
        let d450 = response.domains.iter().find(|d| d.code == "d450").unwrap();
        assert!(!d450.reasoning.contains("[verify with clinician]"));
        let b152 = response.domains.iter().find(|d| d.code == "b152").unwrap();
        assert!(b152.reasoning.contains("[verify with clinician]"));
    }

    #[test]
    fn weather_override_runs_after_flagging() {
        let response = resolve(
            raw(json!({
                "domains": [{"code": "d450", "name": "Lopen", "level": 1, "confidence": 0.9,
                             "reasoning": "kan niet lopen"}],
                "summary": "Kwam de deur niet uit."
            })),
            "door de sneeuw kon ik niet naar buiten lopen",
            &[],
        );
        let d450 = response.domains.iter().find(|d| d.code == "d450").unwrap();
        assert!(d450.level >= 4);
        assert!(d450.confidence.value() <= 0.55);
        let factors = response.context_factors.unwrap();
        assert_eq!(factors[0].code, "e225");
        assert!(response.summary.contains("d450"));
    }

    #[test]
    fn empty_raw_payload_resolves_to_empty_response() {
        let response = resolve(RawAnalysis::default(), "", &[]);
        assert!(response.domains.is_empty());
        assert!(response.summary.is_empty());
        assert!(response.context_factors.is_none());
        assert!(response.top_icf_codes.is_none());
    }

    #[test]
    fn keywords_found_passes_through_untouched() {
        let response = resolve(
            raw(json!({"domains": [], "summary": "", "keywords_found": ["lopen", "moe"]})),
            "",
            &[],
        );
        assert_eq!(response.keywords_found.unwrap(), vec!["lopen", "moe"]);
    }
}
