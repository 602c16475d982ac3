//! Assembly of the ranked top-ICF-code panel.
//!
//! The LLM's own list is preferred when it produced one; otherwise the panel
//! is synthesized from the keyword-scorer candidates so the dashboard never
//! shows an empty panel for a non-trivial transcript.

use leo_core::constants::{
    DEFAULT_CONFIDENCE, FAC_CODE, KB_FALLBACK_FAC_QUALIFIER, KB_FALLBACK_POOL,
    KB_FALLBACK_QUALIFIER, KB_FALLBACK_REASONING, TOP_CODE_CAP,
};
use leo_core::model::finding::max_level_for;
use leo_core::model::{
    raw::{value_as_evidence, value_as_f64},
    Confidence, RawTopCode, TopIcfCode,
};
use leo_kb::scorer::CandidateScore;

use crate::heuristics::flag_low_confidence_top_codes;
use crate::normalize::{display_name, normalize_code};

/// Build the final top-code panel: clean the LLM's entries when present,
/// otherwise fall back to the scorer candidates. Either way the low-confidence
/// marker rule runs last.
pub fn assemble(raw: &Option<Vec<RawTopCode>>, candidates: &[CandidateScore]) -> Vec<TopIcfCode> {
    let mut entries = clean_raw(raw);
    if entries.is_empty() {
        entries = from_candidates(candidates);
        if !entries.is_empty() {
            tracing::debug!(count = entries.len(), "top codes taken from keyword scorer");
        }
    }
    flag_low_confidence_top_codes(&mut entries);
    entries
}

/// Clean the LLM-proposed list: codes normalized, empty codes dropped,
/// qualifiers clamped to the code's scale, confidence clamped with the usual
/// default, capped at the panel size.
fn clean_raw(raw: &Option<Vec<RawTopCode>>) -> Vec<TopIcfCode> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.iter()
        .filter_map(|entry| {
            let code = normalize_code(entry.code.as_deref().unwrap_or(""));
            if code.is_empty() {
                return None;
            }
            let max = max_level_for(&code);
            Some(TopIcfCode {
                label: display_name(&code, entry.label.as_deref()),
                qualifier: value_as_f64(&entry.qualifier, 0.0).clamp(0.0, f64::from(max)) as u8,
                confidence: Confidence::new(value_as_f64(&entry.confidence, DEFAULT_CONFIDENCE)),
                evidence: value_as_evidence(&entry.evidence),
                reasoning: entry.reasoning.clone().unwrap_or_default(),
                code,
            })
        })
        .take(TOP_CODE_CAP)
        .collect()
}

/// Synthesize panel entries from the scorer candidates. The candidate list is
/// already ranked; the confidence of an entry is the candidate's score, and
/// its evidence the matched keywords.
fn from_candidates(candidates: &[CandidateScore]) -> Vec<TopIcfCode> {
    candidates
        .iter()
        .take(KB_FALLBACK_POOL)
        .take(TOP_CODE_CAP)
        .map(|candidate| TopIcfCode {
            code: candidate.code.to_string(),
            label: candidate.label.to_string(),
            qualifier: if candidate.code == FAC_CODE {
                KB_FALLBACK_FAC_QUALIFIER
            } else {
                KB_FALLBACK_QUALIFIER
            },
            confidence: Confidence::new(candidate.score),
            evidence: candidate.matched_keywords.clone(),
            reasoning: KB_FALLBACK_REASONING.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_top(code: &str, qualifier: f64, confidence: f64) -> RawTopCode {
        RawTopCode {
            code: Some(code.to_string()),
            qualifier: Some(json!(qualifier)),
            confidence: Some(json!(confidence)),
            ..RawTopCode::default()
        }
    }

    fn candidate(code: &str, label: &str, score: f64) -> CandidateScore {
        CandidateScore {
            code: code.to_string(),
            label: label.to_string(),
            score,
            matched_keywords: vec!["lopen".to_string()],
        }
    }

    #[test]
    fn llm_entries_win_over_candidates() {
        let raw = Some(vec![raw_top("b152", 1.0, 0.7)]);
        let entries = assemble(&raw, &[candidate("d450", "Walking", 0.4)]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].code, "b152");
    }

    #[test]
    fn empty_llm_list_falls_back_to_candidates() {
        let entries = assemble(&Some(Vec::new()), &[candidate("d450", "Walking", 0.37)]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].code, "d450");
        assert_eq!(entries[0].qualifier, 2);
        assert!((entries[0].confidence.value() - 0.37).abs() < 1e-9);
        assert_eq!(entries[0].reasoning, "Knowledgebase keyword matching");
    }

    #[test]
    fn non_walking_fallback_gets_mild_qualifier() {
        let entries = assemble(&None, &[candidate("b152", "Emotional functions", 0.2)]);
        assert_eq!(entries[0].qualifier, 1);
    }

    #[test]
    fn qualifier_clamps_per_scale() {
        let raw = Some(vec![raw_top("d450", 9.0, 0.7), raw_top("b152", 9.0, 0.7)]);
        let entries = assemble(&raw, &[]);
        assert_eq!(entries[0].qualifier, 5);
        assert_eq!(entries[1].qualifier, 4);
    }

    #[test]
    fn panel_caps_at_ten() {
        let raw: Vec<RawTopCode> = (0..15).map(|i| raw_top(&format!("b{i:03}"), 1.0, 0.7)).collect();
        assert_eq!(assemble(&Some(raw), &[]).len(), 10);

        let candidates: Vec<CandidateScore> = (0..15)
            .map(|i| candidate(&format!("b{i:03}"), "x", 0.3))
            .collect();
        assert_eq!(assemble(&None, &candidates).len(), 10);
    }

    #[test]
    fn low_confidence_fallback_is_flagged() {
        let entries = assemble(&None, &[candidate("b152", "Emotional functions", 0.2)]);
        assert!(entries[0].reasoning.contains("[verify with clinician]"));
    }

    #[test]
    fn work_codes_normalize_in_panel() {
        let raw = Some(vec![raw_top("d845", 1.0, 0.7)]);
        let entries = assemble(&raw, &[]);
        assert_eq!(entries[0].code, "d840");
    }
}
