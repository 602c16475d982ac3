//! Deterministic heuristic rules layered on top of the LLM findings.
//!
//! Applied in a fixed order, each conditioned on keyword presence in the
//! lower-cased full text. Rules only fill gaps: a synthesized finding goes
//! through the confidence-gated upsert and a rule never fires when a finding
//! for its code already exists.
//!
//! Confidence values are calibration constants (see `leo_core::constants`).

use leo_core::constants::{
    ANXIETY_B152_CONFIDENCE, ANXIETY_B152_LEVEL, EMOTION_CODE, FAC_CODE, FALL_D450_CONFIDENCE,
    FALL_D450_LEVEL, VAGUE_B152_LEVEL, VAGUE_COOCCURRENCE_CONFIDENCE, VAGUE_D450_LEVEL,
    VERIFY_MARKER,
};
use leo_core::model::{Confidence, DomainFinding, TopIcfCode};

use crate::normalize::display_name;
use crate::signals::{
    any_present, matched_terms, ANXIETY_TERMS, FALL_TERMS, FEAR_TERMS, VAGUE_TERMS, WALKING_TERMS,
};
use crate::upsert::{has_code, upsert_finding};

/// Run rules a-d against the lower-cased text.
pub fn apply(lowered_text: &str, findings: &mut Vec<DomainFinding>) {
    infer_walking_from_fall(lowered_text, findings);
    infer_emotion_from_anxiety(lowered_text, findings);
    infer_emotion_from_vague_walking(lowered_text, findings);
    infer_walking_from_vague_fear(lowered_text, findings);
}

/// Rule a: falling or fear-of-falling terms without an existing walking
/// finding imply a probable walking limitation.
fn infer_walking_from_fall(lowered_text: &str, findings: &mut Vec<DomainFinding>) {
    if !any_present(lowered_text, FALL_TERMS) || has_code(findings, FAC_CODE) {
        return;
    }

    let mut finding = DomainFinding::new(
        FAC_CODE,
        display_name(FAC_CODE, None),
        FALL_D450_LEVEL,
        Confidence::new(FALL_D450_CONFIDENCE),
    );
    finding.evidence = matched_terms(lowered_text, FALL_TERMS);
    finding.reasoning =
        "Valincident of valangst genoemd; loopvermogen vermoedelijk beperkt.".to_string();
    tracing::debug!("heuristic: fall terms imply {FAC_CODE}");
    upsert_finding(findings, finding);
}

/// Rule b: tension/fear/anxiety terms without an existing emotional-functions
/// finding imply a mild emotional finding.
fn infer_emotion_from_anxiety(lowered_text: &str, findings: &mut Vec<DomainFinding>) {
    if !any_present(lowered_text, ANXIETY_TERMS) || has_code(findings, EMOTION_CODE) {
        return;
    }

    let mut finding = DomainFinding::new(
        EMOTION_CODE,
        display_name(EMOTION_CODE, None),
        ANXIETY_B152_LEVEL,
        Confidence::new(ANXIETY_B152_CONFIDENCE),
    );
    finding.evidence = matched_terms(lowered_text, ANXIETY_TERMS);
    finding.reasoning = "Spanning of angst benoemd in het gesprek.".to_string();
    tracing::debug!("heuristic: anxiety terms imply {EMOTION_CODE}");
    upsert_finding(findings, finding);
}

/// Rule c: a vague complaint co-occurring with walking talk, without an
/// emotional-functions finding, is linked as a possible emotional component.
fn infer_emotion_from_vague_walking(lowered_text: &str, findings: &mut Vec<DomainFinding>) {
    if !any_present(lowered_text, VAGUE_TERMS)
        || !any_present(lowered_text, WALKING_TERMS)
        || has_code(findings, EMOTION_CODE)
    {
        return;
    }

    let mut finding = DomainFinding::new(
        EMOTION_CODE,
        display_name(EMOTION_CODE, None),
        VAGUE_B152_LEVEL,
        Confidence::new(VAGUE_COOCCURRENCE_CONFIDENCE),
    );
    finding.evidence = matched_terms(lowered_text, VAGUE_TERMS);
    finding.reasoning =
        "Vage klacht samen met lopen genoemd; mogelijke emotionele component (co-occurrentie)."
            .to_string();
    tracing::debug!("heuristic: vague complaint + walking imply {EMOTION_CODE}");
    upsert_finding(findings, finding);
}

/// Rule d: a vague complaint co-occurring with fear, without a walking
/// finding, is linked as a possible walking limitation.
fn infer_walking_from_vague_fear(lowered_text: &str, findings: &mut Vec<DomainFinding>) {
    if !any_present(lowered_text, VAGUE_TERMS)
        || !any_present(lowered_text, FEAR_TERMS)
        || has_code(findings, FAC_CODE)
    {
        return;
    }

    let mut finding = DomainFinding::new(
        FAC_CODE,
        display_name(FAC_CODE, None),
        VAGUE_D450_LEVEL,
        Confidence::new(VAGUE_COOCCURRENCE_CONFIDENCE),
    );
    finding.evidence = matched_terms(lowered_text, FEAR_TERMS);
    finding.reasoning =
        "Vage klacht samen met angst genoemd; loopvermogen mogelijk beperkt (co-occurrentie)."
            .to_string();
    tracing::debug!("heuristic: vague complaint + fear imply {FAC_CODE}");
    upsert_finding(findings, finding);
}

/// Rule e: every finding below the verification cutoff gets the literal
/// clinician marker appended to its reasoning, exactly once.
pub fn flag_low_confidence(findings: &mut [DomainFinding]) {
    for finding in findings {
        if finding.confidence.needs_verification() {
            finding.reasoning = with_verify_marker(&finding.reasoning);
        }
    }
}

/// The same marker rule for top-code entries.
pub fn flag_low_confidence_top_codes(entries: &mut [TopIcfCode]) {
    for entry in entries {
        if entry.confidence.needs_verification() {
            entry.reasoning = with_verify_marker(&entry.reasoning);
        }
    }
}

/// Append the clinician-verification marker unless already present
/// (idempotent).
fn with_verify_marker(reasoning: &str) -> String {
    if reasoning.contains(VERIFY_MARKER) {
        return reasoning.to_string();
    }
    if reasoning.is_empty() {
        VERIFY_MARKER.to_string()
    } else {
        format!("{reasoning} {VERIFY_MARKER}")
    }
}
