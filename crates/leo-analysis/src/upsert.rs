//! Confidence-gated merge of domain findings.

use leo_core::model::DomainFinding;

/// Insert the candidate if its code is absent; otherwise replace the stored
/// finding only when the candidate's confidence is strictly greater. This
/// lets heuristic rules fill genuine gaps without ever downgrading a
/// stronger LLM-native finding.
pub fn upsert_finding(findings: &mut Vec<DomainFinding>, candidate: DomainFinding) {
    match findings.iter_mut().find(|f| f.code == candidate.code) {
        Some(existing) => {
            if candidate.confidence > existing.confidence {
                *existing = candidate;
            }
        }
        None => findings.push(candidate),
    }
}

/// Whether a finding for the code is already present.
pub fn has_code(findings: &[DomainFinding], code: &str) -> bool {
    findings.iter().any(|f| f.code == code)
}
