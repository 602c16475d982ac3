//! Code normalization and range clamping of the raw LLM payload.

use leo_core::constants::{DEFAULT_CONFIDENCE, WORK_CODE, WORK_CODE_PREFIXES};
use leo_core::domains::domain_by_code;
use leo_core::model::finding::max_level_for;
use leo_core::model::{
    raw::{value_as_evidence, value_as_f64},
    Confidence, ContextFactor, DomainFinding, Impact, RawContextFactor, RawDomain,
};
use leo_kb::index::entry_by_code;

use crate::upsert::upsert_finding;

/// Collapse the work/employment chapter to its canonical bucket: any code
/// starting with d840/d841/d842/d845/d850/d859 is rewritten to d840,
/// whichever sub-code the LLM emitted. Other codes pass through trimmed.
pub fn normalize_code(code: &str) -> String {
    let trimmed = code.trim();
    if WORK_CODE_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
        WORK_CODE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Turn the raw LLM domains into clean findings: codes normalized, empty
/// codes dropped, levels clamped to the code's scale, confidence clamped to
/// [0,1] defaulting to 0.5, evidence defaulting to empty. Duplicate codes
/// (possible after the work-chapter collapse) merge by keeping the
/// higher-confidence occurrence.
pub fn clean_domains(raw: &[RawDomain]) -> Vec<DomainFinding> {
    let mut findings: Vec<DomainFinding> = Vec::new();

    for domain in raw {
        let code = normalize_code(domain.code.as_deref().unwrap_or(""));
        if code.is_empty() {
            continue;
        }

        let max_level = max_level_for(&code);
        let level = value_as_f64(&domain.level, 0.0).clamp(0.0, f64::from(max_level)) as u8;
        let confidence = Confidence::new(value_as_f64(&domain.confidence, DEFAULT_CONFIDENCE));

        let finding = DomainFinding {
            name: display_name(&code, domain.name.as_deref()),
            evidence: value_as_evidence(&domain.evidence),
            reasoning: domain.reasoning.clone().unwrap_or_default(),
            ..DomainFinding::new(code, "", level, confidence)
        };

        upsert_finding(&mut findings, finding);
    }

    findings
}

/// Clean the raw LLM context factors; qualifier clamped to 0-4, unknown
/// impact strings downgrade to a possible barrier.
pub fn clean_context_factors(raw: &Option<Vec<RawContextFactor>>) -> Vec<ContextFactor> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.iter()
        .filter_map(|factor| {
            let code = factor.code.as_deref().unwrap_or("").trim().to_string();
            if code.is_empty() {
                return None;
            }
            Some(ContextFactor {
                label: factor.label.clone().unwrap_or_else(|| code.clone()),
                qualifier: value_as_f64(&factor.qualifier, 0.0).clamp(0.0, 4.0) as u8,
                impact: match factor.impact.as_deref() {
                    Some("barrier") => Impact::Barrier,
                    _ => Impact::PossibleBarrier,
                },
                confidence: Confidence::new(value_as_f64(
                    &factor.confidence,
                    DEFAULT_CONFIDENCE,
                )),
                evidence: value_as_evidence(&factor.evidence),
                code,
            })
        })
        .collect()
}

/// Best display name for a code: the LLM's name when given, otherwise the
/// dashboard domain table, otherwise the knowledge index label, otherwise
/// the code itself.
pub fn display_name(code: &str, llm_name: Option<&str>) -> String {
    if let Some(name) = llm_name {
        if !name.trim().is_empty() {
            return name.trim().to_string();
        }
    }
    if let Some(domain) = domain_by_code(code) {
        return domain.name.to_string();
    }
    if let Some(entry) = entry_by_code(code) {
        return entry.label.to_string();
    }
    code.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_domain(code: &str, level: f64, confidence: f64) -> RawDomain {
        RawDomain {
            code: Some(code.to_string()),
            level: Some(json!(level)),
            confidence: Some(json!(confidence)),
            ..RawDomain::default()
        }
    }

    #[test]
    fn work_chapter_collapses() {
        assert_eq!(normalize_code("d845"), "d840");
        assert_eq!(normalize_code("d8451"), "d840");
        assert_eq!(normalize_code("d859"), "d840");
        assert_eq!(normalize_code("d450"), "d450");
    }

    #[test]
    fn empty_codes_are_dropped() {
        let cleaned = clean_domains(&[RawDomain::default(), raw_domain("b152", 1.0, 0.7)]);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].code, "b152");
    }

    #[test]
    fn levels_clamp_to_scale() {
        let cleaned = clean_domains(&[raw_domain("b152", 9.0, 0.7), raw_domain("d450", 9.0, 0.7)]);
        assert_eq!(cleaned[0].level, 4);
        assert_eq!(cleaned[0].max_level, 4);
        assert_eq!(cleaned[1].level, 5);
        assert_eq!(cleaned[1].max_level, 5);
    }

    #[test]
    fn missing_confidence_defaults() {
        let raw = RawDomain {
            code: Some("b455".to_string()),
            ..RawDomain::default()
        };
        let cleaned = clean_domains(&[raw]);
        assert_eq!(cleaned[0].confidence.value(), 0.5);
        assert!(cleaned[0].evidence.is_empty());
    }

    #[test]
    fn collapsed_duplicates_keep_higher_confidence() {
        let cleaned = clean_domains(&[raw_domain("d840", 1.0, 0.4), raw_domain("d845", 2.0, 0.8)]);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].code, "d840");
        assert_eq!(cleaned[0].level, 2);
        assert_eq!(cleaned[0].confidence.value(), 0.8);
    }

    #[test]
    fn name_falls_back_to_domain_table() {
        assert_eq!(display_name("d450", None), "Lopen");
        assert_eq!(display_name("d450", Some("Walking")), "Walking");
        assert_eq!(display_name("b114", None), "Orientation functions");
        assert_eq!(display_name("x999", None), "x999");
    }
}
