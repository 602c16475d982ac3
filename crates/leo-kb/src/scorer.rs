//! Knowledge-base candidate scorer.
//!
//! Scans free text against the compiled keyword index and produces a ranked
//! candidate list used to enrich the LLM prompt. Fully deterministic: for a
//! fixed text and index the output is identical across runs.

use std::collections::HashSet;

use leo_core::constants::{
    LONG_KEYWORD_INCREMENT, LONG_KEYWORD_LEN, MATCHED_KEYWORD_CAP, MIN_TOKEN_LEN,
    PHRASE_INCREMENT, QUALIFY_THRESHOLD, RELATED_BOOST, SCORE_CAP, SHORT_KEYWORD_INCREMENT,
};

use crate::index::{IcfKnowledgeEntry, KB_INDEX};
use crate::tokenizer::token_set;

/// One scored ICF candidate. Ephemeral, recomputed per request.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateScore {
    pub code: String,
    pub label: String,
    /// Accumulated keyword score in [0, 0.95].
    pub score: f64,
    /// De-duplicated matched keywords, first-seen order, at most six.
    pub matched_keywords: Vec<String>,
}

/// Score free text against the compiled index. Candidates are sorted
/// descending by score; ties keep table order (stable sort).
pub fn score_text(text: &str) -> Vec<CandidateScore> {
    score_against(text, KB_INDEX)
}

/// Score against an explicit index table (seam for tests).
pub fn score_against(text: &str, index: &[IcfKnowledgeEntry]) -> Vec<CandidateScore> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let tokens = token_set(text);

    let mut candidates: Vec<CandidateScore> = Vec::new();
    let mut seen_codes: HashSet<&str> = HashSet::new();

    for entry in index {
        if let Some(candidate) = score_entry(entry, &lowered, &tokens) {
            // Dedupe by code, keeping the higher-scoring occurrence.
            if seen_codes.contains(entry.code) {
                if let Some(existing) = candidates.iter_mut().find(|c| c.code == entry.code) {
                    if candidate.score > existing.score {
                        *existing = candidate;
                    }
                }
            } else {
                seen_codes.insert(entry.code);
                candidates.push(candidate);
            }
        }
    }

    apply_related_boosts(&mut candidates, index);

    // Stable sort: ties preserve the original table order.
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    candidates
}

/// Score a single index entry; `None` when it does not qualify.
fn score_entry(
    entry: &IcfKnowledgeEntry,
    lowered_text: &str,
    tokens: &HashSet<String>,
) -> Option<CandidateScore> {
    let mut score = 0.0_f64;
    let mut matched: Vec<String> = Vec::new();

    for keyword in entry.keywords {
        if keyword.chars().count() < MIN_TOKEN_LEN {
            continue;
        }

        let hit = if keyword.contains(' ') {
            // Multi-word keyword: substring search on the full text.
            if lowered_text.contains(keyword) {
                score += PHRASE_INCREMENT;
                true
            } else {
                false
            }
        } else if tokens.contains(*keyword) {
            score += if keyword.chars().count() >= LONG_KEYWORD_LEN {
                LONG_KEYWORD_INCREMENT
            } else {
                SHORT_KEYWORD_INCREMENT
            };
            true
        } else {
            false
        };

        if hit && !matched.iter().any(|m| m == keyword) {
            matched.push((*keyword).to_string());
        }
    }

    if score < QUALIFY_THRESHOLD || matched.is_empty() {
        return None;
    }

    matched.truncate(MATCHED_KEYWORD_CAP);

    Some(CandidateScore {
        code: entry.code.to_string(),
        label: entry.label.to_string(),
        score: score.min(SCORE_CAP),
        matched_keywords: matched,
    })
}

/// Second pass: boost each qualifying candidate's related codes, but only
/// when the related code also qualified on its own. A non-qualifying code is
/// never pulled into the set by the boost.
fn apply_related_boosts(candidates: &mut [CandidateScore], index: &[IcfKnowledgeEntry]) {
    let qualifying: HashSet<String> = candidates.iter().map(|c| c.code.clone()).collect();

    let mut boosts: Vec<(String, u32)> = Vec::new();
    for candidate in candidates.iter() {
        let Some(entry) = index.iter().find(|e| e.code == candidate.code) else {
            continue;
        };
        for related in entry.related {
            if qualifying.contains(*related) {
                match boosts.iter_mut().find(|(code, _)| code == related) {
                    Some((_, n)) => *n += 1,
                    None => boosts.push(((*related).to_string(), 1)),
                }
            }
        }
    }

    for (code, count) in boosts {
        if let Some(candidate) = candidates.iter_mut().find(|c| c.code == code) {
            candidate.score =
                (candidate.score + RELATED_BOOST * f64::from(count)).min(SCORE_CAP);
        }
    }
}
