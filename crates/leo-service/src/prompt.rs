//! Enriched LLM prompt construction.
//!
//! The prompt is Dutch end to end: the Leo persona, the WHO-ICF severity
//! scale, the nine dashboard domain briefs, and whatever knowledge documents
//! were available at request time. Every document section degrades cleanly:
//! a missing document simply leaves its section out (or falls back to a
//! neutral phrase), it never fails the request.

use std::fmt::Write as _;
use std::sync::Arc;

use serde_json::Value;

use leo_core::domains::APROOF_DOMAINS;
use leo_kb::scorer::CandidateScore;
use leo_kb::store::KnowledgeDocs;

/// How many ICF category briefs from the categories document make it in.
const CATEGORY_CAP: usize = 20;
/// How many example dialogues make it in.
const DIALOGUE_CAP: usize = 5;
/// How many fall-risk factors make it in.
const RISK_FACTOR_CAP: usize = 5;

/// Mobility terms that pull the fall-prevention section into the prompt.
const MOBILITY_TERMS: [&str; 3] = ["lopen", "vallen", "rollator"];

/// Build the full analysis prompt for `text`.
pub fn build_prompt(text: &str, docs: &KnowledgeDocs, candidates: &[CandidateScore]) -> String {
    let mut prompt = String::with_capacity(8 * 1024);

    prompt.push_str(
        "Je bent Leo, een warme, empathische AI-assistent gespecialiseerd in \
         ICF-classificatie voor ouderenzorg, gebaseerd op het A-PROOF project \
         (VU Amsterdam/CLTL).\n\n\
         # JOUW ROL & TOON\n\
         - Warm, geduldig, oprecht nieuwsgierig\n\
         - Gebruik NOOIT robotische herhalingen zoals \"Dus u zegt dat...\"\n\
         - Erken emoties subtiel: \"Dat klinkt als een uitdaging\" in plaats van herhalen\n\
         - Stel open, verdiepende vragen die verbinding maken met eerdere opmerkingen\n\n",
    );

    push_empathic_phrases(&mut prompt, &docs.conversational);
    push_severity_scale(&mut prompt);
    push_domain_briefs(&mut prompt);
    push_category_briefs(&mut prompt, &docs.icf_categories);
    if mentions_mobility(text) {
        push_fall_risks(&mut prompt, &docs.fall_prevention);
    }
    push_dialogues(&mut prompt, &docs.dialogues);
    push_candidates(&mut prompt, candidates);

    let _ = write!(
        prompt,
        "\n# GESPREK OM TE ANALYSEREN\n\"{text}\"\n\n\
         # VERWACHTE OUTPUT (JSON)\n\
         Geef een JSON object terug met deze structuur:\n\
         {{\n\
         \x20 \"domains\": [\n\
         \x20   {{\n\
         \x20     \"code\": \"d450\",\n\
         \x20     \"name\": \"Lopen\",\n\
         \x20     \"level\": 2,\n\
         \x20     \"max_level\": 5,\n\
         \x20     \"confidence\": 0.85,\n\
         \x20     \"evidence\": [\"lopen met rollator\", \"angst om te vallen\"],\n\
         \x20     \"reasoning\": \"Patient geeft aan moeite te hebben met lopen en gebruikt hulpmiddel\"\n\
         \x20   }}\n\
         \x20 ],\n\
         \x20 \"summary\": \"Korte klinische samenvatting in menselijke taal\",\n\
         \x20 \"keywords_found\": [\"lopen\", \"rollator\"]\n\
         }}\n\n\
         BELANGRIJK:\n\
         - Alleen domeinen rapporteren die DUIDELIJK in de tekst worden besproken\n\
         - HOGERE scores = MEER problemen (standaard WHO-ICF)\n\
         - Uitzondering: d450 (Lopen) gebruikt de FAC-schaal waar HOGERE scores = MEER zelfstandig\n\
         - Gebruik een confidence < 0.55 als je onzeker bent\n\
         - Verbind verschillende observaties (bv. loopmoeilijkheden + valangst)\n\
         - Wees specifiek met bewijs uit het gesprek"
    );

    prompt
}

/// Whether the fall-prevention section applies to this text.
pub fn mentions_mobility(text: &str) -> bool {
    let lowered = text.to_lowercase();
    MOBILITY_TERMS.iter().any(|t| lowered.contains(t))
}

fn push_empathic_phrases(prompt: &mut String, conversational: &Option<Arc<Value>>) {
    let phrases = conversational
        .as_deref()
        .map(|doc| &doc["conversation_patterns"]["elderly_friendly_phrases"]);

    let follow_ups = phrases
        .map(|p| join_strings(&p["follow_up_questions"]))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Kunt u daar wat meer over vertellen?".to_string());
    let empathy = phrases
        .map(|p| join_strings(&p["empathy_responses"]))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Dat begrijp ik goed".to_string());

    let _ = write!(
        prompt,
        "# EMPATHISCHE ZINNEN OM TE GEBRUIKEN\n\
         Opvolgende vragen: {follow_ups}\n\
         Empathische reacties: {empathy}\n\n"
    );
}

fn push_severity_scale(prompt: &mut String) {
    prompt.push_str(
        "# ICF ANALYSE OPDRACHT\n\
         Analyseer het volgende gesprek en bepaal welke van de 9 ICF-domeinen worden \
         besproken. Geef per domein een ernstniveau volgens de WHO-ICF kwalificatieschaal.\n\n\
         WHO-ICF Ernstschaal (standaard voor alle domeinen behalve FAC):\n\
         \x20 0 = Geen probleem (0-4%)\n\
         \x20 1 = Licht probleem (5-24%)\n\
         \x20 2 = Matig probleem (25-49%)\n\
         \x20 3 = Ernstig probleem (50-95%)\n\
         \x20 4 = Volledig probleem (96-100%)\n\n\
         FAC-schaal voor d450 (0-5): 0 = kan niet lopen, 1 = hulp nodig, 2 = steun bij \
         balans, 3 = zelfstandig met toezicht, 4 = zelfstandig vlak terrein, 5 = volledig \
         zelfstandig.\n\n\
         Responsemapping (voorbeeld):\n\
         - \"zonder problemen\" / \"dat gaat prima\" \u{2192} 0\n\
         - \"een beetje moeite\" / \"soms lastig\" \u{2192} 1\n\
         - \"matige moeite\" / \"dat valt niet mee\" \u{2192} 2\n\
         - \"ernstige moeite\" / \"dat lukt bijna niet\" \u{2192} 3\n\
         - \"kan helemaal niet\" / \"dat is onmogelijk\" \u{2192} 4\n\n",
    );
}

fn push_domain_briefs(prompt: &mut String) {
    prompt.push_str("De 9 A-PROOF domeinen:\n");
    for (i, domain) in APROOF_DOMAINS.iter().enumerate() {
        let _ = writeln!(
            prompt,
            "{}. {} - {} ({}, schaal 0-{})",
            i + 1,
            domain.code,
            domain.description,
            domain.repo,
            domain.max_level,
        );
    }
    prompt.push('\n');
}

fn push_category_briefs(prompt: &mut String, icf_categories: &Option<Arc<Value>>) {
    let Some(Value::Array(categories)) = icf_categories.as_deref() else {
        return;
    };

    prompt.push_str("# KLINISCHE KENNIS\nICF Domeinen om te herkennen:\n");
    for category in categories.iter().take(CATEGORY_CAP) {
        if let (Some(code), Some(info), Some(question)) = (
            category["icf_code"].as_str(),
            category["info_text"].as_str(),
            category["question"].as_str(),
        ) {
            let _ = writeln!(prompt, "- {code}: {info} - {question}");
        }
    }
    prompt.push('\n');
}

fn push_fall_risks(prompt: &mut String, fall_prevention: &Option<Arc<Value>>) {
    let Some(doc) = fall_prevention.as_deref() else {
        return;
    };
    let Value::Array(factors) = &doc["risk_factors"]["patient_factors"] else {
        return;
    };

    let listed: Vec<&str> = factors
        .iter()
        .take(RISK_FACTOR_CAP)
        .filter_map(Value::as_str)
        .collect();
    if !listed.is_empty() {
        let _ = write!(prompt, "# VALRISICO FACTOREN\n{}\n\n", listed.join(", "));
    }
}

fn push_dialogues(prompt: &mut String, dialogues: &Option<Arc<Value>>) {
    let Some(doc) = dialogues.as_deref() else {
        return;
    };
    let Value::Array(entries) = &doc["dialogues"] else {
        return;
    };

    prompt.push_str("# VOORBEELD UITSPRAKEN EN HUN ICF CODES\n");
    for entry in entries.iter().take(DIALOGUE_CAP) {
        if let (Some(line), Some(code)) = (entry["dialogue"][1].as_str(), entry["icf_code"].as_str())
        {
            let description = entry["icf_description"].as_str().unwrap_or("");
            let _ = writeln!(prompt, "\"{line}\" \u{2192} {code} ({description})");
        }
    }
    prompt.push('\n');
}

fn push_candidates(prompt: &mut String, candidates: &[CandidateScore]) {
    if candidates.is_empty() {
        return;
    }

    prompt.push_str(
        "# KENNISBANK TREFFERS\n\
         De volgende ICF-codes scoorden op sleutelwoorden in dit gesprek \
         (hogere score = sterker signaal):\n",
    );
    for candidate in candidates {
        let _ = writeln!(
            prompt,
            "- {} ({}): score {:.2}, woorden: {}",
            candidate.code,
            candidate.label,
            candidate.score,
            candidate.matched_keywords.join(", "),
        );
    }
    prompt.push('\n');
}

/// Join a JSON array of strings with commas; empty for anything else.
fn join_strings(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn docs_with(conversational: Value, categories: Value, dialogues: Value, fall: Value) -> KnowledgeDocs {
        KnowledgeDocs {
            conversational: Some(Arc::new(conversational)),
            icf_categories: Some(Arc::new(categories)),
            dialogues: Some(Arc::new(dialogues)),
            fall_prevention: Some(Arc::new(fall)),
        }
    }

    #[test]
    fn empty_docs_still_produce_a_complete_prompt() {
        let prompt = build_prompt("ik ben moe", &KnowledgeDocs::default(), &[]);
        assert!(prompt.contains("Je bent Leo"));
        assert!(prompt.contains("De 9 A-PROOF domeinen"));
        assert!(prompt.contains("d450"));
        assert!(prompt.contains("confidence < 0.55"));
        // Fallback phrases kick in when the conversational doc is missing.
        assert!(prompt.contains("Kunt u daar wat meer over vertellen?"));
        // No mobility terms, so no fall section.
        assert!(!prompt.contains("VALRISICO"));
    }

    #[test]
    fn mobility_text_pulls_in_fall_risks() {
        let docs = docs_with(
            json!({}),
            json!([]),
            json!({}),
            json!({"risk_factors": {"patient_factors": ["valgeschiedenis", "spierzwakte", "medicatie"]}}),
        );
        let prompt = build_prompt("ik gebruik een rollator", &docs, &[]);
        assert!(prompt.contains("# VALRISICO FACTOREN"));
        assert!(prompt.contains("valgeschiedenis, spierzwakte, medicatie"));
    }

    #[test]
    fn category_briefs_are_capped_at_twenty() {
        let categories: Vec<Value> = (0..30)
            .map(|i| json!({"icf_code": format!("b{i:03}"), "info_text": "info", "question": "vraag?"}))
            .collect();
        let docs = docs_with(json!({}), json!(categories), json!({}), json!({}));
        let prompt = build_prompt("tekst", &docs, &[]);
        assert!(prompt.contains("b019:"));
        assert!(!prompt.contains("b020:"));
    }

    #[test]
    fn dialogues_render_with_arrow_mapping() {
        let docs = docs_with(
            json!({}),
            json!([]),
            json!({"dialogues": [
                {"dialogue": ["Hoe gaat het?", "Ik word zo moe van alles"],
                 "icf_code": "b1300", "icf_description": "Energieniveau"}
            ]}),
            json!({}),
        );
        let prompt = build_prompt("tekst", &docs, &[]);
        assert!(prompt.contains("\"Ik word zo moe van alles\" \u{2192} b1300 (Energieniveau)"));
    }

    #[test]
    fn candidates_section_lists_scores() {
        let candidates = vec![CandidateScore {
            code: "d450".to_string(),
            label: "Walking".to_string(),
            score: 0.37,
            matched_keywords: vec!["lopen".to_string(), "rollator".to_string()],
        }];
        let prompt = build_prompt("lopen met rollator", &KnowledgeDocs::default(), &candidates);
        assert!(prompt.contains("# KENNISBANK TREFFERS"));
        assert!(prompt.contains("- d450 (Walking): score 0.37, woorden: lopen, rollator"));
    }

    #[test]
    fn empathic_phrases_come_from_the_document() {
        let docs = docs_with(
            json!({"conversation_patterns": {"elderly_friendly_phrases": {
                "follow_up_questions": ["En hoe voelde dat?"],
                "empathy_responses": ["Wat vervelend voor u"]
            }}}),
            json!([]),
            json!({}),
            json!({}),
        );
        let prompt = build_prompt("tekst", &docs, &[]);
        assert!(prompt.contains("En hoe voelde dat?"));
        assert!(prompt.contains("Wat vervelend voor u"));
    }

    #[test]
    fn conversation_text_is_embedded() {
        let prompt = build_prompt("mijn unieke gespreksfragment", &KnowledgeDocs::default(), &[]);
        assert!(prompt.contains("\"mijn unieke gespreksfragment\""));
    }
}
