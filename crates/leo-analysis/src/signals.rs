//! Keyword signal sets for the heuristic rules.
//!
//! All matching is substring search on the lower-cased full text, the same
//! contract the heuristic rules have always used. Terms are chosen to avoid
//! accidental substrings of common Dutch words (no bare "val", no "eng").

/// Falling and fear-of-falling terms.
pub const FALL_TERMS: &[&str] = &[
    "gevallen",
    "vallen",
    "valangst",
    "gestruikeld",
    "bang om te vallen",
    "bijna gevallen",
];

/// Tension/fear/anxiety terms.
pub const ANXIETY_TERMS: &[&str] = &[
    "bang",
    "angst",
    "angstig",
    "gespannen",
    "zenuwachtig",
    "paniek",
];

/// Vague-complaint markers: generic hardship without a concrete symptom.
pub const VAGUE_TERMS: &[&str] = &["moeilijk", "lastig", "zwaar", "moeite", "valt niet mee"];

/// Walking mentions.
pub const WALKING_TERMS: &[&str] = &["lopen", "wandelen", "loop", "trap"];

/// Fear terms for the vague-complaint walking inference.
pub const FEAR_TERMS: &[&str] = &["bang", "angst", "durf niet"];

/// Weather terms.
pub const WEATHER_TERMS: &[&str] = &[
    "sneeuw",
    "regen",
    "glad",
    "ijzel",
    "storm",
    "hagel",
    "koud",
    "wind",
    "hitte",
    "slecht weer",
    "het weer",
];

/// Causal connectors linking the weather to the limitation.
pub const CAUSAL_TERMS: &[&str] = &["door", "vanwege", "omdat", "waardoor", "daarom"];

/// The literal phrase treated as a causal signal on its own.
pub const CANNOT_WALK_PHRASE: &str = "kan niet lopen";

/// Intrinsic mobility-impairment terms: balance, aids, pain, weakness,
/// fall history. Presence of any of these blocks the weather override.
pub const INTRINSIC_TERMS: &[&str] = &[
    "balans",
    "evenwicht",
    "rollator",
    "stok",
    "kruk",
    "looprek",
    "pijn",
    "zwak",
    "duizelig",
    "spierkracht",
    "gevallen",
    "valangst",
    "heup",
    "knie",
    "operatie",
];

/// Whether any term from the set occurs in the lower-cased text.
pub fn any_present(lowered_text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| lowered_text.contains(t))
}

/// The de-duplicated subset of terms occurring in the lower-cased text,
/// in set order.
pub fn matched_terms(lowered_text: &str, terms: &[&str]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for term in terms {
        if lowered_text.contains(term) && !found.iter().any(|f| f == term) {
            found.push((*term).to_string());
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fall_terms_match_past_tense() {
        assert!(any_present("ik ben gisteren gevallen", FALL_TERMS));
        assert!(!any_present("ik ben gisteren thuisgebleven", FALL_TERMS));
    }

    #[test]
    fn gisteren_is_not_rain() {
        // "gisteren" must not trip the "regen" substring.
        assert!(!any_present("gisteren was het mooi", WEATHER_TERMS));
        assert!(any_present("het heeft geregend", WEATHER_TERMS));
    }

    #[test]
    fn matched_terms_dedupe_and_keep_order() {
        let found = matched_terms("sneeuw en nog eens sneeuw en ijzel", WEATHER_TERMS);
        assert_eq!(found, vec!["sneeuw", "ijzel"]);
    }

    #[test]
    fn empty_text_matches_nothing() {
        assert!(!any_present("", FALL_TERMS));
        assert!(matched_terms("", WEATHER_TERMS).is_empty());
    }
}
