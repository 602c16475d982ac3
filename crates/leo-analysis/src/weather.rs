//! Weather/environment disambiguation for walking limitations.
//!
//! A reported inability to walk can be environmental ("the snow kept me
//! inside") rather than intrinsic (balance, weakness, pain). When weather
//! terms, a causal connector, and the absence of any intrinsic-impairment
//! term line up, the walking finding is overridden: apparent severity is
//! re-attributed to the environment and certainty is explicitly lowered.

use leo_core::constants::{
    FAC_CODE, WEATHER_CODE, WEATHER_OVERRIDE_CONFIDENCE_CEILING, WEATHER_OVERRIDE_FLOOR_LEVEL,
    WEATHER_POSSIBLE_CONFIDENCE, WEATHER_POSSIBLE_QUALIFIER, WEATHER_PRIMARY_CONFIDENCE,
    WEATHER_PRIMARY_QUALIFIER,
};
use leo_core::model::{Confidence, ContextFactor, DomainFinding, Impact};

use crate::signals::{
    any_present, matched_terms, CANNOT_WALK_PHRASE, CAUSAL_TERMS, INTRINSIC_TERMS, WEATHER_TERMS,
};

/// The three text signals driving the disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherSignals {
    pub has_weather: bool,
    pub has_causal: bool,
    pub has_intrinsic: bool,
}

impl WeatherSignals {
    /// Evaluate the lower-cased text.
    pub fn evaluate(lowered_text: &str) -> Self {
        Self {
            has_weather: any_present(lowered_text, WEATHER_TERMS),
            has_causal: any_present(lowered_text, CAUSAL_TERMS)
                || lowered_text.contains(CANNOT_WALK_PHRASE),
            has_intrinsic: any_present(lowered_text, INTRINSIC_TERMS),
        }
    }

    /// Weather is the primary barrier only when it is mentioned, causally
    /// linked, and no intrinsic impairment is in sight.
    pub fn weather_is_primary_barrier(self) -> bool {
        self.has_weather && self.has_causal && !self.has_intrinsic
    }
}

/// Apply the disambiguation: synthesize the e225 context factor when weather
/// is mentioned at all, and override the walking finding when weather is the
/// primary barrier.
pub fn apply(
    lowered_text: &str,
    findings: &mut [DomainFinding],
    context_factors: &mut Vec<ContextFactor>,
    summary: &mut String,
) {
    let signals = WeatherSignals::evaluate(lowered_text);
    if !signals.has_weather {
        return;
    }

    let primary = signals.weather_is_primary_barrier();
    context_factors.push(weather_factor(lowered_text, primary));

    if primary {
        if let Some(walking) = findings.iter_mut().find(|f| f.code == FAC_CODE) {
            override_walking(walking);
            append_summary_note(summary);
            tracing::debug!("weather override applied to {FAC_CODE}");
        }
    }
}

/// Build the e225 context factor: the strong tier when weather is the
/// primary barrier, the cautious tier otherwise.
fn weather_factor(lowered_text: &str, primary: bool) -> ContextFactor {
    let (qualifier, impact, confidence) = if primary {
        (
            WEATHER_PRIMARY_QUALIFIER,
            Impact::Barrier,
            WEATHER_PRIMARY_CONFIDENCE,
        )
    } else {
        (
            WEATHER_POSSIBLE_QUALIFIER,
            Impact::PossibleBarrier,
            WEATHER_POSSIBLE_CONFIDENCE,
        )
    };

    ContextFactor {
        code: WEATHER_CODE.to_string(),
        label: "Weer en klimaat".to_string(),
        qualifier,
        impact,
        confidence: Confidence::new(confidence),
        evidence: matched_terms(lowered_text, WEATHER_TERMS),
    }
}

/// Force the walking finding toward "independent but weather-blocked": FAC
/// level at least 4, confidence capped at the verification cutoff (the
/// apparent severity may be environmental, not intrinsic).
fn override_walking(walking: &mut DomainFinding) {
    walking.level = walking.level.max(WEATHER_OVERRIDE_FLOOR_LEVEL);
    walking.confidence = walking
        .confidence
        .min(Confidence::new(WEATHER_OVERRIDE_CONFIDENCE_CEILING));
    walking.evidence.push("weather-related limitation".to_string());
    walking.reasoning = "Loopbeperking lijkt primair contextueel (weersomstandigheden), \
                         niet intrinsiek."
        .to_string();
}

/// Append the clarifying sentence once; skip when the summary already
/// mentions the walking code.
fn append_summary_note(summary: &mut String) {
    if summary.contains(FAC_CODE) {
        return;
    }
    if !summary.is_empty() && !summary.ends_with(' ') {
        summary.push(' ');
    }
    summary.push_str(
        "De genoemde loopbeperking (d450) lijkt vooral samen te hangen met de \
         weersomstandigheden, niet met een intrinsieke stoornis.",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNOW_TEXT: &str = "door de sneeuw kon ik vandaag niet naar buiten lopen";

    #[test]
    fn snow_with_causal_and_no_intrinsic_is_primary() {
        let signals = WeatherSignals::evaluate(SNOW_TEXT);
        assert!(signals.has_weather);
        assert!(signals.has_causal);
        assert!(!signals.has_intrinsic);
        assert!(signals.weather_is_primary_barrier());
    }

    #[test]
    fn intrinsic_terms_block_primary() {
        let signals =
            WeatherSignals::evaluate("door de regen niet gelopen, en mijn rollator is stuk");
        assert!(signals.has_weather);
        assert!(!signals.weather_is_primary_barrier());
    }

    #[test]
    fn primary_weather_emits_strong_factor_and_overrides_walking() {
        let mut findings = vec![DomainFinding::new("d450", "Lopen", 1, Confidence::new(0.8))];
        let mut factors = Vec::new();
        let mut summary = "Samenvatting.".to_string();

        apply(SNOW_TEXT, &mut findings, &mut factors, &mut summary);

        let e225 = &factors[0];
        assert_eq!(e225.code, "e225");
        assert_eq!(e225.qualifier, 2);
        assert_eq!(e225.impact, Impact::Barrier);
        assert!((e225.confidence.value() - 0.78).abs() < 1e-9);
        assert!(e225.evidence.contains(&"sneeuw".to_string()));

        let walking = &findings[0];
        assert!(walking.level >= 4);
        assert!(walking.confidence.value() <= 0.55);
        assert!(walking
            .evidence
            .contains(&"weather-related limitation".to_string()));
        assert!(summary.contains("d450"));
    }

    #[test]
    fn weather_without_causal_emits_cautious_factor_only() {
        let mut findings = vec![DomainFinding::new("d450", "Lopen", 2, Confidence::new(0.8))];
        let mut factors = Vec::new();
        let mut summary = String::new();

        // Weather is mentioned but nothing links it to the limitation.
        apply("wat een sneeuw vandaag", &mut findings, &mut factors, &mut summary);

        assert_eq!(factors.len(), 1);
        assert_eq!(factors[0].qualifier, 1);
        assert_eq!(factors[0].impact, Impact::PossibleBarrier);
        assert!((factors[0].confidence.value() - 0.62).abs() < 1e-9);
        // Walking untouched.
        assert_eq!(findings[0].level, 2);
        assert!((findings[0].confidence.value() - 0.8).abs() < 1e-9);
        assert!(summary.is_empty());
    }

    #[test]
    fn summary_note_is_idempotent() {
        let mut summary = String::new();
        append_summary_note(&mut summary);
        let once = summary.clone();
        append_summary_note(&mut summary);
        assert_eq!(summary, once);
    }

    #[test]
    fn higher_existing_level_is_kept() {
        let mut walking = DomainFinding::new("d450", "Lopen", 5, Confidence::new(0.4));
        override_walking(&mut walking);
        assert_eq!(walking.level, 5);
        // An already-lower confidence stays put.
        assert!((walking.confidence.value() - 0.4).abs() < 1e-9);
    }
}
