//! Calibration constants for the scorer and the heuristic resolver.
//!
//! The heuristic confidences and the verification cutoff are empirically tuned
//! values carried over from the original calibration runs, not derived from a
//! documented clinical rationale. Treat them as calibration constants pending
//! clinical validation.

/// Minimum token length considered by the tokenizer.
pub const MIN_TOKEN_LEN: usize = 3;

/// Keyword length at which the larger single-word increment applies.
pub const LONG_KEYWORD_LEN: usize = 8;

/// Score increment for a short single-word keyword match.
pub const SHORT_KEYWORD_INCREMENT: f64 = 0.10;

/// Score increment for a long (>= 8 chars) single-word keyword match.
pub const LONG_KEYWORD_INCREMENT: f64 = 0.14;

/// Score increment for a multi-word keyword phrase match.
pub const PHRASE_INCREMENT: f64 = 0.16;

/// Minimum accumulated score for an entry to qualify as a candidate.
pub const QUALIFY_THRESHOLD: f64 = 0.12;

/// Hard cap on any candidate score.
pub const SCORE_CAP: f64 = 0.95;

/// Boost applied to a qualifying candidate per qualifying related code.
pub const RELATED_BOOST: f64 = 0.03;

/// Maximum matched keywords recorded per candidate.
pub const MATCHED_KEYWORD_CAP: usize = 6;

/// The FAC walking code, the only domain with an inverted 0-5 scale.
pub const FAC_CODE: &str = "d450";

/// Maximum qualifier level on the FAC scale.
pub const FAC_MAX_LEVEL: u8 = 5;

/// Maximum qualifier level on the standard WHO-ICF scale.
pub const ICF_MAX_LEVEL: u8 = 4;

/// Canonical code for the collapsed work/employment chapter.
pub const WORK_CODE: &str = "d840";

/// Work-chapter sub-code prefixes that collapse into [`WORK_CODE`].
pub const WORK_CODE_PREFIXES: [&str; 6] = ["d840", "d841", "d842", "d845", "d850", "d859"];

/// Environmental factor code for weather/climate.
pub const WEATHER_CODE: &str = "e225";

/// Emotional functions code.
pub const EMOTION_CODE: &str = "b152";

/// Confidence below which a finding is flagged for clinician verification.
pub const VERIFY_CUTOFF: f64 = 0.55;

/// Literal marker appended to low-confidence reasoning, exactly once.
pub const VERIFY_MARKER: &str = "[verify with clinician]";

/// Default confidence when the LLM omitted or mangled the field.
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Confidence of the fall-inference d450 finding (heuristic rule a).
pub const FALL_D450_CONFIDENCE: f64 = 0.58;

/// FAC level of the fall-inference d450 finding.
pub const FALL_D450_LEVEL: u8 = 2;

/// Confidence of the anxiety-inference b152 finding (heuristic rule b).
pub const ANXIETY_B152_CONFIDENCE: f64 = 0.56;

/// Level of the anxiety-inference b152 finding.
pub const ANXIETY_B152_LEVEL: u8 = 1;

/// Confidence of both vague-complaint co-occurrence findings (rules c and d).
pub const VAGUE_COOCCURRENCE_CONFIDENCE: f64 = 0.53;

/// Level of the vague-complaint b152 finding (rule c).
pub const VAGUE_B152_LEVEL: u8 = 1;

/// FAC level of the vague-complaint d450 finding (rule d).
pub const VAGUE_D450_LEVEL: u8 = 3;

/// Weather factor qualifier when weather is the primary barrier.
pub const WEATHER_PRIMARY_QUALIFIER: u8 = 2;

/// Weather factor confidence when weather is the primary barrier.
pub const WEATHER_PRIMARY_CONFIDENCE: f64 = 0.78;

/// Weather factor qualifier when weather is only a possible barrier.
pub const WEATHER_POSSIBLE_QUALIFIER: u8 = 1;

/// Weather factor confidence when weather is only a possible barrier.
pub const WEATHER_POSSIBLE_CONFIDENCE: f64 = 0.62;

/// Minimum FAC level forced onto d450 by the weather override.
pub const WEATHER_OVERRIDE_FLOOR_LEVEL: u8 = 4;

/// Confidence ceiling applied to d450 by the weather override.
pub const WEATHER_OVERRIDE_CONFIDENCE_CEILING: f64 = 0.55;

/// Maximum entries in the top ICF code list.
pub const TOP_CODE_CAP: usize = 10;

/// Candidate pool size the knowledge-base fallback draws from.
pub const KB_FALLBACK_POOL: usize = 40;

/// Default qualifier for a d450 entry in the knowledge-base fallback.
pub const KB_FALLBACK_FAC_QUALIFIER: u8 = 2;

/// Default qualifier for any other entry in the knowledge-base fallback.
pub const KB_FALLBACK_QUALIFIER: u8 = 1;

/// Reasoning string attached to knowledge-base fallback entries.
pub const KB_FALLBACK_REASONING: &str = "Knowledgebase keyword matching";
