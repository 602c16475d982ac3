use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::VERIFY_CUTOFF;

/// Confidence score clamped to [0.0, 1.0].
/// Represents how certain the LLM or a heuristic rule is about a finding.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// Below this a finding must be flagged for clinician verification.
    pub const VERIFY: f64 = VERIFY_CUTOFF;

    /// Create a new Confidence, clamping to [0.0, 1.0].
    /// Non-finite input collapses to 0.0.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether this finding needs the clinician-verification flag.
    pub fn needs_verification(self) -> bool {
        self.0 < Self::VERIFY
    }

    /// The smaller of the two confidences.
    pub fn min(self, other: Self) -> Self {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(crate::constants::DEFAULT_CONFIDENCE)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}
