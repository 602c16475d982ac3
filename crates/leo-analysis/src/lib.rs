//! # leo-analysis
//!
//! The domain result normalizer / heuristic resolver. Takes the LLM's raw
//! structured output plus the original conversation text and produces the
//! final dashboard payload: codes normalized, levels and confidence clamped,
//! deterministic heuristic rules layered on top, weather-vs-intrinsic walking
//! disambiguation applied, and the top-code list assembled.
//!
//! Everything here is pure and synchronous; the LLM is never called again.

pub mod heuristics;
pub mod normalize;
pub mod resolver;
pub mod signals;
pub mod top_codes;
pub mod upsert;
pub mod weather;

pub use resolver::resolve;
