//! Domain model for the analysis pipeline.

mod confidence;
pub mod finding;
pub mod raw;

pub use confidence::Confidence;
pub use finding::{AnalysisResponse, ContextFactor, DomainFinding, Impact, TopIcfCode};
pub use raw::{RawAnalysis, RawContextFactor, RawDomain, RawTopCode};
