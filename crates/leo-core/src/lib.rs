//! # leo-core
//!
//! Foundation crate for the Leo ICF analysis service.
//! Defines all types, errors, config, constants, and the A-PROOF domain table.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod domains;
pub mod errors;
pub mod model;

// Re-export the most commonly used types at the crate root.
pub use config::LeoConfig;
pub use errors::{LeoError, LeoResult};
pub use model::{
    AnalysisResponse, Confidence, ContextFactor, DomainFinding, Impact, RawAnalysis, TopIcfCode,
};
