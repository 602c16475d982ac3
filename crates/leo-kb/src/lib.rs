//! # leo-kb
//!
//! The ICF knowledge base: a compiled keyword index (~60 codes), the
//! free-text candidate scorer that ranks codes for prompt enrichment, and the
//! process-wide store for the four richer knowledge documents.

pub mod index;
pub mod scorer;
pub mod store;
pub mod tokenizer;

pub use index::{IcfKnowledgeEntry, KB_INDEX};
pub use scorer::{score_text, CandidateScore};
pub use store::{DocKey, DocumentFetcher, KnowledgeDocs, KnowledgeStore};
