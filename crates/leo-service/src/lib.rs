//! # leo-service
//!
//! The HTTP shell around the analysis pipeline: knowledge-document fetching,
//! enriched prompt construction, the outbound LLM call, and the `/analyze`
//! endpoint that stitches scorer, LLM and resolver together.
//!
//! Each request is stateless; the only shared state is the knowledge-document
//! cache inside [`leo_kb::KnowledgeStore`].

pub mod fetcher;
pub mod http;
pub mod llm;
pub mod prompt;

pub use fetcher::HttpFetcher;
pub use llm::LlmClient;
