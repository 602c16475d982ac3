use serde::{Deserialize, Serialize};

use super::defaults;

/// Knowledge-document store configuration.
///
/// The four documents are immutable reference data for the lifetime of the
/// process; there is deliberately no TTL or refresh setting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    pub conversational_url: String,
    pub icf_categories_url: String,
    pub dialogues_url: String,
    pub fall_prevention_url: String,
    /// Max entries in the in-memory document cache.
    pub cache_capacity: u64,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            conversational_url: defaults::DEFAULT_CONVERSATIONAL_URL.to_string(),
            icf_categories_url: defaults::DEFAULT_ICF_CATEGORIES_URL.to_string(),
            dialogues_url: defaults::DEFAULT_DIALOGUES_URL.to_string(),
            fall_prevention_url: defaults::DEFAULT_FALL_PREVENTION_URL.to_string(),
            cache_capacity: defaults::DEFAULT_KNOWLEDGE_CACHE_CAPACITY,
        }
    }
}
