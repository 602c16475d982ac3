//! Knowledge-document store.
//!
//! The four richer knowledge documents (conversation patterns, full ICF
//! category descriptions, example dialogues, fall-prevention risk factors)
//! are fetched from fixed URLs and folded into the LLM prompt text — never
//! into the deterministic scorer. They are treated as immutable reference
//! data: cached for the process lifetime with no expiry, each slot
//! independently keyed and idempotently overwritable.

use std::sync::Arc;

use moka::sync::Cache;
use serde_json::Value;

use leo_core::config::KnowledgeConfig;
use leo_core::errors::KbError;

/// The four fixed document slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocKey {
    Conversational,
    IcfCategories,
    Dialogues,
    FallPrevention,
}

impl DocKey {
    pub const ALL: [DocKey; 4] = [
        DocKey::Conversational,
        DocKey::IcfCategories,
        DocKey::Dialogues,
        DocKey::FallPrevention,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DocKey::Conversational => "conversational",
            DocKey::IcfCategories => "icf_categories",
            DocKey::Dialogues => "dialogues",
            DocKey::FallPrevention => "fall_prevention",
        }
    }

    /// The configured URL for this slot.
    pub fn url(self, config: &KnowledgeConfig) -> &str {
        match self {
            DocKey::Conversational => &config.conversational_url,
            DocKey::IcfCategories => &config.icf_categories_url,
            DocKey::Dialogues => &config.dialogues_url,
            DocKey::FallPrevention => &config.fall_prevention_url,
        }
    }
}

/// Seam for document retrieval; the service wires in a reqwest-backed
/// implementation, tests supply a stub.
pub trait DocumentFetcher: Send + Sync {
    fn fetch(
        &self,
        key: DocKey,
        url: &str,
    ) -> impl std::future::Future<Output = Result<Value, KbError>> + Send;
}

/// The four documents as available for one request. A `None` slot means the
/// fetch failed and the request proceeds without it.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeDocs {
    pub conversational: Option<Arc<Value>>,
    pub icf_categories: Option<Arc<Value>>,
    pub dialogues: Option<Arc<Value>>,
    pub fall_prevention: Option<Arc<Value>>,
}

/// Read-through store over the document fetcher.
pub struct KnowledgeStore<F> {
    config: KnowledgeConfig,
    cache: Cache<DocKey, Arc<Value>>,
    fetcher: F,
}

impl<F: DocumentFetcher> KnowledgeStore<F> {
    /// Construct a store. The cache has no TTL: documents are immutable for
    /// the process lifetime.
    pub fn new(config: KnowledgeConfig, fetcher: F) -> Self {
        let cache = Cache::builder().max_capacity(config.cache_capacity).build();
        Self {
            config,
            cache,
            fetcher,
        }
    }

    /// Load one document, hitting the cache first. A fetch failure is logged
    /// and surfaces as `None`; it is never fatal to the request.
    pub async fn load(&self, key: DocKey) -> Option<Arc<Value>> {
        if let Some(doc) = self.cache.get(&key) {
            return Some(doc);
        }

        match self.fetcher.fetch(key, key.url(&self.config)).await {
            Ok(value) => {
                let doc = Arc::new(value);
                self.cache.insert(key, Arc::clone(&doc));
                Some(doc)
            }
            Err(e) => {
                tracing::warn!("knowledge document {} unavailable: {e}", key.name());
                None
            }
        }
    }

    /// Load all four documents concurrently. Individual failures degrade to
    /// `None` slots; the request still runs on whatever is available.
    pub async fn load_all(&self) -> KnowledgeDocs {
        let (conversational, icf_categories, dialogues, fall_prevention) = tokio::join!(
            self.load(DocKey::Conversational),
            self.load(DocKey::IcfCategories),
            self.load(DocKey::Dialogues),
            self.load(DocKey::FallPrevention),
        );

        KnowledgeDocs {
            conversational,
            icf_categories,
            dialogues,
            fall_prevention,
        }
    }

    /// Number of cached documents.
    pub fn cached_count(&self) -> u64 {
        self.cache.entry_count()
    }
}
