//! Default values shared by the config structs.

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8788";

pub const DEFAULT_LLM_BASE_URL: &str = "http://localhost:4000";
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;

pub const DEFAULT_KNOWLEDGE_CACHE_CAPACITY: u64 = 16;

pub const DEFAULT_CONVERSATIONAL_URL: &str =
    "https://storage.leo-care.example/knowledge/icf_customgpt_knowledge_base_extended.json";
pub const DEFAULT_ICF_CATEGORIES_URL: &str =
    "https://storage.leo-care.example/knowledge/icf_categories_complete.json";
pub const DEFAULT_DIALOGUES_URL: &str =
    "https://storage.leo-care.example/knowledge/comprehensive_elderly_dialogues_dutch.json";
pub const DEFAULT_FALL_PREVENTION_URL: &str =
    "https://storage.leo-care.example/knowledge/enhanced_fall_prevention_2025.json";
