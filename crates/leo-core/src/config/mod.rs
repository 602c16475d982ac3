//! Service configuration, loadable from TOML with sensible defaults.

mod defaults;
mod knowledge_config;
mod llm_config;
mod server_config;

pub use knowledge_config::KnowledgeConfig;
pub use llm_config::LlmConfig;
pub use server_config::ServerConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{LeoError, LeoResult};

/// Top-level configuration for the Leo service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeoConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub knowledge: KnowledgeConfig,
}

impl LeoConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> LeoResult<Self> {
        toml::from_str(text).map_err(|e| LeoError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_all_defaults() {
        let cfg = LeoConfig::from_toml("").unwrap();
        assert_eq!(cfg.server.bind_addr, ServerConfig::default().bind_addr);
        assert_eq!(cfg.llm.base_url, LlmConfig::default().base_url);
    }

    #[test]
    fn partial_override() {
        let cfg = LeoConfig::from_toml("[server]\nbind_addr = \"0.0.0.0:9000\"\n").unwrap();
        assert_eq!(cfg.server.bind_addr, "0.0.0.0:9000");
        // Untouched sections keep their defaults.
        assert_eq!(cfg.llm.model, LlmConfig::default().model);
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        assert!(LeoConfig::from_toml("server = [").is_err());
    }
}
