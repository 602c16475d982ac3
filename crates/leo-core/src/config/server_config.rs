use serde::{Deserialize, Serialize};

use super::defaults;

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the analysis endpoint binds to.
    pub bind_addr: String,
    /// Optional bearer token; when set, requests without it get 401.
    pub auth_token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: defaults::DEFAULT_BIND_ADDR.to_string(),
            auth_token: None,
        }
    }
}
