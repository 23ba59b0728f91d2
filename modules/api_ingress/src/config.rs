use serde::{Deserialize, Serialize};

/// API ingress configuration, read from `modules.api_ingress`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiIngressConfig {
    /// Serve the OpenAPI document at `/openapi.json`.
    #[serde(default)]
    pub enable_docs: bool,
    #[serde(default)]
    pub cors_enabled: bool,
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

impl Default for ApiIngressConfig {
    fn default() -> Self {
        Self {
            enable_docs: false,
            cors_enabled: false,
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

fn default_body_limit_bytes() -> usize {
    1024 * 1024
}
