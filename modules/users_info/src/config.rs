use serde::{Deserialize, Serialize};

use crate::domain::service::ServiceConfig;

/// Configuration for the users_info module (`modules.users_info`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UsersInfoConfig {
    #[serde(default = "default_name_min_chars")]
    pub name_min_chars: usize,
    #[serde(default = "default_name_max_chars")]
    pub name_max_chars: usize,
    #[serde(default = "default_bio_min_chars")]
    pub bio_min_chars: usize,
    #[serde(default = "default_bio_max_chars")]
    pub bio_max_chars: usize,
}

impl Default for UsersInfoConfig {
    fn default() -> Self {
        Self {
            name_min_chars: default_name_min_chars(),
            name_max_chars: default_name_max_chars(),
            bio_min_chars: default_bio_min_chars(),
            bio_max_chars: default_bio_max_chars(),
        }
    }
}

impl TryFrom<UsersInfoConfig> for ServiceConfig {
    type Error = anyhow::Error;

    fn try_from(cfg: UsersInfoConfig) -> Result<Self, Self::Error> {
        if cfg.name_min_chars > cfg.name_max_chars {
            anyhow::bail!(
                "name_min_chars ({}) exceeds name_max_chars ({})",
                cfg.name_min_chars,
                cfg.name_max_chars
            );
        }
        if cfg.bio_min_chars > cfg.bio_max_chars {
            anyhow::bail!(
                "bio_min_chars ({}) exceeds bio_max_chars ({})",
                cfg.bio_min_chars,
                cfg.bio_max_chars
            );
        }
        Ok(ServiceConfig {
            name_min_chars: cfg.name_min_chars,
            name_max_chars: cfg.name_max_chars,
            bio_min_chars: cfg.bio_min_chars,
            bio_max_chars: cfg.bio_max_chars,
        })
    }
}

fn default_name_min_chars() -> usize {
    2
}

fn default_name_max_chars() -> usize {
    20
}

fn default_bio_min_chars() -> usize {
    20
}

fn default_bio_max_chars() -> usize {
    450
}
