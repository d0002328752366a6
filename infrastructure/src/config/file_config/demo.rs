//! Demo data configuration from TOML (`[demo]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_DEMO_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDemoConfig {
    /// Seed for synthetic readings
    pub seed: u64,
    /// Never call the live API, even with a key configured
    pub force: bool,
}

impl Default for FileDemoConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_DEMO_SEED,
            force: false,
        }
    }
}
