use serde::{Deserialize, Serialize};
use virmac::MacPrefix;

/// Configuration structure loaded from YAML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Address generation settings
    #[serde(default)]
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Prefix for generated addresses (e.g., "52:54:00")
    #[serde(default = "default_prefix")]
    pub prefix: MacPrefix,

    /// Number of addresses generated per invocation
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_prefix() -> MacPrefix {
    MacPrefix::QEMU
}

fn default_count() -> usize {
    1
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            count: default_count(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }
}
