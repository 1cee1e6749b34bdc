use std::fs;
use std::path::Path;

use anyhow::Context;
use maclaurin_math::DEFAULT_ITERATIONS;
use serde::{Deserialize, Serialize};

/// Default config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "maclaurin_config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaclaurinConfig {
    pub iterations: i64,  // Terms summed per evaluation
    pub history: bool,    // Keep ~/.maclaurin_history for the interactive menu
    pub show_terms: bool, // Print every summand with its partial sum
}

impl Default for MaclaurinConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            history: true,
            show_terms: false,
        }
    }
}

impl MaclaurinConfig {
    /// Load `path`, falling back to defaults when it is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!(
                        "Error parsing config file {}: {}. Using defaults.",
                        path.display(),
                        e
                    ),
                },
                Err(e) => tracing::warn!(
                    "Error reading config file {}: {}. Using defaults.",
                    path.display(),
                    e
                ),
            }
        }
        Self::default()
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("serializing config")
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = self.to_toml()?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))
    }

    /// Overwrite `path` with defaults and return them.
    pub fn restore(path: &Path) -> anyhow::Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }
}
