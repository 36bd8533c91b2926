// ============================================================
// Config Store
// ============================================================
// Persists the architecture selection as JSON so an external
// harness can rebuild the exact model it trained. Only the
// hyperparameters are stored here — learned weights are the
// harness's concern, recorded through Burn on its side.
//
// File layout:
//   {dir}/network_config.json — which variant, with which
//                               channel/kernel dimensioning

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::ml::registry::NetworkConfig;

const CONFIG_FILE: &str = "network_config.json";

/// Saves and loads the architecture config in one directory.
pub struct ConfigStore {
    /// Directory the config file lives in
    dir: PathBuf,
}

impl ConfigStore {
    /// Create a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        fs::create_dir_all(&dir).ok();
        Self { dir }
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, cfg: &NetworkConfig) -> Result<()> {
        let path = self.dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;
        tracing::debug!("Saved network config to '{}'", path.display());
        Ok(())
    }

    /// Read the config back.
    pub fn load(&self) -> Result<NetworkConfig> {
        let path = self.dir.join(CONFIG_FILE);
        let json = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read config from '{}'. Has a config been saved here?",
                path.display()
            )
        })?;
        Ok(serde_json::from_str(&json)?)
    }
}
