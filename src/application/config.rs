// ============================================================
// Layer 2 — Data Configuration
// ============================================================
// Everything the three modes need to know about where the data
// lives and how batches are cut.
//
// Serialisable so a run's settings can be kept next to the data
// and replayed with `--config`. CLI flags given explicitly win
// over the file; anything not given falls back to the file, then
// to the defaults below.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// JSON corpus: an array of sentence groups
    pub corpus_path: String,

    /// JSON vocabulary table written by build-vocab
    pub vocab_path: String,

    /// Examples per window (two examples make one pair)
    pub batch_size: usize,

    /// Append the cyclic shift of every window (small-corpus trick)
    pub data_loop: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            corpus_path: "data/corpus.json".to_string(),
            vocab_path: "data/vocab.json".to_string(),
            batch_size: 10,
            data_loop: false,
        }
    }
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub corpus_path: Option<String>,
    pub vocab_path: Option<String>,
    pub batch_size: Option<usize>,
    pub data_loop: Option<bool>,
}

impl DataConfig {
    /// Read a config file written by [`DataConfig::save`].
    /// Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Config '{}' is malformed", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;
        tracing::debug!("Saved data config to '{}'", path.display());
        Ok(())
    }

    /// Defaults, then `file` if given, then `overrides`.
    pub fn resolve(file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let mut cfg = match file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(corpus_path) = overrides.corpus_path {
            cfg.corpus_path = corpus_path;
        }
        if let Some(vocab_path) = overrides.vocab_path {
            cfg.vocab_path = vocab_path;
        }
        if let Some(batch_size) = overrides.batch_size {
            cfg.batch_size = batch_size;
        }
        if let Some(data_loop) = overrides.data_loop {
            cfg.data_loop = data_loop;
        }

        Ok(cfg)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let cfg = DataConfig::resolve(None, ConfigOverrides::default()).unwrap();
        assert_eq!(cfg, DataConfig::default());
        assert!(!cfg.data_loop);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new("config").unwrap();
        let path = dir.path().join("data_config.json");
        let cfg = DataConfig { batch_size: 4, data_loop: true, ..DataConfig::default() };

        cfg.save(&path).unwrap();
        assert_eq!(DataConfig::load(&path).unwrap(), cfg);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new("config").unwrap();
        let path = dir.path().join("data_config.json");
        fs::write(&path, r#"{"data_loop": true}"#).unwrap();

        let cfg = DataConfig::load(&path).unwrap();
        assert!(cfg.data_loop);
        assert_eq!(cfg.batch_size, 10);
    }

    #[test]
    fn test_overrides_win_over_file() {
        let dir = TempDir::new("config").unwrap();
        let path = dir.path().join("data_config.json");
        fs::write(&path, r#"{"batch_size": 6, "vocab_path": "v.json"}"#).unwrap();

        let overrides = ConfigOverrides { batch_size: Some(2), ..ConfigOverrides::default() };
        let cfg = DataConfig::resolve(Some(&path), overrides).unwrap();
        assert_eq!(cfg.batch_size, 2);
        assert_eq!(cfg.vocab_path, "v.json");
    }
}
