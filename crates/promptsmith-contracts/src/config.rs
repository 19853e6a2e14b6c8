use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_WORLD;
use crate::references::{MAX_INTENSITY, MIN_INTENSITY};

pub const DEFAULT_HIGH_INTENSITY_THRESHOLD: f64 = 0.75;

/// Knobs for the composer. Every field has a default so a partial JSON file
/// (or none at all) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Intensity at or above which Face/Character/Structure references force
    /// their attribute overrides.
    pub high_intensity_threshold: f64,
    /// World used when a request does not name one.
    pub default_world: String,
    /// Append the `Art style: ...` sentence to rendered text-to-image requests.
    pub append_style_suffix: bool,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            high_intensity_threshold: DEFAULT_HIGH_INTENSITY_THRESHOLD,
            default_world: DEFAULT_WORLD.to_string(),
            append_style_suffix: true,
        }
    }
}

impl ComposerConfig {
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        let config: ComposerConfig =
            serde_json::from_str(raw).context("composer config is not valid JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read composer config {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("invalid composer config {}", path.display()))
    }

    /// Defaults when `path` is `None`.
    pub fn load_optional(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let threshold = self.high_intensity_threshold;
        if !threshold.is_finite() || !(MIN_INTENSITY..=MAX_INTENSITY).contains(&threshold) {
            bail!(
                "high_intensity_threshold {threshold} is outside {MIN_INTENSITY}..={MAX_INTENSITY}"
            );
        }
        if self.default_world.trim().is_empty() {
            bail!("default_world must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::ComposerConfig;
    use crate::catalog::{TraitCatalog, DEFAULT_WORLD};

    #[test]
    fn partial_config_keeps_defaults() -> anyhow::Result<()> {
        let config = ComposerConfig::from_json_str(r#"{"high_intensity_threshold": 0.9}"#)?;
        assert_eq!(config.high_intensity_threshold, 0.9);
        assert_eq!(config.default_world, "Modern Day");
        assert!(config.append_style_suffix);
        Ok(())
    }

    #[test]
    fn default_world_is_a_builtin_world() {
        let config = ComposerConfig::default();
        assert_eq!(config.default_world, DEFAULT_WORLD);
        assert!(TraitCatalog::builtin().world(DEFAULT_WORLD).is_ok());
        assert_eq!(TraitCatalog::builtin().world_names().next(), Some(DEFAULT_WORLD));
    }

    #[test]
    fn load_reads_file_and_rejects_bad_threshold() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let good = temp.path().join("good.json");
        fs::write(&good, r#"{"default_world": "Historical", "append_style_suffix": false}"#)?;
        let config = ComposerConfig::load_optional(Some(&good))?;
        assert_eq!(config.default_world, "Historical");
        assert!(!config.append_style_suffix);

        let bad = temp.path().join("bad.json");
        fs::write(&bad, r#"{"high_intensity_threshold": 1.5}"#)?;
        assert!(ComposerConfig::load(&bad).is_err());
        assert_eq!(ComposerConfig::load_optional(None)?, ComposerConfig::default());
        Ok(())
    }
}
