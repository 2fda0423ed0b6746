use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::fs;

/// Viewer configuration persisted as TOML.
///
/// Fields:
/// - user_id: id the board is projected for; absent renders as a spectator
/// - color: ANSI colors in terminal output
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ViewerConfig {
    pub user_id: Option<String>,
    pub color: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            user_id: None,
            color: true,
        }
    }
}

impl ViewerConfig {
    /// Load configuration from `path`. If the file does not exist, create
    /// it with reasonable defaults and return the default config.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let s = fs::read_to_string(path)
                .with_context(|| format!("reading config file '{}'", path.display()))?;
            let cfg: ViewerConfig = toml::from_str(&s)
                .with_context(|| format!("parsing TOML config '{}'", path.display()))?;
            Ok(cfg)
        } else {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("creating config directory '{}'", parent.display())
                    })?;
                }
            }

            let cfg = ViewerConfig::default();
            let toml_text = toml::to_string_pretty(&cfg)
                .with_context(|| "serializing default config to TOML")?;
            fs::write(path, toml_text)
                .with_context(|| format!("writing default config to '{}'", path.display()))?;
            Ok(cfg)
        }
    }

    /// Save the current config state back to the provided path (overwrites).
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating config directory '{}'", parent.display()))?;
            }
        }
        let toml_text =
            toml::to_string_pretty(&self).with_context(|| "serializing config to TOML")?;
        fs::write(path, toml_text)
            .with_context(|| format!("writing config to '{}'", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_toml() {
        let cfg = ViewerConfig {
            user_id: Some("p1".to_string()),
            color: false,
        };
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: ViewerConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.user_id.as_deref(), Some("p1"));
        assert!(!back.color);
    }

    #[test]
    fn load_or_create_writes_defaults() {
        let dir = std::env::temp_dir().join(format!("cambio-replay-test-{}", std::process::id()));
        let path = dir.join("viewer.toml");
        let _ = fs::remove_dir_all(&dir);

        let cfg = ViewerConfig::load_or_create(&path).unwrap();
        assert!(cfg.color);
        assert!(path.exists());

        // A second load reads the file back instead of re-creating it.
        let again = ViewerConfig::load_or_create(&path).unwrap();
        assert_eq!(again.user_id, cfg.user_id);

        let _ = fs::remove_dir_all(&dir);
    }
}
