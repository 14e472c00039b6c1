use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Backend address used when neither the CLI flag nor the config file sets one.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Base URL of the weather data backend, e.g. "http://localhost:8000".
    ///
    /// Example TOML:
    /// backend_url = "http://weather.internal:8000"
    pub backend_url: Option<String>,
}

impl Config {
    /// Configured backend URL, falling back to the built-in default.
    pub fn backend_url(&self) -> &str {
        self.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL)
    }

    pub fn set_backend_url(&mut self, url: String) {
        self.backend_url = Some(url);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-lookup", "lookup-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Resolution order for the backend URL: explicit flag, then config file,
/// then the built-in default.
pub fn resolve_backend_url(flag: Option<&str>, config: &Config) -> String {
    flag.map(str::to_owned)
        .unwrap_or_else(|| config.backend_url().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_falls_back_to_default() {
        let cfg = Config::default();
        assert_eq!(cfg.backend_url(), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn configured_url_overrides_default() {
        let mut cfg = Config::default();
        cfg.set_backend_url("http://weather.internal:8000".into());

        assert_eq!(cfg.backend_url(), "http://weather.internal:8000");
    }

    #[test]
    fn flag_takes_precedence_over_config() {
        let mut cfg = Config::default();
        cfg.set_backend_url("http://weather.internal:8000".into());

        let resolved = resolve_backend_url(Some("http://127.0.0.1:9000"), &cfg);
        assert_eq!(resolved, "http://127.0.0.1:9000");
    }

    #[test]
    fn without_flag_config_then_default_applies() {
        let cfg = Config::default();
        assert_eq!(resolve_backend_url(None, &cfg), DEFAULT_BACKEND_URL);

        let mut cfg = Config::default();
        cfg.set_backend_url("http://weather.internal:8000".into());
        assert_eq!(
            resolve_backend_url(None, &cfg),
            "http://weather.internal:8000"
        );
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_backend_url("http://weather.internal:8000".into());

        let toml = toml::to_string_pretty(&cfg).expect("config must serialize");
        let parsed: Config = toml::from_str(&toml).expect("config must parse");

        assert_eq!(parsed.backend_url(), "http://weather.internal:8000");
    }
}
