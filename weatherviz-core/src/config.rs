use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Environment variable consulted when no `--api-key` flag is given.
pub const API_KEY_ENV: &str = "WEATHERVIZ_API_KEY";

/// Environment variable consulted when no city argument is given.
pub const CITY_ENV: &str = "WEATHERVIZ_CITY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// api_key = "..."
/// default_city = "Zhengzhou"
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub default_city: Option<String>,
}

impl Config {
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
        let dirs = ProjectDirs::from("dev", "weatherviz", "weatherviz")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Resolve the API key with flag > environment > config file precedence.
///
/// The environment value is passed in rather than read here so the
/// precedence logic stays a pure function.
pub fn resolve_api_key(
    flag: Option<String>,
    env: Option<String>,
    config: &Config,
) -> Result<String> {
    flag.or(env).or_else(|| config.api_key.clone()).ok_or_else(|| {
        anyhow!(
            "No API key available.\n\
             Hint: pass --api-key, set {API_KEY_ENV}, or run `weatherviz configure` first."
        )
    })
}

/// Resolve the city with argument > environment > configured default precedence.
pub fn resolve_city(arg: Option<String>, env: Option<String>, config: &Config) -> Result<String> {
    arg.or(env).or_else(|| config.default_city.clone()).ok_or_else(|| {
        anyhow!(
            "No city given.\n\
             Hint: pass a city argument, set {CITY_ENV}, or run `weatherviz configure` \
             to store a default city."
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_config() -> Config {
        Config {
            api_key: Some("FILE_KEY".to_string()),
            default_city: Some("Zhengzhou".to_string()),
        }
    }

    #[test]
    fn flag_beats_environment_and_file() {
        let key = resolve_api_key(
            Some("FLAG_KEY".to_string()),
            Some("ENV_KEY".to_string()),
            &stored_config(),
        )
        .unwrap();
        assert_eq!(key, "FLAG_KEY");
    }

    #[test]
    fn environment_beats_file() {
        let key = resolve_api_key(None, Some("ENV_KEY".to_string()), &stored_config()).unwrap();
        assert_eq!(key, "ENV_KEY");

        let city = resolve_city(None, Some("Oslo".to_string()), &stored_config()).unwrap();
        assert_eq!(city, "Oslo");
    }

    #[test]
    fn file_is_the_last_resort() {
        let key = resolve_api_key(None, None, &stored_config()).unwrap();
        assert_eq!(key, "FILE_KEY");

        let city = resolve_city(None, None, &stored_config()).unwrap();
        assert_eq!(city, "Zhengzhou");
    }

    #[test]
    fn missing_api_key_errors_with_hint() {
        let err = resolve_api_key(None, None, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("weatherviz configure"));
    }

    #[test]
    fn missing_city_errors_with_hint() {
        let err = resolve_city(None, None, &Config::default()).unwrap_err();
        assert!(err.to_string().contains(CITY_ENV));
    }
}
