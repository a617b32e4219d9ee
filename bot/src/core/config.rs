//! # QClip Configuration System
//!
//! File: bot/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the bot configuration. Only two
//! settings exist today: where the verse dataset lives and which Telegram
//! bot token to poll with.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (`--data`, `--token`; the token also reads `TELEGRAM_BOT_TOKEN`)
//! 2. Project-specific `.qclip.toml` in the current directory or ancestors
//! 3. User-specific `<config dir>/qclip/config.toml`
//! 4. Default values defined in the code
//!
//! Paths are `~`-expanded after merging and the result is validated before
//! any command uses it.
//!
//! ## Examples
//!
//! ```toml
//! [telegram]
//! token = "123456:ABC..."
//!
//! [dataset]
//! path = "~/data/QClip.csv"
//! ```
//!
//! ```rust
//! let cfg = config::resolve(Overrides { data: None, token: None })?;
//! let dataset = Dataset::load(&cfg.dataset.path)?;
//! ```
//!
use crate::core::error::{QclipError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
}

/// Settings for the Telegram connection.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TelegramConfig {
    /// Bot API token. Usually supplied through `TELEGRAM_BOT_TOKEN` instead.
    pub token: Option<String>,
}

/// Settings for the verse dataset.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    /// Path to the CSV file (can use ~). Will be expanded.
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

fn default_dataset_path() -> String {
    "QClip.csv".to_string()
}

/// Values given on the command line. They win over every file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub data: Option<PathBuf>,
    pub token: Option<String>,
}

const PROJECT_CONFIG_FILENAME: &str = ".qclip.toml";

/// Loads the effective configuration for the current working directory.
pub fn resolve(overrides: Overrides) -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    resolve_from(&current_dir, overrides)
}

/// Same as [`resolve`], searching for the project file upwards from `start_dir`.
pub fn resolve_from(start_dir: &Path, overrides: Overrides) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config(start_dir)?;
    let merged = merge_configs(user_config.unwrap_or_default(), project_config);
    let mut effective = apply_overrides(merged, overrides);
    expand_config_paths(&mut effective);
    validate_config(&effective).context("Configuration validation failed")?;
    debug!(
        "Final configuration: dataset={}, token set={}",
        effective.dataset.path,
        effective.telegram.token.is_some()
    );
    Ok(effective)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("org", "QClip", "qclip") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start_dir: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.qclip.toml) found.");
        Ok(None)
    }
}

fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path = start_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    Config {
        telegram: TelegramConfig {
            token: project_cfg.telegram.token.or(user.telegram.token),
        },
        dataset: DatasetConfig {
            path: if project_cfg.dataset.path != default_dataset_path() {
                project_cfg.dataset.path
            } else {
                user.dataset.path
            },
        },
    }
}

fn apply_overrides(mut config: Config, overrides: Overrides) -> Config {
    if let Some(data) = overrides.data {
        config.dataset.path = data.to_string_lossy().into_owned();
    }
    if let Some(token) = overrides.token {
        config.telegram.token = Some(token);
    }
    config
}

fn expand_config_paths(config: &mut Config) {
    config.dataset.path = shellexpand::tilde(&config.dataset.path).into_owned();
    debug!("Expanded dataset path: {}", config.dataset.path);
}

fn validate_config(config: &Config) -> Result<()> {
    if config.dataset.path.trim().is_empty() {
        return Err(anyhow!(QclipError::Config(
            "Dataset path cannot be empty.".to_string()
        )));
    }
    if let Some(token) = &config.telegram.token {
        if token.trim().is_empty() {
            return Err(anyhow!(QclipError::Config(
                "Telegram token is set but empty.".to_string()
            )));
        }
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [telegram]
            token = "123:abc"

            [dataset]
            path = "~/data/QClip.csv"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.telegram.token.as_deref(), Some("123:abc"));
        assert_eq!(config.dataset.path, "~/data/QClip.csv"); // Not yet expanded
    }

    #[test]
    fn test_deserialize_defaults_and_unknown_fields() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.dataset.path, "QClip.csv");

        let err = toml::from_str::<Config>("[dataset]\nfile = \"x.csv\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_merge_prefers_project_values() {
        let user = Config {
            telegram: TelegramConfig {
                token: Some("user-token".into()),
            },
            dataset: DatasetConfig {
                path: "/user/QClip.csv".into(),
            },
        };
        let project = Config {
            telegram: TelegramConfig { token: None },
            dataset: DatasetConfig {
                path: "/project/QClip.csv".into(),
            },
        };

        let merged = merge_configs(user.clone(), Some(project));
        assert_eq!(merged.telegram.token.as_deref(), Some("user-token"));
        assert_eq!(merged.dataset.path, "/project/QClip.csv");

        let merged = merge_configs(user.clone(), Some(Config::default()));
        assert_eq!(merged.dataset.path, "/user/QClip.csv");

        assert_eq!(merge_configs(user.clone(), None), user);
    }

    #[test]
    fn test_overrides_win() {
        let config = apply_overrides(
            Config::default(),
            Overrides {
                data: Some(PathBuf::from("/tmp/other.csv")),
                token: Some("cli-token".into()),
            },
        );
        assert_eq!(config.dataset.path, "/tmp/other.csv");
        assert_eq!(config.telegram.token.as_deref(), Some("cli-token"));
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            dataset: DatasetConfig {
                path: "~/qclip/QClip.csv".to_string(),
            },
            ..Default::default()
        };

        expand_config_paths(&mut config);

        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(
            config.dataset.path,
            home_dir.join("qclip/QClip.csv").to_string_lossy()
        );
    }

    #[test]
    fn test_validate_config_rejects_empty_values() {
        let config = Config {
            dataset: DatasetConfig {
                path: "  ".into(),
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));

        let config = Config {
            telegram: TelegramConfig {
                token: Some(String::new()),
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_project_config_found_in_ancestor() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILENAME),
            "[dataset]\npath = \"verses.csv\"\n",
        )
        .unwrap();

        let found = find_project_config_path(&nested).unwrap();
        assert_eq!(found, temp_dir.path().join(PROJECT_CONFIG_FILENAME));

        let loaded = load_project_config(&nested).unwrap().unwrap();
        assert_eq!(loaded.dataset.path, "verses.csv");
    }

    #[test]
    fn test_project_config_search_stops_at_git_dir() {
        let temp_dir = tempdir().unwrap();
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILENAME),
            "[dataset]\npath = \"outer.csv\"\n",
        )
        .unwrap();
        let repo = temp_dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();

        assert!(find_project_config_path(&repo).is_none());
    }

    #[test]
    fn test_invalid_project_toml_is_an_error() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "[dataset\n").unwrap();
        let result = load_project_config(temp_dir.path());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse TOML"));
    }
}
