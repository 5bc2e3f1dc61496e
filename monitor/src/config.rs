use std::fs;
use std::path::{Path, PathBuf};

use monitor_ui_settings_nav::NavMetrics;
use serde::Deserialize;
use thiserror::Error;

/// Errors emitted while reading the UI config file.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("config IO failed")]
    Io(#[from] std::io::Error),
    #[error("config JSON failed")]
    Json(#[from] serde_json::Error),
}

/// User-tunable UI options read from `ui.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct UiConfig {
    /// Section id opened at startup. Unknown ids highlight nothing.
    pub(crate) initial_section: Option<String>,
    pub(crate) nav: NavMetrics,
}

/// Status describing how the config was obtained.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the config from disk.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: UiConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    fn new(config: UiConfig, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (UiConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

/// Load the config, degrading to defaults on any failure.
pub(crate) fn load_or_default() -> UiConfig {
    let path = config_path();
    match load_config_from_path(&path) {
        Ok(load) => {
            let (config, status) = load.into_parts();
            match status {
                ConfigLoadStatus::Loaded => {
                    log::info!("ui config loaded from {}", path.display());
                },
                ConfigLoadStatus::Missing => {
                    log::debug!("no ui config at {}", path.display());
                },
                ConfigLoadStatus::Invalid(message) => {
                    log::warn!(
                        "ui config {} invalid: {message}",
                        path.display()
                    );
                },
            }
            config
        },
        Err(err) => {
            log::warn!("ui config read failed: {err}");
            UiConfig::default()
        },
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                UiConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match parse_config(&data) {
        Ok(config) => Ok(ConfigLoad::new(config, ConfigLoadStatus::Loaded)),
        Err(err) => Ok(ConfigLoad::new(
            UiConfig::default(),
            ConfigLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn parse_config(data: &str) -> Result<UiConfig, ConfigError> {
    Ok(serde_json::from_str(data)?)
}

fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("codex-monitor")
            .join("ui.json");
    }

    std::env::temp_dir().join("codex-monitor").join("ui.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use monitor_ui_settings_nav::NavMetrics;

    use super::{ConfigLoadStatus, UiConfig, load_config_from_path};

    fn test_temp_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_nanos())
            .unwrap_or_default();
        let dir = std::env::temp_dir().join(format!(
            "codex-monitor-config-{name}-{}-{nanos}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn given_missing_file_when_loading_then_defaults_with_missing_status() {
        let root = test_temp_dir("missing");

        let load =
            load_config_from_path(&root.join("ui.json")).expect("load config");
        let (config, status) = load.into_parts();

        assert_eq!(config, UiConfig::default());
        assert_eq!(status, ConfigLoadStatus::Missing);
        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn given_malformed_json_when_loading_then_defaults_with_invalid_status() {
        let root = test_temp_dir("invalid");
        let path = root.join("ui.json");
        fs::write(&path, "{ not json").expect("write config");

        let (config, status) =
            load_config_from_path(&path).expect("load config").into_parts();

        assert_eq!(config, UiConfig::default());
        assert!(matches!(status, ConfigLoadStatus::Invalid(_)));
        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn given_valid_json_when_loading_then_values_are_applied() {
        let root = test_temp_dir("valid");
        let path = root.join("ui.json");
        fs::write(
            &path,
            r#"{ "initial_section": "git", "nav": { "width": 240.0 } }"#,
        )
        .expect("write config");

        let (config, status) =
            load_config_from_path(&path).expect("load config").into_parts();

        assert_eq!(status, ConfigLoadStatus::Loaded);
        assert_eq!(config.initial_section.as_deref(), Some("git"));
        assert_eq!(config.nav.width, 240.0);
        assert_eq!(
            config.nav.button_height,
            NavMetrics::default().button_height
        );
        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn given_directory_path_when_loading_then_io_error_is_returned() {
        let root = test_temp_dir("directory");

        let result = load_config_from_path(&root);

        assert!(result.is_err());
        let _ = fs::remove_dir_all(root);
    }
}
