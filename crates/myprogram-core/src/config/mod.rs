//! Configuration loaded from the process environment
//!
//! | Variable    | Description                                  | Default |
//! |-------------|----------------------------------------------|---------|
//! | `DEBUG`     | Enables debug mode when equal to `true`      | `false` |
//! | `LOG_LEVEL` | Log level name (`DEBUG`, `INFO`, `WARNING`…) | `INFO`  |

use serde::Serialize;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::{APP_NAME, VERSION};

/// Environment variable toggling debug mode
pub const DEBUG_ENV: &str = "DEBUG";

/// Environment variable holding the log level name
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Log level used when `LOG_LEVEL` is unset
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Name of the config directory created under the user's home
pub const CONFIG_DIR_NAME: &str = ".myprogram";

/// MyProgram configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    app_name: &'static str,
    version: &'static str,
    debug: bool,
    log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: APP_NAME,
            version: VERSION,
            debug: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the current process environment
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug = lookup(DEBUG_ENV)
            .map(|value| value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let log_level = lookup(LOG_LEVEL_ENV).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let config = Self {
            debug,
            log_level,
            ..Self::default()
        };
        tracing::trace!(%config, log_level = %config.log_level, "configuration loaded");
        config
    }

    pub fn app_name(&self) -> &str {
        self.app_name
    }

    pub fn version(&self) -> &str {
        self.version
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Resolve `~/.myprogram`, creating it if it does not exist yet
    pub fn config_dir(&self) -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(Error::HomeDirUnavailable)?;
        resolve_config_dir_in(&home)
    }

    /// Filter directive for `tracing_subscriber::EnvFilter`
    ///
    /// The debug flag wins over `LOG_LEVEL`. Level names are matched
    /// case-insensitively; `WARNING` and `CRITICAL` map to `warn` and
    /// `error`. Anything unrecognised falls back to `info`.
    pub fn tracing_directive(&self) -> String {
        if self.debug {
            return "debug".to_string();
        }

        match self.log_level.to_ascii_lowercase().as_str() {
            level @ ("trace" | "debug" | "info" | "warn" | "error") => level.to_string(),
            "warning" => "warn".to_string(),
            "critical" => "error".to_string(),
            _ => "info".to_string(),
        }
    }
}

impl fmt::Display for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config(app_name={}, version={}, debug={})",
            self.app_name, self.version, self.debug
        )
    }
}

/// Create `<home>/.myprogram` and any missing parents, returning its path
pub fn resolve_config_dir_in(home: &Path) -> Result<PathBuf> {
    let dir = home.join(CONFIG_DIR_NAME);
    fs::create_dir_all(&dir).map_err(|source| Error::ConfigDirCreation {
        path: dir.clone(),
        source,
    })?;
    tracing::debug!(path = %dir.display(), "config directory ready");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn config_with(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = config_with(&[]);
        assert_eq!(config.app_name(), "MyProgram");
        assert_eq!(config.version(), "0.1.0");
        assert!(!config.debug());
        assert_eq!(config.log_level(), "INFO");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_config_debug_from_env() {
        assert!(config_with(&[("DEBUG", "true")]).debug());
        assert!(config_with(&[("DEBUG", "TRUE")]).debug());
        assert!(config_with(&[("DEBUG", "True")]).debug());
        assert!(!config_with(&[("DEBUG", "false")]).debug());
        assert!(!config_with(&[("DEBUG", "1")]).debug());
        assert!(!config_with(&[("DEBUG", "")]).debug());
    }

    #[test]
    fn test_config_log_level_from_env() {
        let config = config_with(&[("LOG_LEVEL", "DEBUG")]);
        assert_eq!(config.log_level(), "DEBUG");
        assert!(!config.debug());
    }

    #[test]
    fn test_config_display() {
        let rendered = config_with(&[]).to_string();
        assert_eq!(
            rendered,
            "Config(app_name=MyProgram, version=0.1.0, debug=false)"
        );

        let rendered = config_with(&[("DEBUG", "true")]).to_string();
        assert!(rendered.ends_with("debug=true)"));
    }

    #[test]
    fn test_config_serialize() {
        let value = serde_json::to_value(config_with(&[("LOG_LEVEL", "WARNING")])).unwrap();
        assert_eq!(value["app_name"], "MyProgram");
        assert_eq!(value["version"], "0.1.0");
        assert_eq!(value["debug"], false);
        assert_eq!(value["log_level"], "WARNING");
    }

    #[test]
    fn test_tracing_directive() {
        assert_eq!(config_with(&[]).tracing_directive(), "info");
        assert_eq!(
            config_with(&[("LOG_LEVEL", "WARNING")]).tracing_directive(),
            "warn"
        );
        assert_eq!(
            config_with(&[("LOG_LEVEL", "critical")]).tracing_directive(),
            "error"
        );
        assert_eq!(
            config_with(&[("LOG_LEVEL", "Trace")]).tracing_directive(),
            "trace"
        );
        assert_eq!(
            config_with(&[("LOG_LEVEL", "verbose")]).tracing_directive(),
            "info"
        );
        assert_eq!(
            config_with(&[("DEBUG", "true"), ("LOG_LEVEL", "ERROR")]).tracing_directive(),
            "debug"
        );
    }

    #[test]
    fn test_config_dir_is_idempotent() {
        let home = TempDir::new().unwrap();

        let first = resolve_config_dir_in(home.path()).unwrap();
        assert!(first.is_dir());
        assert_eq!(first.file_name().unwrap(), ".myprogram");
        assert_eq!(first, home.path().join(".myprogram"));

        let second = resolve_config_dir_in(home.path()).unwrap();
        assert_eq!(first, second);
        assert!(second.is_dir());
    }

    #[test]
    fn test_config_dir_creates_missing_parents() {
        let root = TempDir::new().unwrap();
        let home = root.path().join("nested").join("home");

        let dir = resolve_config_dir_in(&home).unwrap();
        assert!(dir.is_dir());
        assert_eq!(dir, home.join(".myprogram"));
    }

    #[test]
    fn test_config_dir_creation_failure_propagates() {
        let root = TempDir::new().unwrap();
        let not_a_dir = root.path().join("home-file");
        std::fs::write(&not_a_dir, "not a directory").unwrap();

        let err = resolve_config_dir_in(&not_a_dir).unwrap_err();
        assert!(matches!(err, Error::ConfigDirCreation { .. }));
        assert_eq!(err.code(), "E601");
    }
}
