use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use unbored_core::ApiConfig;

/// Config file looked for next to the process working directory.
const LOCAL_CONFIG_FILE: &str = "unbored.toml";

/// Application name, used for the per-user config directory.
const APP_NAME: &str = "unbored";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// How the server is being run. Development keeps browsers from caching
/// pages and assets between edits; production leaves caching alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Development,
    Production,
}

impl RunMode {
    pub fn is_development(self) -> bool {
        matches!(self, RunMode::Development)
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(RunMode::Development),
            "production" | "prod" => Ok(RunMode::Production),
            other => Err(format!(
                "unknown run mode '{}', expected 'development' or 'production'",
                other
            )),
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Development => write!(f, "development"),
            RunMode::Production => write!(f, "production"),
        }
    }
}

/// Configuration for the web front-end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the server binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Port the server binds to.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
    #[serde(default = "default_mode")]
    pub mode: RunMode,
    /// Directory holding the page templates.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,
    /// Directory of static assets served at the site root.
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
    /// Remote activity API settings.
    #[serde(default)]
    pub api: ApiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            listen_port: default_listen_port(),
            mode: default_mode(),
            templates_dir: default_templates_dir(),
            public_dir: default_public_dir(),
            api: ApiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(config)
    }

    /// Resolves configuration in order: an explicit path, `unbored.toml` in
    /// the working directory, the per-user config file, then built-in
    /// defaults. Environment overrides are applied on top in every case.
    ///
    /// An explicit path that cannot be read is an error; the fallback
    /// locations are simply skipped when absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => {
                let local = PathBuf::from(LOCAL_CONFIG_FILE);
                if local.exists() {
                    Self::load_from_file(&local)?
                } else if let Some(user) = get_user_config_file() {
                    if user.exists() {
                        Self::load_from_file(&user)?
                    } else {
                        Self::default()
                    }
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Environment overrides; unparseable values are ignored.
    fn apply_env_overrides(&mut self) {
        if let Some(mode) = env::var("UNBORED_MODE").ok().and_then(|s| s.parse().ok()) {
            self.mode = mode;
        }

        if let Some(port) = env::var("UNBORED_PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.listen_port = port;
        }

        if let Ok(url) = env::var("UNBORED_API_URL") {
            if !url.is_empty() {
                self.api.base_url = url;
            }
        }
    }

    /// The socket address the server should bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        let ip: IpAddr = self.listen_addr.parse()?;
        Ok(SocketAddr::new(ip, self.listen_port))
    }
}

/// Per-user config file path, `~/.config/unbored/config.toml`.
fn get_user_config_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join(APP_NAME).join("config.toml"))
}

fn default_listen_addr() -> String {
    "127.0.0.1".to_string()
}

fn default_listen_port() -> u16 {
    3000
}

fn default_mode() -> RunMode {
    RunMode::Development
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_serve_the_local_page() {
        let config = AppConfig::default();
        assert_eq!(config.listen_addr, "127.0.0.1");
        assert_eq!(config.listen_port, 3000);
        assert_eq!(config.mode, RunMode::Development);
        assert_eq!(config.templates_dir, PathBuf::from("templates"));
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.api.base_url, "https://bored-api.appbrewery.com");
    }

    #[test]
    fn test_loads_a_full_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
listen_addr = "0.0.0.0"
listen_port = 8080
mode = "production"
templates_dir = "views"
public_dir = "assets"

[api]
base_url = "http://localhost:9005"
timeout_secs = 3
"#
        )
        .unwrap();

        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0");
        assert_eq!(config.listen_port, 8080);
        assert_eq!(config.mode, RunMode::Production);
        assert_eq!(config.templates_dir, PathBuf::from("views"));
        assert_eq!(config.api.base_url, "http://localhost:9005");
        assert_eq!(config.api.timeout_secs, 3);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "listen_port = 4000").unwrap();

        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.listen_port, 4000);
        assert_eq!(config.listen_addr, "127.0.0.1");
        assert_eq!(config.mode, RunMode::Development);
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn test_unreadable_file_reports_a_read_error() {
        let err = AppConfig::load_from_file(Path::new("/nonexistent/unbored.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_invalid_toml_reports_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "listen_port = \"not a number\"").unwrap();

        let err = AppConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_run_modes_parse_from_common_spellings() {
        assert_eq!("development".parse::<RunMode>(), Ok(RunMode::Development));
        assert_eq!("dev".parse::<RunMode>(), Ok(RunMode::Development));
        assert_eq!("PRODUCTION".parse::<RunMode>(), Ok(RunMode::Production));
        assert_eq!("prod".parse::<RunMode>(), Ok(RunMode::Production));
        assert!("staging".parse::<RunMode>().is_err());
    }

    // Environment overrides mutate process-wide state; they are exercised
    // in their own test binary (tests/env_overrides.rs) so no thread here
    // ever touches the environment while the tempfile tests read it.

    #[test]
    fn test_socket_addr_combines_address_and_port() {
        let config = AppConfig::default();
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }
}
