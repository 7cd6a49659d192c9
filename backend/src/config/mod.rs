//! Central module for application-wide configuration settings.
//!
//! Settings come from three layers: built-in defaults, an optional TOML file, and
//! command line flags (each with a `CONFOPS_*` environment variable). Later layers win.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::services::navigation::DEFAULT_HISTORY_LIMIT;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_USER: &str = "u-ceo";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about = "ConfOps dashboard backend", long_about = None)]
pub struct Args {
    /// Path to a TOML config file
    #[arg(short, long, env = "CONFOPS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, env = "CONFOPS_BIND")]
    pub bind: Option<String>,

    /// JSON file with the user directory; the built-in roster is used when absent
    #[arg(long, env = "CONFOPS_USERS")]
    pub users: Option<PathBuf>,

    /// User the session starts as
    #[arg(long, env = "CONFOPS_DEFAULT_USER")]
    pub default_user: Option<String>,

    /// Maximum number of entries kept in the navigation history
    #[arg(long, env = "CONFOPS_HISTORY_LIMIT")]
    pub history_limit: Option<usize>,

    /// tracing filter directive, e.g. `info` or `confops_backend=debug`
    #[arg(long, env = "CONFOPS_LOG")]
    pub log_filter: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
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

    #[error("invalid bind address {0:?}")]
    InvalidBind(String),

    #[error("history limit must be at least 1")]
    InvalidHistoryLimit,

    #[error("invalid log filter {filter:?}: {source}")]
    InvalidLogFilter {
        filter: String,
        #[source]
        source: ParseError,
    },
}

/// The TOML file layout. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    bind: Option<String>,
    users: Option<PathBuf>,
    default_user: Option<String>,
    history_limit: Option<usize>,
    log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind: SocketAddr,
    pub users: Option<PathBuf>,
    pub default_user: String,
    pub history_limit: usize,
    pub log_filter: String,
}

impl Config {
    pub fn load(args: Args) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => read_file(path)?,
            None => FileConfig::default(),
        };
        Self::merge(file, args)
    }

    fn merge(file: FileConfig, args: Args) -> Result<Self, ConfigError> {
        let bind = args
            .bind
            .or(file.bind)
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind.clone()))?;

        let history_limit = args
            .history_limit
            .or(file.history_limit)
            .unwrap_or(DEFAULT_HISTORY_LIMIT);
        if history_limit == 0 {
            return Err(ConfigError::InvalidHistoryLimit);
        }

        let log_filter = args
            .log_filter
            .or(file.log_filter)
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        if let Err(source) = EnvFilter::try_new(&log_filter) {
            return Err(ConfigError::InvalidLogFilter {
                filter: log_filter,
                source,
            });
        }

        Ok(Self {
            bind,
            users: args.users.or(file.users),
            default_user: args
                .default_user
                .or(file.default_user)
                .unwrap_or_else(|| DEFAULT_USER.to_string()),
            history_limit,
            log_filter,
        })
    }

    /// The tracing filter for the subscriber. Only valid directives get past `load`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.log_filter)
    }
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::load(Args::default()).unwrap();
        assert_eq!(config.bind, DEFAULT_BIND.parse::<SocketAddr>().unwrap());
        assert_eq!(config.users, None);
        assert_eq!(config.default_user, DEFAULT_USER);
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "bind = \"0.0.0.0:8080\"\nhistory_limit = 5\ndefault_user = \"u-hr\""
        )
        .unwrap();

        let config = Config::load(Args {
            config: Some(file.path().to_path_buf()),
            history_limit: Some(7),
            ..Args::default()
        })
        .unwrap();

        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.default_user, "u-hr");
        assert_eq!(config.history_limit, 7);
    }

    #[test]
    fn rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 9").unwrap();
        let err = Config::load(Args {
            config: Some(file.path().to_path_buf()),
            ..Args::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn rejects_invalid_values() {
        let err = Config::load(Args {
            bind: Some("localhost".into()),
            ..Args::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBind(addr) if addr == "localhost"));

        let err = Config::load(Args {
            history_limit: Some(0),
            ..Args::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHistoryLimit));
    }

    #[test]
    fn rejects_malformed_log_filter() {
        let err = Config::load(Args {
            log_filter: Some("confops_backend=loud".into()),
            ..Args::default()
        })
        .unwrap_err();
        match err {
            ConfigError::InvalidLogFilter { filter, .. } => {
                assert_eq!(filter, "confops_backend=loud")
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let config = Config::load(Args {
            log_filter: Some("info,confops_backend=debug".into()),
            ..Args::default()
        })
        .unwrap();
        assert_eq!(config.log_filter, "info,confops_backend=debug");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::load(Args {
            config: Some(PathBuf::from("/nonexistent/confops.toml")),
            ..Args::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
