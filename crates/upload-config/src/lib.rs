use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, UTF_8};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "user-upload";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_DELIMITER: u8 = b',';

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub import: ImportConfig,
}

/// Fallback credentials used when the matching flag is not given.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportConfig {
    pub delimiter: u8,
    /// Encoding of the CSV input; UTF-8 unless `[import] encoding` names another.
    pub encoding: &'static Encoding,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            encoding: UTF_8,
        }
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file was read. Holds the default location that was looked at, if
    /// one could be derived from the environment.
    Defaults(Option<PathBuf>),
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: ConfigSource,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file {0} holds a password but is readable by other users (chmod 600)")]
    InsecurePermissions(PathBuf),
    #[error("invalid import.delimiter value: {0:?} (expected a single ASCII character)")]
    InvalidDelimiter(String),
    #[error("invalid import.encoding value: {0:?}")]
    InvalidEncoding(String),
    #[error("invalid database.{field} value: must not be empty")]
    EmptyDatabaseField { field: &'static str },
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

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    database: DatabaseFile,
    #[serde(default)]
    import: ImportFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DatabaseFile {
    host: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ImportFile {
    delimiter: Option<String>,
    encoding: Option<String>,
}

/// Loads the configuration once.
///
/// An explicit path must name an existing file. Without one, the default
/// location is tried and a missing file (or no derivable location) yields the
/// built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfigPath(path.to_path_buf()));
        }
        if !path.exists() {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return from_file(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => from_file(&path),
        searched => Ok(LoadedConfig {
            config: AppConfig::default(),
            source: ConfigSource::Defaults(searched),
        }),
    }
}

/// `$XDG_CONFIG_HOME/user-upload/config.toml`, else
/// `~/.config/user-upload/config.toml`. A relative `XDG_CONFIG_HOME` is
/// ignored.
pub fn default_config_path() -> Option<PathBuf> {
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|dir| dir.is_absolute())
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;
    Some(base.join(APP_DIR).join(CONFIG_FILENAME))
}

fn from_file(path: &Path) -> Result<LoadedConfig> {
    let read_err = |source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    };
    let contents = fs::read_to_string(path).map_err(read_err)?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if parsed.database.password.is_some() {
        let metadata = fs::metadata(path).map_err(read_err)?;
        guard_secret(path, &metadata)?;
    }
    Ok(LoadedConfig {
        config: build_config(parsed)?,
        source: ConfigSource::File(path.to_path_buf()),
    })
}

fn build_config(parsed: ConfigFile) -> Result<AppConfig> {
    let ConfigFile { database, import } = parsed;
    let mut config = AppConfig {
        database: DatabaseConfig {
            host: non_empty("host", database.host)?,
            username: non_empty("username", database.username)?,
            password: database.password,
        },
        import: ImportConfig::default(),
    };
    if let Some(raw) = import.delimiter {
        config.import.delimiter = parse_delimiter(&raw)?;
    }
    if let Some(label) = import.encoding {
        config.import.encoding = parse_encoding(&label)?;
    }
    Ok(config)
}

fn non_empty(field: &'static str, value: Option<String>) -> Result<Option<String>> {
    match value {
        Some(value) if value.trim().is_empty() => Err(ConfigError::EmptyDatabaseField { field }),
        other => Ok(other),
    }
}

fn parse_delimiter(raw: &str) -> Result<u8> {
    match raw.as_bytes() {
        [byte] if byte.is_ascii() && !matches!(byte, b'"' | b'\n' | b'\r') => Ok(*byte),
        _ => Err(ConfigError::InvalidDelimiter(raw.to_string())),
    }
}

/// Only encodings that keep ASCII bytes as ASCII can be split on the
/// delimiter before decoding, which rules out UTF-16.
fn parse_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .filter(|encoding| encoding.is_ascii_compatible())
        .ok_or_else(|| ConfigError::InvalidEncoding(label.to_string()))
}

#[cfg(unix)]
fn guard_secret(path: &Path, metadata: &fs::Metadata) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    if metadata.permissions().mode() & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn guard_secret(_path: &Path, _metadata: &fs::Metadata) -> Result<()> {
    Ok(())
}
