//! Configuration loader
//!
//! Loads the hub client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `REPORTLINK_CLIENT_ID`: Client identifier issued by the hub
//! - `REPORTLINK_KID`: Key identifier (`<client_id>.<suffix>`)
//! - `REPORTLINK_SCOPE`: Scope requested during token exchange
//! - `REPORTLINK_ALGORITHM`: `RS256` or `ES384`
//! - `REPORTLINK_PRIVATE_KEY`: Inline PEM private key
//! - `REPORTLINK_PRIVATE_KEY_PATH`: PEM file, used when no inline key is set
//! - `REPORTLINK_USE_PRODUCTION`: Talk to production (true/false, default false)
//! - `REPORTLINK_BASE_URL`: Origin override for all requests
//! - `REPORTLINK_AUDIENCE`: Assertion audience override
//! - `REPORTLINK_TIMEOUT_SECS`: Request timeout in seconds (default 30)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./reportlink.toml`
//! 2. `./reportlink.json`
//! 3. `./config.toml`
//! 4. `./config.json`
//!
//! Key material is only read here, never parsed. A malformed key is
//! reported when the first assertion is signed.

use std::path::{Path, PathBuf};

use reportlink_domain::constants::DEFAULT_TIMEOUT_SECS;
use reportlink_domain::{
    ClientCredentialConfig, ConfigError, HierarchicDesignator, HubConfig, HubEnvironment,
    SigningAlgorithm,
};
use serde::Deserialize;

use crate::integrations::reportstream::HubEndpoints;

const CONFIG_FILE_NAMES: [&str; 4] =
    ["reportlink.toml", "reportlink.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns the file loading error when neither source yields a complete
/// configuration.
pub fn load() -> Result<HubConfig, ConfigError> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from the process environment
///
/// # Errors
/// Returns `ConfigError::MissingVar` for an absent required variable and
/// `ConfigError::InvalidValue` for one that does not parse.
pub fn load_from_env() -> Result<HubConfig, ConfigError> {
    load_from_vars(|key| std::env::var(key).ok())
}

/// Load configuration from an arbitrary variable lookup
///
/// Same rules as [`load_from_env`]. Empty values count as unset.
pub fn load_from_vars<F>(lookup: F) -> Result<HubConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
    let required = |key: &str| var(key).ok_or_else(|| ConfigError::MissingVar(key.to_string()));

    let client_id = required("REPORTLINK_CLIENT_ID")?;
    let kid = required("REPORTLINK_KID")?;
    let scope = required("REPORTLINK_SCOPE")?;
    let algorithm: SigningAlgorithm = required("REPORTLINK_ALGORITHM")?.parse()?;

    let private_key = match var("REPORTLINK_PRIVATE_KEY") {
        Some(pem) => pem,
        None => {
            let path = required("REPORTLINK_PRIVATE_KEY_PATH")?;
            read_key(Path::new(&path))?
        }
    };

    let use_production = match var("REPORTLINK_USE_PRODUCTION") {
        Some(value) => parse_bool("REPORTLINK_USE_PRODUCTION", &value)?,
        None => false,
    };

    let timeout_secs = match var("REPORTLINK_TIMEOUT_SECS") {
        Some(value) => value.trim().parse::<u64>().map_err(|e| {
            ConfigError::invalid("REPORTLINK_TIMEOUT_SECS", format!("{value:?}: {e}"))
        })?,
        None => DEFAULT_TIMEOUT_SECS,
    };

    let credentials = ClientCredentialConfig::new(client_id, kid, scope, private_key, algorithm);
    let mut config = HubConfig::new(credentials, use_production);
    config.base_url = var("REPORTLINK_BASE_URL");
    config.audience = var("REPORTLINK_AUDIENCE");
    config.timeout_secs = timeout_secs;

    validate(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is detected
/// by file extension.
///
/// # Errors
/// Returns `ConfigError::NotFound` when no file exists, `Read`/`Parse` for
/// unreadable or malformed files and `InvalidValue` for bad settings.
pub fn load_from_file(path: Option<PathBuf>) -> Result<HubConfig, ConfigError> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::NotFound(p.display().to_string()));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ConfigError::NotFound("no config file in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Read {
        path: config_path.display().to_string(),
        reason: e.to_string(),
    })?;

    let file = parse_config(&contents, &config_path)?;
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    file.into_hub_config(base_dir)
}

/// Probe the current working directory for a config file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    CONFIG_FILE_NAMES.iter().map(|name| cwd.join(name)).find(|path| path.exists())
}

/// On-disk configuration layout
#[derive(Debug, Deserialize)]
struct FileConfig {
    client_id: String,
    kid: String,
    scope: String,
    algorithm: SigningAlgorithm,
    #[serde(default)]
    private_key: Option<String>,
    #[serde(default)]
    private_key_path: Option<PathBuf>,
    #[serde(default)]
    use_production: bool,
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    audience: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
    #[serde(default)]
    receiving_application: Option<HierarchicDesignator>,
    #[serde(default)]
    receiving_facility: Option<HierarchicDesignator>,
}

impl FileConfig {
    fn into_hub_config(self, base_dir: &Path) -> Result<HubConfig, ConfigError> {
        let private_key = match (self.private_key, self.private_key_path) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::invalid(
                    "private_key",
                    "set either private_key or private_key_path, not both",
                ))
            }
            (Some(pem), None) => pem,
            (None, Some(path)) => read_key(&base_dir.join(path))?,
            (None, None) => {
                return Err(ConfigError::invalid(
                    "private_key",
                    "one of private_key or private_key_path is required",
                ))
            }
        };

        let credentials = ClientCredentialConfig::new(
            self.client_id,
            self.kid,
            self.scope,
            private_key,
            self.algorithm,
        );

        validate(HubConfig {
            credentials,
            environment: HubEnvironment::from_production_flag(self.use_production),
            audience: self.audience,
            base_url: self.base_url,
            timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            receiving_application: self.receiving_application.unwrap_or_default(),
            receiving_facility: self.receiving_facility.unwrap_or_default(),
        })
    }
}

/// Parse file contents by extension (`.json` or `.toml`)
fn parse_config(contents: &str, path: &Path) -> Result<FileConfig, ConfigError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ConfigError::Parse(format!("Invalid JSON format: {e}"))),
        other => Err(ConfigError::UnsupportedFormat(other.to_string())),
    }
}

fn validate(config: HubConfig) -> Result<HubConfig, ConfigError> {
    let credentials = &config.credentials;
    for (field, value) in [
        ("client_id", &credentials.client_id),
        ("kid", &credentials.kid),
        ("scope", &credentials.scope),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::invalid(field, "must not be empty"));
        }
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::invalid("timeout_secs", "must be greater than zero"));
    }

    if config.base_url.is_some() {
        HubEndpoints::parse(&config.origin())?;
    }

    if !credentials.kid.starts_with(&format!("{}.", credentials.client_id)) {
        tracing::warn!(
            client_id = %credentials.client_id,
            kid = %credentials.kid,
            "kid does not start with the client id; the hub may reject the assertion"
        );
    }

    Ok(config)
}

fn read_key(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Parse a boolean setting
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::invalid(key, format!("{other:?} is not a boolean"))),
    }
}
