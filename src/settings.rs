//! Provisioning settings (devcerts.yaml) and their defaults
//!
//! Settings are layered: built-in defaults, then the optional `devcerts.yaml`
//! at the project root, then command line overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DevcertsError, Result};

/// Settings file name looked up at the project root
pub const SETTINGS_FILE: &str = "devcerts.yaml";

/// Default certificate tool executable
pub const DEFAULT_TOOL: &str = "mkcert";

const DEFAULT_CERT_DIR: &str = "certs";
const DEFAULT_KEY_FILE: &str = "localhost-key.pem";
const DEFAULT_CERT_FILE: &str = "localhost.pem";
const DEFAULT_SERVER_CONFIG: &str = "hub/main.py";
const DEFAULT_MARKER: &str = "ssl_context";
const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// Hosts the certificate is issued for when none are configured.
/// The last entry is the LAN address the hub is served on.
pub const DEFAULT_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "192.168.0.16"];

/// Settings for one provisioning run. All paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Output directory for the key/certificate pair
    pub cert_dir: String,
    /// Private key file name inside `cert_dir`
    pub key_file: String,
    /// Certificate file name inside `cert_dir`
    pub cert_file: String,
    /// Hostnames and IP literals the certificate covers
    pub hosts: Vec<String>,
    /// Server startup file whose TLS line gets patched
    pub server_config: PathBuf,
    /// Substring identifying the TLS line
    pub marker: String,
    /// Version control ignore list
    pub ignore_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cert_dir: DEFAULT_CERT_DIR.to_string(),
            key_file: DEFAULT_KEY_FILE.to_string(),
            cert_file: DEFAULT_CERT_FILE.to_string(),
            hosts: DEFAULT_HOSTS.iter().map(ToString::to_string).collect(),
            server_config: PathBuf::from(DEFAULT_SERVER_CONFIG),
            marker: DEFAULT_MARKER.to_string(),
            ignore_file: PathBuf::from(DEFAULT_IGNORE_FILE),
        }
    }
}

/// Command line values that take precedence over the settings file
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub hosts: Vec<String>,
    pub cert_dir: Option<String>,
    pub server_config: Option<PathBuf>,
    pub ignore_file: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from YAML; missing keys fall back to defaults
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self> {
        // An empty file parses as null rather than an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self =
            serde_yaml::from_str(yaml).map_err(|e| DevcertsError::SettingsParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load `devcerts.yaml` from the project root, or defaults when it is absent
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(SETTINGS_FILE);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let yaml = std::fs::read_to_string(&path)
            .map_err(|e| crate::error::fs::read_failed(&path, &e))?;
        tracing::debug!(path = %path.display(), "loaded settings file");
        Self::from_yaml(&yaml, &path)
    }

    /// Apply command line overrides. A non-empty host list replaces the configured one.
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Result<Self> {
        if !overrides.hosts.is_empty() {
            self.hosts = overrides.hosts;
        }
        if let Some(cert_dir) = overrides.cert_dir {
            self.cert_dir = cert_dir;
        }
        if let Some(server_config) = overrides.server_config {
            self.server_config = server_config;
        }
        if let Some(ignore_file) = overrides.ignore_file {
            self.ignore_file = ignore_file;
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject values that would point outside the project or match every line
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: &str| {
            Err(DevcertsError::InvalidSettings {
                message: message.to_string(),
            })
        };

        if self.cert_dir_trimmed().trim().is_empty() {
            return invalid("cert_dir must name a directory, not be empty or '/'");
        }
        if self.key_file.trim().is_empty() || self.cert_file.trim().is_empty() {
            return invalid("key_file and cert_file must not be empty");
        }
        if self.marker.trim().is_empty() {
            return invalid("marker must not be empty");
        }
        if self.hosts.is_empty() {
            return invalid("hosts must list at least one host name or IP address");
        }
        if self.hosts.iter().any(|h| h.trim().is_empty()) {
            return invalid("hosts must not contain empty entries");
        }
        Ok(())
    }

    /// Directory name with any trailing separator removed
    fn cert_dir_trimmed(&self) -> &str {
        self.cert_dir.trim_end_matches(['/', '\\'])
    }

    /// Relative key path with forward slashes, e.g. `certs/localhost-key.pem`
    pub fn key_path(&self) -> String {
        format!("{}/{}", self.cert_dir_trimmed(), self.key_file)
    }

    /// Relative certificate path with forward slashes, e.g. `certs/localhost.pem`
    pub fn cert_path(&self) -> String {
        format!("{}/{}", self.cert_dir_trimmed(), self.cert_file)
    }

    /// Entry excluding the certificate directory from version control, e.g. `certs/`
    pub fn ignore_entry(&self) -> String {
        format!("{}/", self.cert_dir_trimmed())
    }

    /// Replacement for the TLS line of the server configuration
    pub fn ssl_context_line(&self) -> String {
        format!(
            "    {} = ('{}', '{}')\n",
            self.marker,
            self.cert_path(),
            self.key_path()
        )
    }
}
