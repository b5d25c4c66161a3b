//! Environment registry for alertbar.
//!
//! Loads the ordered list of Alertmanager environments from an INI file.
//! Every section is one environment; its `url` key is the backend base URL.
//!
//! ```ini
//! [prod]
//! url = https://alertmanager.prod.example.com
//!
//! [staging]
//! url = https://alertmanager.staging.example.com
//! ```

#![forbid(unsafe_code)]

use std::io;
use std::path::{Path, PathBuf};

use ini::{Ini, Properties};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Section whose keys act as fallbacks for every other section.
const DEFAULT_SECTION: &str = "DEFAULT";

/// Key holding the backend base URL.
const URL_KEY: &str = "url";

/// Errors raised while loading the registry.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configuration file is not valid INI.
    #[error("failed to parse {}: {reason}", path.display())]
    Parse {
        /// Path of the file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// The home directory could not be determined.
    #[error("could not determine home directory")]
    NoHomeDir,
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// One named, independently polled Alertmanager backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Environment {
    name: String,
    url: String,
}

impl Environment {
    /// Creates an environment.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Environment name, as written in the section header.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Backend base URL, exactly as configured.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Ordered list of environments, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentRegistry {
    environments: Vec<Environment>,
}

impl EnvironmentRegistry {
    /// Creates a registry from already-built environments.
    pub fn new(environments: Vec<Environment>) -> Self {
        Self { environments }
    }

    /// Default location: `~/.config/bitbar/alertmanager.ini`.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".config").join("bitbar").join("alertmanager.ini"))
    }

    /// Loads the registry from `path`.
    ///
    /// A missing file yields an empty registry.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file not found, no environments");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let ini = Ini::load_from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let registry = Self::from_ini(&ini)?;
        debug!(
            path = %path.display(),
            count = registry.len(),
            "loaded environments"
        );
        Ok(registry)
    }

    /// Parses a registry from INI text.
    pub fn from_ini_str(contents: &str) -> Result<Self> {
        let ini = Ini::load_from_str(contents).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<string>"),
            reason: e.to_string(),
        })?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self> {
        let fallback_url = ini
            .section(Some(DEFAULT_SECTION))
            .and_then(url_of)
            .map(str::to_owned);

        let mut environments = Vec::new();
        for (section, props) in ini.iter() {
            // Keys before the first header and the DEFAULT section are not environments.
            let Some(name) = section else { continue };
            if name == DEFAULT_SECTION {
                continue;
            }
            let Some(url) = url_of(props).map(str::to_owned).or_else(|| fallback_url.clone())
            else {
                warn!(section = name, "skipping environment without url");
                continue;
            };
            environments.push(Environment::new(name, url));
        }
        Ok(Self { environments })
    }

    /// Iterates environments in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Environment> {
        self.environments.iter()
    }

    /// Environments as a slice.
    pub fn as_slice(&self) -> &[Environment] {
        &self.environments
    }

    /// Number of environments.
    pub fn len(&self) -> usize {
        self.environments.len()
    }

    /// Returns true if no environments are configured.
    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }
}

impl<'a> IntoIterator for &'a EnvironmentRegistry {
    type Item = &'a Environment;
    type IntoIter = std::slice::Iter<'a, Environment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Option names are case-insensitive, so `URL` and `Url` also match.
fn url_of(props: &Properties) -> Option<&str> {
    props
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(URL_KEY))
        .map(|(_, value)| value)
}
