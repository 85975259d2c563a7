//! Configuration manager for signup.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const DEFAULT_LOG_FILTER: &str = "info";
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Smallest accepted account ID entropy, in bytes.
const MIN_ID_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Instance name.
    pub name: String,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub log: String,
    #[serde(skip_deserializing)]
    version: String,
    #[serde(skip)]
    path: PathBuf,
    /// Related to email validation.
    pub email: Email,
    /// Related to account creation.
    pub accounts: Accounts,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            name: env!("CARGO_CRATE_NAME").into(),
            log: DEFAULT_LOG_FILTER.into(),
            version: String::default(),
            path: PathBuf::default(),
            email: Email::default(),
            accounts: Accounts::default(),
        }
    }
}

/// Email validation configuration.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Email {
    /// Longest accepted address, in bytes.
    pub max_length: usize,
}

impl Default for Email {
    fn default() -> Self {
        // RFC 5321 path limit minus the angle brackets.
        Self { max_length: 254 }
    }
}

/// Account creation configuration.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Accounts {
    /// Random bytes in a generated account ID.
    pub id_length: usize,
}

impl Default for Accounts {
    fn default() -> Self {
        Self { id_length: 16 }
    }
}

impl Configuration {
    pub fn path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    /// Crate version the configuration was loaded by.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Reads the `config.yaml` file from the specified path or the default
    /// location.
    ///
    /// A missing or malformed file falls back to defaults. Values that
    /// parse but cannot work are rejected.
    pub fn read(self) -> Result<Arc<Self>> {
        let file_path = if self.path.is_file() {
            &self.path
        } else {
            &Path::new(DEFAULT_CONFIG_PATH).to_path_buf()
        };

        let mut config = match File::open(file_path) {
            Ok(file) => match serde_yaml::from_reader(file) {
                Ok(config) => config,
                Err(err) => self.error(err),
            },
            Err(err) => self.error(err),
        };

        // set app version.
        config.version = VERSION.to_owned();
        config.path = file_path.clone();
        config.validate()?;

        Ok(Arc::new(config))
    }

    fn validate(&self) -> Result<()> {
        if self.email.max_length == 0 {
            return Err(Error::InvalidConfiguration(
                "`email.max_length` must be positive".into(),
            ));
        }

        if self.accounts.id_length < MIN_ID_LENGTH {
            return Err(Error::InvalidConfiguration(format!(
                "`accounts.id_length` must be at least {MIN_ID_LENGTH}"
            )));
        }

        Ok(())
    }

    /// Return a default configuration as fallback.
    fn error(&self, err: impl std::error::Error) -> Self {
        tracing::error!(error = %err, "`config.yaml` file not found or invalid");
        Self {
            version: VERSION.to_owned(),
            ..Default::default()
        }
    }
}
