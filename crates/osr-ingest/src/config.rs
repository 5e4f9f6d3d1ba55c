//! Lookup configuration.
//!
//! The configuration names the lookup directory and, for every lookup file,
//! its file name and key/value columns. All fields are optional in TOML;
//! omitted ones fall back to the names used by the production lookup files.
//!
//! ```toml
//! lookup_dir = "/srv/osr/lookup"
//!
//! [territories]
//! file = "CAZipCode.csv"
//! key_column = "ZipCode"
//! value_column = "Sls"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Environment variable overriding the lookup directory.
pub const LOOKUP_DIR_ENV_VAR: &str = "OSR_LOOKUP_DIR";

/// Lookup directory used when nothing else names one.
pub const DEFAULT_LOOKUP_DIR: &str = "lookup";

/// One key → value lookup file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LookupSpec {
    pub file: String,
    pub key_column: String,
    pub value_column: String,
}

impl LookupSpec {
    fn new(file: &str, key_column: &str, value_column: &str) -> Self {
        Self {
            file: file.to_string(),
            key_column: key_column.to_string(),
            value_column: value_column.to_string(),
        }
    }

    /// Table name used in diagnostics: the file stem.
    pub fn name(&self) -> String {
        Path::new(&self.file)
            .file_stem()
            .map_or_else(|| self.file.clone(), |stem| stem.to_string_lossy().into_owned())
    }
}

fn default_column_library() -> String {
    "RootColumnLibrary.csv".to_string()
}

fn default_customers() -> LookupSpec {
    LookupSpec::new("rootCustomerMappings.csv", "Root Customer", "ProperName")
}

fn default_accounts() -> LookupSpec {
    LookupSpec::new("Master Account List.csv", "ProperName", "SLS")
}

fn default_territories() -> LookupSpec {
    LookupSpec::new("CAZipCode.csv", "ZipCode", "Sls")
}

fn default_end_products() -> LookupSpec {
    LookupSpec::new("EndProductMap.csv", "Proper Name", "End Product")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LookupConfig {
    #[serde(default)]
    pub lookup_dir: Option<PathBuf>,
    /// Synonym library file; absent files fall back to the built-in library.
    #[serde(default = "default_column_library")]
    pub column_library: String,
    /// Reported customer → proper name.
    #[serde(default = "default_customers")]
    pub customers: LookupSpec,
    /// Proper name → representative (the master account list).
    #[serde(default = "default_accounts")]
    pub accounts: LookupSpec,
    /// Zip code → representative.
    #[serde(default = "default_territories")]
    pub territories: LookupSpec,
    /// Proper name → suggested end product, used for Digi-Key only.
    #[serde(default = "default_end_products")]
    pub end_products: LookupSpec,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            lookup_dir: None,
            column_library: default_column_library(),
            customers: default_customers(),
            accounts: default_accounts(),
            territories: default_territories(),
            end_products: default_end_products(),
        }
    }
}

impl LookupConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| IngestError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` when it exists; otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            Some(path) => {
                debug!(path = %path.display(), "config file not found; using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Lookup directory: the explicit flag, then [`LOOKUP_DIR_ENV_VAR`], then
    /// the config file, then `./lookup`.
    pub fn lookup_dir(&self, flag: Option<&Path>) -> PathBuf {
        let env = std::env::var_os(LOOKUP_DIR_ENV_VAR).map(PathBuf::from);
        self.lookup_dir_with(flag, env)
    }

    /// [`Self::lookup_dir`] with the environment value supplied by the caller.
    pub fn lookup_dir_with(&self, flag: Option<&Path>, env: Option<PathBuf>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or(env.filter(|dir| !dir.as_os_str().is_empty()))
            .or_else(|| self.lookup_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOOKUP_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_dir_precedence() {
        let config = LookupConfig {
            lookup_dir: Some(PathBuf::from("/from/config")),
            ..LookupConfig::default()
        };
        let flag = PathBuf::from("/from/flag");
        let env = Some(PathBuf::from("/from/env"));

        assert_eq!(config.lookup_dir_with(Some(&flag), env.clone()), flag);
        assert_eq!(
            config.lookup_dir_with(None, env),
            PathBuf::from("/from/env")
        );
        assert_eq!(
            config.lookup_dir_with(None, Some(PathBuf::new())),
            PathBuf::from("/from/config")
        );
        assert_eq!(
            LookupConfig::default().lookup_dir_with(None, None),
            PathBuf::from("lookup")
        );
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: LookupConfig = toml::from_str(
            r#"
            [territories]
            file = "Territories.csv"
            key_column = "Zip"
            value_column = "Rep"
            "#,
        )
        .unwrap();
        assert_eq!(config.territories.file, "Territories.csv");
        assert_eq!(config.territories.name(), "Territories");
        assert_eq!(config.accounts, default_accounts());
        assert_eq!(config.column_library, "RootColumnLibrary.csv");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let parsed: std::result::Result<LookupConfig, _> = toml::from_str("lookup_directory = \"x\"");
        assert!(parsed.is_err());
    }
}
