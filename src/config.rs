//! Scanner configuration.
//!
//! Both Pinky scanner variants are expressed as one [`ScanConfig`]: the
//! [`Dialect`] picks the comment marker and whether literal and identifier
//! scanning is available at all.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `--` comments, numbers, strings and identifiers.
    #[default]
    Pinky,
    /// `#` comments and operators/punctuation only.
    Hash,
}

impl Dialect {
    pub fn scans_literals(self) -> bool {
        matches!(self, Self::Pinky)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default)]
    pub dialect: Dialect,

    /// Allow newlines between a string's quotes.
    #[serde(default = "default_true")]
    pub multiline_strings: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            multiline_strings: true,
        }
    }
}

impl ScanConfig {
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_multiline_strings(mut self, allowed: bool) -> Self {
        self.multiline_strings = allowed;
        self
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.dialect, Dialect::Pinky);
        assert!(config.multiline_strings);
        assert!(config.dialect.scans_literals());
        assert!(!Dialect::Hash.scans_literals());
    }

    #[test]
    fn empty_json_uses_defaults() {
        let config = ScanConfig::from_json("{}").expect("valid config");
        assert_eq!(config, ScanConfig::default());
    }

    #[test]
    fn json_overrides() {
        let config = ScanConfig::from_json(r#"{"dialect": "hash", "multiline_strings": false}"#)
            .expect("valid config");
        assert_eq!(
            config,
            ScanConfig::default()
                .with_dialect(Dialect::Hash)
                .with_multiline_strings(false)
        );
    }

    #[test]
    fn unknown_dialect_is_an_error() {
        let err = ScanConfig::from_json(r#"{"dialect": "lua"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ScanConfig::load(Path::new("/nonexistent/pinky-scan.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
