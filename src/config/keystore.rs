//! Read-only view over the parsed INI section/key store
//!
//! The INI reader itself is an external collaborator; this adapter only
//! narrows it to the two lookups the typed readers need.

use std::path::Path;

use ini::Ini;

use super::error::{ConfigError, Result};

/// Section/key string store backed by a parsed INI document.
#[derive(Debug)]
pub(crate) struct IniStore {
    ini: Ini,
}

impl IniStore {
    /// Parse `path` into a store.
    ///
    /// Any read or syntax problem surfaces as [`ConfigError::ParseError`].
    pub fn from_file(path: &Path) -> Result<Self> {
        match Ini::load_from_file(path) {
            Ok(ini) => Ok(Self { ini }),
            Err(err) => Err(ConfigError::ParseError(format!(
                "{}: {}",
                path.display(),
                err
            ))),
        }
    }

    /// Parse in-memory INI text into a store.
    pub fn from_buffer(text: &str) -> Result<Self> {
        match Ini::load_from_str(text) {
            Ok(ini) => Ok(Self { ini }),
            Err(err) => Err(ConfigError::ParseError(err.to_string())),
        }
    }

    /// Raw string value for `section`/`key`, if present.
    pub fn get_str(&self, section: &str, key: &str) -> Option<&str> {
        self.ini.get_from(Some(section), key)
    }

    /// Value reinterpreted as an integer; `None` when absent or unparseable.
    pub fn get_int(&self, section: &str, key: &str) -> Option<i64> {
        self.get_str(section, key)
            .and_then(|raw| raw.trim().parse::<i64>().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let store = IniStore::from_buffer("[Server]\nHost = 0.0.0.0\nPort = 3389\n").unwrap();

        assert_eq!(store.get_str("Server", "Host"), Some("0.0.0.0"));
        assert_eq!(store.get_int("Server", "Port"), Some(3389));
        assert_eq!(store.get_str("Server", "Missing"), None);
        assert_eq!(store.get_str("Missing", "Host"), None);
    }

    #[test]
    fn test_get_int_unparseable() {
        let store = IniStore::from_buffer("[Server]\nPort = not-a-number\n").unwrap();

        assert_eq!(store.get_str("Server", "Port"), Some("not-a-number"));
        assert_eq!(store.get_int("Server", "Port"), None);
    }

    #[test]
    fn test_malformed_ini() {
        let err = IniStore::from_buffer("[Server\nHost = 0.0.0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
