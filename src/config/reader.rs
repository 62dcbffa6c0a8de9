//! Typed readers over the INI store
//!
//! Scalar readers extract and range-check one value each; the list reader
//! turns a comma-separated value into an ordered sequence. Every failure
//! is logged with the section, key, and offending value before it is
//! returned, so the assembler only has to propagate.

use log::{error, warn};

use super::defaults::BoolKey;
use super::error::{ConfigError, Result};
use super::keystore::IniStore;

/// Read a 16-bit port-style value.
///
/// Absence is an error only when `required`; a present value must parse
/// and fall in `1..=65535`.
pub(crate) fn read_u16(
    store: &IniStore,
    section: &str,
    key: &str,
    required: bool,
) -> Result<Option<u16>> {
    let raw = match store.get_str(section, key) {
        Some(raw) => raw,
        None if required => return Err(missing_key(section, key)),
        None => return Ok(None),
    };

    match store.get_int(section, key) {
        Some(val) if (1..=i64::from(u16::MAX)).contains(&val) => Ok(Some(val as u16)),
        _ => Err(invalid_value(section, key, raw)),
    }
}

/// Read a 32-bit count-style value.
///
/// Same shape as [`read_u16`], but 0 is legal ("unset") and the upper
/// bound is `i32::MAX`.
pub(crate) fn read_u32(
    store: &IniStore,
    section: &str,
    key: &str,
    required: bool,
) -> Result<Option<u32>> {
    let raw = match store.get_str(section, key) {
        Some(raw) => raw,
        None if required => return Err(missing_key(section, key)),
        None => return Ok(None),
    };

    match store.get_int(section, key) {
        Some(val) if (0..=i64::from(i32::MAX)).contains(&val) => Ok(Some(val as u32)),
        _ => Err(invalid_value(section, key, raw)),
    }
}

/// Read a boolean flag, falling back to the key's documented default when
/// absent. This reader never fails.
///
/// Value handling is kept bit-compatible with deployed configuration
/// files: `TRUE` in any case reads as true, the integer literal 1 reads
/// as false, and every other value, unparseable text included, reads as
/// true.
pub(crate) fn read_bool(store: &IniStore, key: &BoolKey) -> bool {
    let raw = match store.get_str(key.section, key.key) {
        Some(raw) => raw,
        None => {
            warn!(
                "key '{}.{}' not found, value defaults to {}",
                key.section, key.key, key.fallback
            );
            return key.fallback;
        }
    };

    if raw.eq_ignore_ascii_case("true") {
        return true;
    }

    store.get_int(key.section, key.key).unwrap_or(0) != 1
}

/// Read an optional string value, failing only when `required` and absent.
pub(crate) fn read_str(
    store: &IniStore,
    section: &str,
    key: &str,
    required: bool,
) -> Result<Option<String>> {
    match store.get_str(section, key) {
        Some(value) => Ok(Some(value.to_owned())),
        None if required => Err(missing_key(section, key)),
        None => Ok(None),
    }
}

/// Split a comma-separated value into its ordered elements.
///
/// Absent or empty input yields an empty list, not an error. Elements are
/// trimmed, empty elements are dropped, order and duplicates are kept.
pub(crate) fn read_list(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(raw) if !raw.is_empty() => raw
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    }
}

fn missing_key(section: &str, key: &str) -> ConfigError {
    error!("key '{}.{}' does not exist", section, key);
    ConfigError::MissingKey {
        section: section.to_string(),
        key: key.to_string(),
    }
}

fn invalid_value(section: &str, key: &str, value: &str) -> ConfigError {
    error!("invalid value '{}' for key '{}.{}'", value, section, key);
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
    }
}
