//! Reading the install path out of the package configuration file.
//!
//! The file holds one `key = value` directive per line. Only `installpath`
//! matters here; the key is compared case-insensitively, leading whitespace of
//! the value is dropped, and trailing whitespace is kept verbatim.

use std::io;
use std::path::Path;

use log::debug;

use crate::runtime::Runtime;

/// The directive naming the default package repository.
pub const INSTALLPATH_KEY: &str = "installpath";

/// A `key = value` pair taken from one configuration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    /// Lowercased, trimmed key.
    pub key: String,
    pub value: String,
}

/// Outcome of looking for an install path in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLookup {
    /// The file does not exist.
    Missing,
    /// The file exists but no line carries a usable install path.
    NoEntry,
    Found(ConfigEntry),
}

/// Parse one configuration line, returning the entry only if it is a non-empty
/// `installpath` directive.
pub fn parse_config_line(line: &str) -> Option<ConfigEntry> {
    let (raw_key, raw_value) = line.split_once('=')?;

    let key = raw_key.trim().to_lowercase();
    if key != INSTALLPATH_KEY {
        return None;
    }

    let value = raw_value.trim_start();
    let value = value
        .strip_suffix("\r\n")
        .or_else(|| value.strip_suffix('\n'))
        .unwrap_or(value);
    if value.is_empty() {
        return None;
    }

    Some(ConfigEntry {
        key,
        value: value.to_string(),
    })
}

/// Find the first usable install path in the configuration file at `path`.
///
/// A missing file is reported as [`ConfigLookup::Missing`]; a file that exists
/// but cannot be read yields the OS error unchanged.
#[tracing::instrument(skip(runtime))]
pub fn read_pkg_conf<R: Runtime>(runtime: &R, path: &Path) -> io::Result<ConfigLookup> {
    if !runtime.exists(path) {
        debug!("Package configuration {:?} does not exist", path);
        return Ok(ConfigLookup::Missing);
    }

    let bytes = runtime.read(path)?;
    let contents = String::from_utf8_lossy(&bytes);

    match contents.split_inclusive('\n').find_map(parse_config_line) {
        Some(entry) => {
            debug!("Found {} = {:?} in {:?}", entry.key, entry.value, path);
            Ok(ConfigLookup::Found(entry))
        }
        None => {
            debug!("No usable {} line in {:?}", INSTALLPATH_KEY, path);
            Ok(ConfigLookup::NoEntry)
        }
    }
}
