//! Deciding where packages are installed from.
//!
//! An explicit source always wins. Without one, the `installpath` directive of
//! the package configuration file is used.

mod config;

use std::fmt;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::runtime::Runtime;

pub use config::{ConfigEntry, ConfigLookup, INSTALLPATH_KEY, parse_config_line, read_pkg_conf};

/// Trailing character marking a repository directory. Sources are paths or
/// URLs in the package tools' syntax, not host paths.
pub const REPOSITORY_SEPARATOR: char = '/';

/// Where a package comes from: a repository directory or a single package
/// reference handed straight to the install tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSource(String);

impl InstallSource {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A source is a repository directory iff its last character is `/`, on
    /// every platform. Nothing is looked up on disk.
    pub fn is_repository(&self) -> bool {
        self.0.ends_with(REPOSITORY_SEPARATOR)
    }
}

impl fmt::Display for InstallSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Produce the effective install source.
///
/// `explicit` is returned verbatim when present, even if empty. Otherwise the
/// configuration file at `config_path` decides; a read failure is returned as
/// [`Error::ConfigUnreadable`] carrying the original OS error.
#[tracing::instrument(skip(runtime))]
pub fn resolve_source<R: Runtime>(
    runtime: &R,
    explicit: Option<&str>,
    config_path: &Path,
) -> Result<InstallSource> {
    if let Some(source) = explicit {
        debug!("Using explicit source {:?}", source);
        return Ok(InstallSource::new(source));
    }

    match read_pkg_conf(runtime, config_path)? {
        ConfigLookup::Missing => Err(Error::NoSourceSpecified(config_path.to_path_buf())),
        ConfigLookup::NoEntry => Err(Error::NoValidInstallPath(config_path.to_path_buf())),
        ConfigLookup::Found(entry) => {
            debug!("Using {} from {:?}: {:?}", entry.key, config_path, entry.value);
            Ok(InstallSource::new(entry.value))
        }
    }
}
