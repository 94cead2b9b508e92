//! Installing a package with the install tool.
//!
//! A repository-directory source is passed through the `PKG_PATH` environment
//! variable and the package is requested by name. Any other source is handed to
//! the install tool as the package argument itself.

use std::ffi::{OsStr, OsString};

use log::{debug, info, warn};

use super::config::{Config, PKG_PATH_VAR};
use crate::error::{Error, Result};
use crate::runtime::Runtime;
use crate::source::{InstallSource, resolve_source};

/// State of a single install call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallContext {
    pub source: InstallSource,
    pub package: String,
    /// Whether `PKG_PATH` is bound for this call.
    pub uses_pkg_path: bool,
}

impl InstallContext {
    pub fn new(source: InstallSource, package: &str) -> Self {
        Self {
            uses_pkg_path: source.is_repository(),
            source,
            package: package.to_string(),
        }
    }

    /// The single argument given to the install tool.
    pub fn argument(&self) -> &str {
        if self.uses_pkg_path {
            &self.package
        } else {
            self.source.as_str()
        }
    }
}

/// An environment variable bound for the lifetime of the guard.
///
/// On drop the previous value is put back, or the variable is removed if it
/// was not set before. Drop runs on early returns and unwinding alike.
pub struct EnvBinding<'a, R: Runtime> {
    runtime: &'a R,
    key: &'a str,
    previous: Option<OsString>,
}

impl<'a, R: Runtime> EnvBinding<'a, R> {
    pub fn acquire(runtime: &'a R, key: &'a str, value: &str) -> Self {
        let previous = runtime.env_var_os(key);
        debug!("Binding {}={:?} (previous: {:?})", key, value, previous);
        runtime.set_env_var(key, OsStr::new(value));
        Self {
            runtime,
            key,
            previous,
        }
    }
}

impl<R: Runtime> Drop for EnvBinding<'_, R> {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(value) => self.runtime.set_env_var(self.key, &value),
            None => self.runtime.remove_env_var(self.key),
        }
        debug!("Released {}", self.key);
    }
}

/// Install `package`, taking it from `explicit_source` or the configured
/// install path.
#[tracing::instrument(skip(config))]
pub fn install<R: Runtime>(
    config: &Config<R>,
    package: &str,
    explicit_source: Option<&str>,
) -> Result<()> {
    let source = resolve_source(&config.runtime, explicit_source, &config.pkg_conf)?;
    let ctx = InstallContext::new(source, package);
    debug!("Install context: {:?}", ctx);

    if !config.runtime.is_privileged() {
        warn!("Installing {} without root privileges; the install tool may refuse", package);
    }

    let _binding = ctx
        .uses_pkg_path
        .then(|| EnvBinding::acquire(&config.runtime, PKG_PATH_VAR, ctx.source.as_str()));

    config
        .runtime
        .execute(&config.tools.pkg_add, &[ctx.argument().to_string()])
        .map_err(Error::install_failed)?;

    info!("Installed {} from {}", package, ctx.source);
    Ok(())
}
