//! Read-only queries against the package database.
//!
//! A tool that cannot be run yields `None` ("unknown"), which is kept apart
//! from a tool that ran and reported nothing.

use log::{debug, warn};

use super::config::Config;
use crate::error::{Error, Result};
use crate::package::{PackageRecord, QueryResult, parse_detail, parse_listing, parse_version};
use crate::runtime::Runtime;

fn pkg_info<R: Runtime>(config: &Config<R>, args: &[&str]) -> Result<String> {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    config
        .runtime
        .execute(&config.tools.pkg_info, &args)
        .map_err(Error::unavailable)
}

/// Run the listing tool, failing with [`Error::ExecutionUnavailable`] if it
/// cannot be run.
#[tracing::instrument(skip(config))]
pub fn try_list<R: Runtime>(config: &Config<R>) -> Result<Vec<PackageRecord>> {
    let text = pkg_info(config, &["-a"])?;
    let packages: Vec<_> = parse_listing(&text).collect();
    debug!("Found {} installed package(s)", packages.len());
    Ok(packages)
}

/// All installed packages, or `None` when the listing tool could not be run.
pub fn list<R: Runtime>(config: &Config<R>) -> Option<Vec<PackageRecord>> {
    match try_list(config) {
        Ok(packages) => Some(packages),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

/// Installed version of `package`.
///
/// `Some("")` means the package is not installed; `None` means the tool could
/// not be run.
#[tracing::instrument(skip(config))]
pub fn get_version<R: Runtime>(config: &Config<R>, package: &str) -> Option<String> {
    match pkg_info(config, &["-I", package]) {
        Ok(text) => Some(parse_version(&text)),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

/// Installed state of `package` from its detailed info, or `None` if it is not
/// installed.
#[tracing::instrument(skip(config))]
pub fn query<R: Runtime>(config: &Config<R>, package: &str) -> Option<QueryResult> {
    match pkg_info(config, &[package]) {
        Ok(text) => parse_detail(package, &text),
        Err(e) => {
            // pkg_info exits non-zero for packages that are not installed.
            debug!("{}", e);
            None
        }
    }
}
