//! Provider operations: install, remove and query packages.

pub mod config;
mod install;
mod query;
mod remove;

pub use config::{Config, DEFAULT_PKG_CONF, PKG_PATH_VAR, Tools};
pub use install::{EnvBinding, InstallContext, install};
pub use query::{get_version, list, query, try_list};
pub use remove::uninstall;
