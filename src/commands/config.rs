//! Tool locations and the package configuration file used by every command.

use std::path::PathBuf;

use crate::runtime::Runtime;

/// Package configuration file read for the default install path.
pub const DEFAULT_PKG_CONF: &str = "/etc/pkg.conf";

/// Variable the install tool reads to find a repository directory.
pub const PKG_PATH_VAR: &str = "PKG_PATH";

/// Locations of the package tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tools {
    pub pkg_info: PathBuf,
    pub pkg_add: PathBuf,
    pub pkg_delete: PathBuf,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            pkg_info: PathBuf::from("/usr/sbin/pkg_info"),
            pkg_add: PathBuf::from("/usr/sbin/pkg_add"),
            pkg_delete: PathBuf::from("/usr/sbin/pkg_delete"),
        }
    }
}

pub struct Config<R: Runtime> {
    pub runtime: R,
    pub tools: Tools,
    pub pkg_conf: PathBuf,
}

impl<R: Runtime> Config<R> {
    pub fn new(runtime: R) -> Self {
        Self {
            runtime,
            tools: Tools::default(),
            pkg_conf: PathBuf::from(DEFAULT_PKG_CONF),
        }
    }

    pub fn with_tools(mut self, tools: Tools) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_pkg_conf(mut self, pkg_conf: impl Into<PathBuf>) -> Self {
        self.pkg_conf = pkg_conf.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;

    #[test]
    fn test_config_defaults() {
        let config = Config::new(MockRuntime::new());
        assert_eq!(config.pkg_conf, PathBuf::from("/etc/pkg.conf"));
        assert_eq!(config.tools.pkg_add, PathBuf::from("/usr/sbin/pkg_add"));
    }

    #[test]
    fn test_config_overrides() {
        let tools = Tools {
            pkg_info: "/opt/bin/pkg_info".into(),
            ..Tools::default()
        };
        let config = Config::new(MockRuntime::new())
            .with_tools(tools)
            .with_pkg_conf("/tmp/pkg.conf");

        assert_eq!(config.tools.pkg_info, PathBuf::from("/opt/bin/pkg_info"));
        assert_eq!(config.tools.pkg_delete, PathBuf::from("/usr/sbin/pkg_delete"));
        assert_eq!(config.pkg_conf, PathBuf::from("/tmp/pkg.conf"));
    }
}
