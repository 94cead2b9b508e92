//! Removing packages with the delete tool.

use log::info;

use super::config::Config;
use crate::error::{Error, Result};
use crate::runtime::Runtime;

/// Remove `package` with the delete tool. With `purge`, its configuration
/// files go too.
#[tracing::instrument(skip(config))]
pub fn uninstall<R: Runtime>(config: &Config<R>, package: &str, purge: bool) -> Result<()> {
    let mut args = Vec::new();
    if purge {
        args.push("-c".to_string());
        args.push("-q".to_string());
    }
    args.push(package.to_string());

    config
        .runtime
        .execute(&config.tools.pkg_delete, &args)
        .map_err(Error::remove_failed)?;

    info!("Removed {}", package);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{ExecutionFailure, MockRuntime};
    use std::path::Path;

    #[test]
    fn test_uninstall() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_execute()
            .withf(|p, args| p == Path::new("/usr/sbin/pkg_delete") && args == ["bash".to_string()])
            .times(1)
            .returning(|_, _| Ok(String::new()));

        uninstall(&Config::new(runtime), "bash", false).unwrap();
    }

    #[test]
    fn test_purge() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_execute()
            .withf(|_, args| args == ["-c", "-q", "bash"])
            .times(1)
            .returning(|_, _| Ok(String::new()));

        uninstall(&Config::new(runtime), "bash", true).unwrap();
    }

    #[test]
    fn test_uninstall_failure() {
        let mut runtime = MockRuntime::new();
        runtime.expect_execute().returning(|_, _| {
            Err(ExecutionFailure {
                command: "/usr/sbin/pkg_delete bash".into(),
                detail: "bash: not installed".into(),
            })
        });

        let err = uninstall(&Config::new(runtime), "bash", false).unwrap_err();
        assert!(matches!(err, Error::RemoveCommandFailed { ref detail, .. } if detail == "bash: not installed"));
    }
}
