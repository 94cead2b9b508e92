//! Environment variables and privilege information.

use std::env;
use std::ffi::{OsStr, OsString};

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn env_var_os_impl(&self, key: &str) -> Option<OsString> {
        env::var_os(key)
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn set_env_var_impl(&self, key: &str, value: &OsStr) {
        // The environment is process-wide; callers serialize installs.
        unsafe {
            env::set_var(key, value);
        }
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn remove_env_var_impl(&self, key: &str) {
        unsafe {
            env::remove_var(key);
        }
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn is_privileged_impl(&self) -> bool {
        #[cfg(unix)]
        return nix::unistd::geteuid().as_raw() == 0;

        #[cfg(not(unix))]
        return false;
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{ENV_LOCK, RealRuntime, Runtime};
    use std::ffi::OsStr;

    #[test]
    fn test_real_runtime_env_round_trip() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let runtime = RealRuntime;
        let key = "PKGPROV_RUNTIME_ENV_TEST";

        assert_eq!(runtime.env_var_os(key), None);

        runtime.set_env_var(key, OsStr::new("/mirror/packages/"));
        assert_eq!(runtime.env_var_os(key).unwrap(), "/mirror/packages/");

        runtime.remove_env_var(key);
        assert_eq!(runtime.env_var_os(key), None);

        // Should work without panic
        let _ = runtime.is_privileged();
    }

    #[cfg(unix)]
    #[test]
    fn test_real_runtime_env_keeps_non_utf8_values() {
        use std::os::unix::ffi::OsStrExt;

        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let runtime = RealRuntime;
        let key = "PKGPROV_RUNTIME_ENV_NON_UTF8_TEST";
        let value = OsStr::from_bytes(b"/prev/\xff/");

        runtime.set_env_var(key, value);
        assert_eq!(runtime.env_var_os(key).as_deref(), Some(value));

        runtime.remove_env_var(key);
        assert_eq!(runtime.env_var_os(key), None);
    }
}
