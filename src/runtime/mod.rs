//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over everything the provider
//! touches outside its own memory, enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `env` - Process environment variables and privilege information
//! - `fs` - Read-only file system access
//! - `process` - Running the package tools and capturing their output

mod env;
mod fs;
mod process;

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::Path;

use thiserror::Error;

/// A package tool could not be run, or ran and reported failure.
///
/// Distinct from a tool that ran successfully and printed nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{command}: {detail}")]
pub struct ExecutionFailure {
    /// The command line that was attempted.
    pub command: String,
    /// Diagnostic text from the tool, or the spawn error.
    pub detail: String,
}

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    /// Current value of `key`, including values that are not valid UTF-8.
    fn env_var_os(&self, key: &str) -> Option<OsString>;
    fn set_env_var(&self, key: &str, value: &OsStr);
    fn remove_env_var(&self, key: &str);

    // File System
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file. Errors are the OS's own, untouched.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    // Processes
    /// Run `program` with `args` and return its standard output.
    fn execute(&self, program: &Path, args: &[String]) -> Result<String, ExecutionFailure>;

    // Privilege
    fn is_privileged(&self) -> bool;
}

pub struct RealRuntime;

/// Serializes unit tests that touch the real process environment or spawn
/// children that inherit it.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

impl Runtime for RealRuntime {
    fn env_var_os(&self, key: &str) -> Option<OsString> {
        self.env_var_os_impl(key)
    }

    fn set_env_var(&self, key: &str, value: &OsStr) {
        self.set_env_var_impl(key, value)
    }

    fn remove_env_var(&self, key: &str) {
        self.remove_env_var_impl(key)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.read_impl(path)
    }

    fn execute(&self, program: &Path, args: &[String]) -> Result<String, ExecutionFailure> {
        self.execute_impl(program, args)
    }

    fn is_privileged(&self) -> bool {
        self.is_privileged_impl()
    }
}
