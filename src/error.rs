//! Error kinds surfaced by install, remove and query operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::runtime::ExecutionFailure;

#[derive(Debug, Error)]
pub enum Error {
    /// No explicit source and no package configuration file.
    #[error(
        "You must specify a package source or configure an installpath in {}",
        .0.display()
    )]
    NoSourceSpecified(PathBuf),

    /// The configuration file exists but has no usable installpath line.
    #[error("No valid installpath found in {} and no source was set", .0.display())]
    NoValidInstallPath(PathBuf),

    /// The configuration file exists but could not be read.
    #[error(transparent)]
    ConfigUnreadable(#[from] io::Error),

    #[error("Install failed: {command}: {detail}")]
    InstallCommandFailed { command: String, detail: String },

    #[error("Removal failed: {command}: {detail}")]
    RemoveCommandFailed { command: String, detail: String },

    /// A read-only query tool could not be run at all.
    #[error("Could not run {command}: {detail}")]
    ExecutionUnavailable { command: String, detail: String },
}

impl Error {
    pub(crate) fn install_failed(failure: ExecutionFailure) -> Self {
        Error::InstallCommandFailed {
            command: failure.command,
            detail: failure.detail,
        }
    }

    pub(crate) fn remove_failed(failure: ExecutionFailure) -> Self {
        Error::RemoveCommandFailed {
            command: failure.command,
            detail: failure.detail,
        }
    }

    pub(crate) fn unavailable(failure: ExecutionFailure) -> Self {
        Error::ExecutionUnavailable {
            command: failure.command,
            detail: failure.detail,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
