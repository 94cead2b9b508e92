//! Running package tools.

use std::path::Path;
use std::process::Command;

use log::debug;

use super::{ExecutionFailure, RealRuntime};

/// Render a command line for diagnostics.
pub(crate) fn command_line(program: &Path, args: &[String]) -> String {
    let mut line = program.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn execute_impl(
        &self,
        program: &Path,
        args: &[String],
    ) -> Result<String, ExecutionFailure> {
        let command = command_line(program, args);
        debug!("Executing {}", command);

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| ExecutionFailure {
                command: command.clone(),
                detail: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            };
            return Err(ExecutionFailure { command, detail });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
