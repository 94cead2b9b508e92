pub mod commands;
pub mod error;
pub mod package;
pub mod runtime;
pub mod source;

pub use error::{Error, Result};
