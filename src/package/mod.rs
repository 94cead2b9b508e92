//! Parsing package tool output
//!
//! This module turns the line-oriented text printed by `pkg_info` into
//! structured records and version strings.

mod detail;
mod listing;

use serde::Serialize;

pub use detail::{QueryResult, parse_detail, parse_version};
pub use listing::{parse_listing, parse_package_name};

/// One installed package, as reported by a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
}
