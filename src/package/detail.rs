//! Detail parser for single-package `pkg_info` output.

use serde::Serialize;

use super::listing::parse_package_name;

/// Header line `pkg_info NAME` prints for an installed package.
const INFO_HEADER: &str = "Information for ";

/// Installed state of one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    /// The installed version, including any flavor suffix.
    pub ensure: String,
}

/// Extract the version from `pkg_info -I NAME` output.
///
/// The first line whose leading token is a versioned package stem wins. Empty
/// output, or output with no such line, means the package is not installed
/// and yields an empty string.
pub fn parse_version(text: &str) -> String {
    text.lines()
        .filter_map(|line| line.split_whitespace().next())
        .find_map(parse_package_name)
        .and_then(|record| record.version)
        .unwrap_or_default()
}

/// Extract the installed version of `name` from `pkg_info NAME` output.
///
/// Looks for the `Information for [inst:]NAME-VERSION` header. Returns `None`
/// for empty text or when no header names this package.
pub fn parse_detail(name: &str, text: &str) -> Option<QueryResult> {
    text.lines().find_map(|line| {
        let (_, rest) = line.split_once(INFO_HEADER)?;
        let stem = rest.split_whitespace().next()?;
        let stem = stem.strip_prefix("inst:").unwrap_or(stem);
        let stem = stem.strip_suffix(':').unwrap_or(stem);

        let record = parse_package_name(stem)?;
        if record.name != name {
            return None;
        }

        let ensure = &stem[name.len() + 1..];
        Some(QueryResult {
            ensure: ensure.to_string(),
        })
    })
}
