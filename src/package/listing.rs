//! Listing parser for `pkg_info -a` style output.

use log::{debug, warn};

use super::PackageRecord;

/// Banner some tool versions print before the listing proper.
const PKGDB_BANNER: &str = "Updating the pkgdb";

/// Split a package stem such as `vim-7.3.1-no_x11` into name, version and flavor.
///
/// The name runs up to the last `-` that is followed by a digit. The version
/// runs from there to the next `-`, and the flavor is the word characters after
/// that dash. Returns `None` when the stem carries no version.
pub fn parse_package_name(stem: &str) -> Option<PackageRecord> {
    let bytes = stem.as_bytes();
    let split = (0..bytes.len().saturating_sub(1))
        .rev()
        .find(|&i| bytes[i] == b'-' && bytes[i + 1].is_ascii_digit())?;

    let name = &stem[..split];
    if name.is_empty() {
        return None;
    }

    let rest = &stem[split + 1..];
    let (version, after) = match rest.split_once('-') {
        Some((version, after)) => (version, after),
        None => (rest, ""),
    };

    let flavor_len = after
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(after.len());
    let flavor = &after[..flavor_len];

    Some(PackageRecord {
        name: name.to_string(),
        version: Some(version.to_string()),
        flavor: (!flavor.is_empty()).then(|| flavor.to_string()),
    })
}

/// Parse a listing into package records.
///
/// Each non-empty line describes one package; only its first whitespace
/// separated token is parsed. Lines that do not parse are skipped. The returned
/// iterator borrows `text` and can be recreated at will.
pub fn parse_listing(text: &str) -> impl Iterator<Item = PackageRecord> + '_ {
    text.lines().filter_map(|line| {
        let stem = line.split_whitespace().next()?;
        match parse_package_name(stem) {
            Some(record) => Some(record),
            None if line.contains(PKGDB_BANNER) => {
                debug!("Skipping pkgdb banner: {}", line);
                None
            }
            None => {
                warn!("Failed to match line {}", line);
                None
            }
        }
    })
}
